//! Response handling: status validation, expectation gates, and deserialization.
//!
//! - [`ExpectedStatusCodes`] - Valid status codes for a call
//! - [`ResponseExpectation`] - Reusable status/content-type gate keyed by [`Outcome`]
//! - [`CallResult`] - The response body, mapped onto models with `as_json`

mod status;
pub use self::status::ExpectedStatusCodes;

mod expectation;
pub use self::expectation::{Outcome, ResponseExpectation};

pub(in crate::client) mod output;
pub use self::output::Output;

mod result;
pub(in crate::client) use self::result::truncate;
pub use self::result::{CallResult, RawBody, RawResult};
