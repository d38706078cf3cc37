//! Request parameter types for building API calls.
//!
//! - [`CallPath`] - Path suffix with `{name}` parameters (e.g., `/{id}`)
//! - [`CallHeaders`] - HTTP headers
//! - [`CallBody`] - Request body content

mod param;
pub use self::param::ParameterValue;

mod path;
pub use self::path::CallPath;
pub(in crate::client) use self::path::PathResolved;

mod headers;
pub use self::headers::CallHeaders;

mod body;
pub use self::body::CallBody;
