//! Endpoint specifications and named response expectations, one module per
//! reqres resource family.
//!
//! Every function here is a pure factory: each call returns a fresh value,
//! nothing is shared between tests.

use reqspec_core::EndpointSpec;

mod common;
pub use self::common::successful_response;

mod registration;
pub use self::registration::{registration_endpoint, registration_not_allowed};

mod unknown;
pub use self::unknown::unknown_endpoint;

mod users;
pub use self::users::{
    bad_request_html, nonexistent_user, user_created, user_deleted, users_endpoint,
};

/// The reqres resource families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Resource {
    #[display("users")]
    Users,
    #[display("register")]
    Registration,
    #[display("unknown")]
    Unknown,
}

impl Resource {
    /// The endpoint specification of this resource family.
    pub fn endpoint(self) -> EndpointSpec {
        match self {
            Self::Users => users_endpoint(),
            Self::Registration => registration_endpoint(),
            Self::Unknown => unknown_endpoint(),
        }
    }
}
