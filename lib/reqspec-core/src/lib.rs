//! # Reqspec Core
//!
//! Declarative request and response specifications for REST API contract tests.
//!
//! A test is written as a short pipeline:
//!
//! 1. an [`EndpointSpec`], the reusable request template of a resource family
//!    (base path, default content type, logged details),
//! 2. an optional request body ([`ApiCall::json`], [`ApiCall::plain`], ...),
//! 3. one HTTP verb ([`ApiClient::get`], [`ApiClient::post`], ...),
//! 4. a [`ResponseExpectation`] gate on the status code and content type,
//! 5. the mapping of the body onto a model with [`CallResult::as_json`],
//! 6. plain assertions on the model fields.
//!
//! ```rust,no_run
//! use reqspec_core::{ApiClient, CallPath, EndpointSpec, ResponseExpectation, step};
//! use serde::Deserialize;
//!
//! #[derive(Debug, Deserialize)]
//! struct UserEnvelope {
//!     data: Option<UserRecord>,
//! }
//!
//! #[derive(Debug, Deserialize)]
//! struct UserRecord {
//!     id: u32,
//!     email: String,
//! }
//!
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let client = ApiClient::builder()
//!     .with_base_uri("https://reqres.in/api")?
//!     .build()?;
//! let users = EndpointSpec::new("/users");
//!
//! let call = client
//!     .get(&users, CallPath::from("/{id}").add_param("id", 3))?
//!     .expect(ResponseExpectation::success());
//! let envelope: UserEnvelope = step("Make Request", call).await?.as_json()?;
//!
//! step("Check Response", async move {
//!     let user = envelope.data.expect("user section");
//!     assert_eq!(user.id, 3);
//!     assert_eq!(user.email, "emma.wong@reqres.in");
//! })
//! .await;
//! # Ok(())
//! # }
//! ```
//!
//! Every exchange is journaled as a [`CallReport`], see
//! [`ApiClient::collected_reports`] and [`ApiClient::write_report`].
//!
//! For hermetic runs, [`test_client::TestClient`] launches an in-process
//! server and points a client at it.
//!
//! ## Features
//!
//! - `tls`: HTTPS support in `reqwest`, needed against a live API
//! - `yaml`: YAML reports with `serde-saphyr`

mod client;

pub mod test_client;

#[cfg(feature = "yaml")]
mod yaml;
#[cfg(feature = "yaml")]
pub use self::yaml::{ToYaml, YamlError};

pub use self::client::{
    API_KEY_ENV, ApiCall, ApiClient, ApiClientBuilder, ApiClientError, BASE_URI_ENV, CallBody,
    CallHeaders, CallPath, CallReport, CallResult, EndpointSpec, ExpectedStatusCodes, LogDetail,
    Outcome, Output, ParameterValue, RawBody, RawResult, ReportFormat, ResponseExpectation, step,
};

/// Creates an [`ExpectedStatusCodes`] instance from status codes and inclusive ranges.
///
/// ```rust
/// use reqspec_core::expected_status_codes;
///
/// let codes = expected_status_codes!(200, 201, 400-404);
/// assert!(codes.contains(201));
/// assert!(codes.contains(403));
/// assert!(!codes.contains(500));
/// ```
#[macro_export]
macro_rules! expected_status_codes {
    () => {
        $crate::ExpectedStatusCodes::default()
    };

    ($single:literal) => {
        $crate::ExpectedStatusCodes::from_single($single)
    };

    ($start:literal - $end:literal) => {
        $crate::ExpectedStatusCodes::from_inclusive_range($start..=$end)
    };

    ($first:literal, $($rest:tt)*) => {{
        #[allow(unused_mut)]
        let mut codes = $crate::ExpectedStatusCodes::from_single($first);
        $crate::expected_status_codes!(@accumulate codes, $($rest)*);
        codes
    }};

    ($start:literal - $end:literal, $($rest:tt)*) => {{
        #[allow(unused_mut)]
        let mut codes = $crate::ExpectedStatusCodes::from_inclusive_range($start..=$end);
        $crate::expected_status_codes!(@accumulate codes, $($rest)*);
        codes
    }};

    (@accumulate $codes:ident,) => {};

    (@accumulate $codes:ident) => {};

    (@accumulate $codes:ident, $single:literal) => {
        $codes = $codes.add_single($single);
    };

    (@accumulate $codes:ident, $single:literal, $($rest:tt)*) => {
        $codes = $codes.add_single($single);
        $crate::expected_status_codes!(@accumulate $codes, $($rest)*);
    };

    (@accumulate $codes:ident, $start:literal - $end:literal) => {
        $codes = $codes.add_inclusive_range($start..=$end);
    };

    (@accumulate $codes:ident, $start:literal - $end:literal, $($rest:tt)*) => {
        $codes = $codes.add_inclusive_range($start..=$end);
        $crate::expected_status_codes!(@accumulate $codes, $($rest)*);
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_expected_status_codes_macro() {
        let codes = expected_status_codes!(204);
        assert!(codes.contains(204));
        assert!(!codes.contains(200));

        let codes = expected_status_codes!(200-299);
        assert!(codes.contains(250));

        let codes = expected_status_codes!(200, 201, 400-404,);
        insta::assert_snapshot!(codes, @"200 | 201 | 400..=404");

        let codes = expected_status_codes!();
        insta::assert_snapshot!(codes, @"200..=499");
    }
}
