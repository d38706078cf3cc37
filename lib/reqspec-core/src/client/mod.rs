use std::path::Path;

use http::{Method, Uri};

mod builder;
pub use self::builder::{API_KEY_ENV, ApiClientBuilder, BASE_URI_ENV};

mod call;
pub use self::call::ApiCall;

mod endpoint;
pub use self::endpoint::{EndpointSpec, LogDetail};

mod parameters;
use self::parameters::PathResolved;
pub use self::parameters::{CallBody, CallHeaders, CallPath, ParameterValue};

mod response;
pub use self::response::{
    CallResult, ExpectedStatusCodes, Outcome, Output, RawBody, RawResult, ResponseExpectation,
};

mod report;
use self::report::Journal;
pub use self::report::{CallReport, ReportFormat, step};

mod error;
pub use self::error::ApiClientError;

/// HTTP client running [`EndpointSpec`]-derived calls and journaling them.
///
/// Use [`ApiClientBuilder`] to create instances. Cloning a client is cheap,
/// clones share the same report journal.
///
/// # Example
///
/// ```rust,no_run
/// use reqspec_core::{ApiClient, CallPath, EndpointSpec, ResponseExpectation};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder()
///     .with_base_uri("https://reqres.in/api")?
///     .build()?;
/// let users = EndpointSpec::new("/users");
///
/// let user: serde_json::Value = client
///     .get(&users, CallPath::from("/{id}").add_param("id", 3))?
///     .expect(ResponseExpectation::success())
///     .await?
///     .as_json()?;
///
/// client.write_report("target/reqres-report.json").await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_uri: Uri,
    default_headers: CallHeaders,
    journal: Journal,
}

// Create
impl ApiClient {
    /// Creates a builder with the default configuration.
    pub fn builder() -> ApiClientBuilder {
        ApiClientBuilder::default()
    }

    /// The base URI every endpoint base path is appended to.
    pub fn base_uri(&self) -> &Uri {
        &self.base_uri
    }
}

// Reports
impl ApiClient {
    /// Returns every exchange recorded so far, in call order.
    pub async fn collected_reports(&self) -> Vec<CallReport> {
        self.journal.reports().await
    }

    /// Writes the recorded exchanges to a file.
    ///
    /// The format follows the extension, see [`ReportFormat::from_path`].
    ///
    /// # Errors
    ///
    /// Fails if the report cannot be serialized or written.
    pub async fn write_report(&self, path: impl AsRef<Path>) -> Result<(), ApiClientError> {
        let reports = self.journal.reports().await;
        report::write_reports(path.as_ref(), &reports).await
    }
}

// Calls
impl ApiClient {
    /// Applies a verb to an endpoint specification.
    ///
    /// The path is appended to the endpoint base path. Its `{name}` parameters
    /// are checked here, before anything is sent.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::PathUnresolved`] if a placeholder has no
    /// argument, or [`ApiClientError::UnsupportedParameterValue`] if an argument
    /// cannot be rendered in a path.
    pub fn call(
        &self,
        endpoint: &EndpointSpec,
        method: Method,
        path: CallPath,
    ) -> Result<ApiCall, ApiClientError> {
        PathResolved::try_from(path.clone())?;
        Ok(ApiCall::build(
            self.client.clone(),
            self.base_uri.clone(),
            self.journal.clone(),
            &self.default_headers,
            endpoint,
            method,
            path,
        ))
    }

    /// `GET` on an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub fn get(
        &self,
        endpoint: &EndpointSpec,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        self.call(endpoint, Method::GET, path.into())
    }

    /// `POST` on an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub fn post(
        &self,
        endpoint: &EndpointSpec,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        self.call(endpoint, Method::POST, path.into())
    }

    /// `PUT` on an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub fn put(
        &self,
        endpoint: &EndpointSpec,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        self.call(endpoint, Method::PUT, path.into())
    }

    /// `PATCH` on an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub fn patch(
        &self,
        endpoint: &EndpointSpec,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        self.call(endpoint, Method::PATCH, path.into())
    }

    /// `DELETE` on an endpoint.
    ///
    /// # Errors
    ///
    /// See [`ApiClient::call`].
    pub fn delete(
        &self,
        endpoint: &EndpointSpec,
        path: impl Into<CallPath>,
    ) -> Result<ApiCall, ApiClientError> {
        self.call(endpoint, Method::DELETE, path.into())
    }
}
