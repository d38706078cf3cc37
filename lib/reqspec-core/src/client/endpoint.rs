use headers::ContentType;

use super::{CallHeaders, ParameterValue};

/// A request or response detail recorded in the step report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogDetail {
    /// The request method and URI.
    Uri,
    /// The request headers.
    Headers,
    /// The request or response body.
    Body,
    /// The response status.
    Status,
}

/// A reusable request template scoped to one resource family.
///
/// An `EndpointSpec` is inert: nothing happens until it is used with a verb
/// (see [`ApiClient::get`](crate::ApiClient::get) and friends), and every call
/// derived from it is independent.
///
/// ```rust
/// use reqspec_core::{EndpointSpec, LogDetail};
///
/// let users = EndpointSpec::new("/users");
/// assert_eq!(users.name(), "users");
/// assert_eq!(users.base_path(), "/users");
/// assert_eq!(users.log(), EndpointSpec::DEFAULT_LOG);
/// assert_eq!(users, EndpointSpec::new("users"));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointSpec {
    name: String,
    base_path: String,
    content_type: ContentType,
    headers: CallHeaders,
    log: Vec<LogDetail>,
}

impl EndpointSpec {
    /// Default request details recorded by an endpoint.
    pub const DEFAULT_LOG: &'static [LogDetail] =
        &[LogDetail::Uri, LogDetail::Body, LogDetail::Headers];

    /// Creates a specification for a base path segment, appended to the
    /// client base URI.
    ///
    /// The default body content type is `application/json`.
    pub fn new(base_path: impl Into<String>) -> Self {
        let base_path = normalize(&base_path.into());
        let name = slug::slugify(&base_path);
        Self {
            name,
            base_path,
            content_type: ContentType::json(),
            headers: CallHeaders::default(),
            log: Self::DEFAULT_LOG.to_vec(),
        }
    }

    /// Overrides the name used in reports.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Overrides the default content type of request bodies.
    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    /// Adds a header sent with every call of this endpoint.
    pub fn with_header<T: ParameterValue>(mut self, name: impl Into<String>, value: T) -> Self {
        self.headers = self.headers.add_header(name, value);
        self
    }

    /// Replaces the recorded request details.
    pub fn with_log(mut self, log: &[LogDetail]) -> Self {
        self.log = log.to_vec();
        self
    }

    /// The endpoint name, used in reports.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base path segment, always starting with `/` (or empty for the root).
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The default content type of request bodies.
    pub fn content_type(&self) -> &ContentType {
        &self.content_type
    }

    /// The endpoint headers.
    pub fn headers(&self) -> &CallHeaders {
        &self.headers
    }

    /// The recorded request details.
    pub fn log(&self) -> &[LogDetail] {
        &self.log
    }

    pub(in crate::client) fn logs(&self, detail: LogDetail) -> bool {
        self.log.contains(&detail)
    }
}

fn normalize(path: &str) -> String {
    let trimmed = path.trim_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else {
        format!("/{trimmed}")
    }
}
