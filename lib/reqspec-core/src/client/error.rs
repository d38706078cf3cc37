use std::fmt::Debug;

use super::response::output::Output;

/// Errors that can occur when using the [`ApiClient`](crate::ApiClient).
///
/// The contract-level variants are [`UnexpectedStatusCode`](Self::UnexpectedStatusCode),
/// [`UnexpectedContentType`](Self::UnexpectedContentType) and
/// [`SchemaMismatch`](Self::SchemaMismatch): they are raised by a
/// [`ResponseExpectation`](crate::ResponseExpectation) gate or by the deserialization
/// of a response model. Every variant is terminal for the calling test.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum ApiClientError {
    /// HTTP client error from the underlying reqwest library.
    ///
    /// Occurs when network requests fail, timeouts occur, or connection issues arise.
    ReqwestError(reqwest::Error),

    /// URL parsing error when constructing request URLs.
    UrlError(url::ParseError),

    /// HTTP header processing error.
    HeadersError(headers::Error),

    /// HTTP protocol error from the http crate.
    HttpError(http::Error),

    /// Invalid base URI.
    InvalidUri(http::uri::InvalidUri),

    /// Invalid HTTP header name.
    InvalidHeaderName(http::header::InvalidHeaderName),

    /// Invalid HTTP header value.
    InvalidHeaderValue(http::header::InvalidHeaderValue),

    /// JSON serialization error, e.g. when building a request body.
    JsonValueError(serde_json::Error),

    /// I/O error while writing a report.
    IoError(std::io::Error),

    /// A report cannot be serialized.
    #[display("Cannot serialize report: {error}")]
    #[from(skip)]
    ReportSerialization {
        /// The serializer error message.
        error: String,
    },

    /// Invalid base path configuration.
    #[display("Invalid base path: {error}")]
    #[from(skip)]
    InvalidBasePath {
        /// Description of why the base path is invalid.
        error: String,
    },

    /// The response status is not one of the expected status codes.
    #[display("Unexpected status code {status_code}, expected {expected}: {body}")]
    #[from(skip)]
    UnexpectedStatusCode {
        /// The expected status codes, as displayed by [`ExpectedStatusCodes`](crate::ExpectedStatusCodes).
        expected: String,
        /// The status code received.
        status_code: u16,
        /// The response body (truncated) for debugging.
        body: String,
    },

    /// The response content type does not match the declared constraint.
    #[display("Unexpected content type {actual:?}, expected {expected}: {body}")]
    #[from(skip)]
    UnexpectedContentType {
        /// The expected media type essence (e.g. `text/html`).
        expected: String,
        /// The received `Content-Type` header, if any.
        actual: Option<String>,
        /// The response body (truncated) for debugging.
        body: String,
    },

    /// The JSON payload cannot be mapped onto the target model.
    #[display("Schema mismatch for {target} at '{path}': {error}\n{body}")]
    #[from(skip)]
    SchemaMismatch {
        /// The target model type name.
        target: &'static str,
        /// The JSON path where the mapping failed.
        path: String,
        /// The underlying JSON error.
        error: serde_json::Error,
        /// The response body that failed to map.
        body: String,
    },

    /// Response output is incompatible with JSON deserialization.
    #[display("Unsupported output for {name} as JSON:\n{output:?}")]
    #[from(skip)]
    UnsupportedJsonOutput {
        /// The actual response output received.
        output: Output,
        /// Name of the target type.
        name: &'static str,
    },

    /// Response output is binary, text was requested.
    #[display("Unsupported output for text:\n{output:?}")]
    #[from(skip)]
    UnsupportedTextOutput {
        /// The actual response output received.
        output: Output,
    },

    /// An empty response was expected but a body was received.
    #[display("Expected an empty body, got:\n{output:?}")]
    #[from(skip)]
    UnexpectedBody {
        /// The actual response output received.
        output: Output,
    },

    /// Path template contains unresolved parameters.
    #[display("Path '{path}' is missing required arguments: {missings:?}")]
    #[from(skip)]
    PathUnresolved {
        /// The path template that couldn't be resolved.
        path: String,
        /// List of missing parameter names.
        missings: Vec<String>,
    },

    /// Parameter value cannot be rendered in a path or a header.
    #[display("Unsupported parameter value: {message}. Got: {value}")]
    #[from(skip)]
    UnsupportedParameterValue {
        /// Specific error message describing the conversion failure.
        message: String,
        /// The value that failed to convert.
        value: serde_json::Value,
    },
}
