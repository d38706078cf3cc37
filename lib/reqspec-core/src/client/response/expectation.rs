use http::StatusCode;
use mime::Mime;
use tracing::info;

use super::result::CallResult;
use super::status::ExpectedStatusCodes;
use crate::client::ApiClientError;
use crate::client::LogDetail;

/// The semantic outcome a test expects from a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Outcome {
    /// `200 OK`
    #[display("success")]
    Success,
    /// `201 Created`
    #[display("created")]
    Created,
    /// `204 No Content`
    #[display("no-content")]
    NoContent,
    /// `400 Bad Request`
    #[display("bad-request")]
    BadRequest,
    /// `404 Not Found`
    #[display("not-found")]
    NotFound,
}

impl Outcome {
    /// The status code associated with this outcome.
    pub fn status_code(self) -> StatusCode {
        match self {
            Self::Success => StatusCode::OK,
            Self::Created => StatusCode::CREATED,
            Self::NoContent => StatusCode::NO_CONTENT,
            Self::BadRequest => StatusCode::BAD_REQUEST,
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// What a valid response for an outcome looks like.
///
/// A `ResponseExpectation` is a plain value: build it with a factory,
/// attach it to any number of calls with [`ApiCall::expect`](crate::ApiCall::expect).
///
/// ```rust
/// use reqspec_core::{Outcome, ResponseExpectation};
///
/// let expectation = ResponseExpectation::not_found();
/// assert_eq!(expectation, ResponseExpectation::for_outcome(Outcome::NotFound));
/// assert!(expectation.status_codes().contains(404));
/// assert!(!expectation.status_codes().contains(200));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseExpectation {
    label: String,
    status_codes: ExpectedStatusCodes,
    content_type: Option<Mime>,
    log: Vec<LogDetail>,
}

impl ResponseExpectation {
    /// Default response details recorded by an expectation.
    pub const DEFAULT_LOG: &'static [LogDetail] = &[LogDetail::Status, LogDetail::Body];

    /// Builds the expectation for an outcome, logging status and body.
    pub fn for_outcome(outcome: Outcome) -> Self {
        Self {
            label: outcome.to_string(),
            status_codes: ExpectedStatusCodes::from_status_code(outcome.status_code()),
            content_type: None,
            log: Self::DEFAULT_LOG.to_vec(),
        }
    }

    /// Builds an expectation from arbitrary status codes.
    pub fn custom(label: impl Into<String>, status_codes: ExpectedStatusCodes) -> Self {
        Self {
            label: label.into(),
            status_codes,
            content_type: None,
            log: Self::DEFAULT_LOG.to_vec(),
        }
    }

    /// `200 OK`
    pub fn success() -> Self {
        Self::for_outcome(Outcome::Success)
    }

    /// `201 Created`
    pub fn created() -> Self {
        Self::for_outcome(Outcome::Created)
    }

    /// `204 No Content`
    pub fn no_content() -> Self {
        Self::for_outcome(Outcome::NoContent)
    }

    /// `400 Bad Request`
    pub fn bad_request() -> Self {
        Self::for_outcome(Outcome::BadRequest)
    }

    /// `404 Not Found`
    pub fn not_found() -> Self {
        Self::for_outcome(Outcome::NotFound)
    }

    /// Declares the expected content type.
    ///
    /// Only the essence (`type/subtype`) is compared, parameters like
    /// `charset` are ignored.
    pub fn with_content_type(mut self, content_type: Mime) -> Self {
        self.content_type = Some(content_type);
        self
    }

    /// Replaces the recorded response details.
    pub fn with_log(mut self, log: &[LogDetail]) -> Self {
        self.log = log.to_vec();
        self
    }

    /// The expectation label, e.g. `not-found`.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// The accepted status codes.
    pub fn status_codes(&self) -> &ExpectedStatusCodes {
        &self.status_codes
    }

    /// The declared content type, if any.
    pub fn content_type(&self) -> Option<&Mime> {
        self.content_type.as_ref()
    }

    /// Checks a response against this expectation.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::UnexpectedStatusCode`] if the status is not expected
    /// - [`ApiClientError::UnexpectedContentType`] if a content type is declared
    ///   and the response one is missing or different
    pub fn verify(&self, result: &CallResult) -> Result<(), ApiClientError> {
        let status = result.status_code();
        if !self.status_codes.contains_status_code(status) {
            return Err(ApiClientError::UnexpectedStatusCode {
                expected: self.status_codes.to_string(),
                status_code: status.as_u16(),
                body: result.body_excerpt(),
            });
        }

        if let Some(expected) = &self.content_type {
            let actual = result.content_type().map(|ct| Mime::from(ct.clone()));
            let matches = actual
                .as_ref()
                .is_some_and(|actual| actual.essence_str() == expected.essence_str());
            if !matches {
                return Err(ApiClientError::UnexpectedContentType {
                    expected: expected.essence_str().to_string(),
                    actual: actual.map(|it| it.to_string()),
                    body: result.body_excerpt(),
                });
            }
        }

        self.log_response(result);
        Ok(())
    }

    fn log_response(&self, result: &CallResult) {
        for detail in &self.log {
            match detail {
                LogDetail::Status => {
                    info!(expectation = %self.label, status = %result.status_code(), "response status");
                }
                LogDetail::Body => {
                    info!(expectation = %self.label, body = %result.body_excerpt(), "response body");
                }
                LogDetail::Headers => {
                    let content_type = result.content_type().map(ToString::to_string);
                    info!(expectation = %self.label, ?content_type, "response headers");
                }
                LogDetail::Uri => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use headers::ContentType;

    use super::*;
    use crate::client::response::output::Output;

    fn result(status: StatusCode, content_type: Option<ContentType>, output: Output) -> CallResult {
        CallResult::new(status, content_type, output)
    }

    #[test]
    fn should_map_outcomes_to_status_codes() {
        let outcomes = [
            (Outcome::Success, 200),
            (Outcome::Created, 201),
            (Outcome::NoContent, 204),
            (Outcome::BadRequest, 400),
            (Outcome::NotFound, 404),
        ];

        for (outcome, expected) in outcomes {
            assert_eq!(outcome.status_code().as_u16(), expected, "{outcome}");
        }
    }

    #[test]
    fn should_be_deterministic() {
        assert_eq!(
            ResponseExpectation::bad_request(),
            ResponseExpectation::bad_request()
        );
        assert_ne!(
            ResponseExpectation::bad_request(),
            ResponseExpectation::not_found()
        );
    }

    #[test]
    fn not_found_should_accept_404() {
        let response = result(
            StatusCode::NOT_FOUND,
            Some(ContentType::json()),
            Output::Json("{}".to_string()),
        );

        ResponseExpectation::not_found()
            .verify(&response)
            .expect("404 accepted");
    }

    #[test]
    fn not_found_should_reject_200() {
        let response = result(
            StatusCode::OK,
            Some(ContentType::json()),
            Output::Json(r#"{"data":{}}"#.to_string()),
        );

        let error = ResponseExpectation::not_found()
            .verify(&response)
            .expect_err("200 rejected");

        insta::assert_debug_snapshot!(error, @r#"
        UnexpectedStatusCode {
            expected: "404",
            status_code: 200,
            body: "{\"data\":{}}",
        }
        "#);
    }

    #[test]
    fn should_ignore_content_type_when_not_declared() {
        let response = result(
            StatusCode::BAD_REQUEST,
            Some(ContentType::json()),
            Output::Json(r#"{"error":"Missing password"}"#.to_string()),
        );

        ResponseExpectation::bad_request()
            .verify(&response)
            .expect("no content type constraint");
    }

    #[test]
    fn should_accept_declared_content_type_with_parameters() {
        let html = "text/html; charset=utf-8".parse::<Mime>().expect("valid mime");
        let response = result(
            StatusCode::BAD_REQUEST,
            Some(ContentType::from(html)),
            Output::Text("<title>Error</title>".to_string()),
        );

        ResponseExpectation::bad_request()
            .with_content_type(mime::TEXT_HTML)
            .verify(&response)
            .expect("html accepted");
    }

    #[test]
    fn should_reject_other_content_type() {
        let response = result(
            StatusCode::BAD_REQUEST,
            Some(ContentType::json()),
            Output::Json("{}".to_string()),
        );

        let error = ResponseExpectation::bad_request()
            .with_content_type(mime::TEXT_HTML)
            .verify(&response)
            .expect_err("json rejected");

        insta::assert_debug_snapshot!(error, @r#"
        UnexpectedContentType {
            expected: "text/html",
            actual: Some(
                "application/json",
            ),
            body: "{}",
        }
        "#);
    }

    #[test]
    fn should_reject_missing_content_type() {
        let response = result(StatusCode::BAD_REQUEST, None, Output::Empty);

        let error = ResponseExpectation::bad_request()
            .with_content_type(mime::TEXT_HTML)
            .verify(&response)
            .expect_err("missing content type rejected");

        assert!(matches!(
            error,
            ApiClientError::UnexpectedContentType { actual: None, .. }
        ));
    }

    #[test]
    fn should_check_status_before_content_type() {
        let response = result(
            StatusCode::OK,
            Some(ContentType::json()),
            Output::Json("{}".to_string()),
        );

        let error = ResponseExpectation::bad_request()
            .with_content_type(mime::TEXT_HTML)
            .verify(&response)
            .expect_err("rejected");

        assert!(matches!(error, ApiClientError::UnexpectedStatusCode { .. }));
    }

    #[test]
    fn custom_expectation_should_accept_ranges() {
        let expectation = ResponseExpectation::custom(
            "any-success",
            ExpectedStatusCodes::from_inclusive_range(200..=299),
        );
        let response = result(StatusCode::NO_CONTENT, None, Output::Empty);

        expectation.verify(&response).expect("2xx accepted");
        assert_eq!(expectation.label(), "any-success");
    }
}
