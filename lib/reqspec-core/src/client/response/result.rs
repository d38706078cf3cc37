use std::any::type_name;

use headers::{ContentType, Header};
use http::StatusCode;
use http::header::CONTENT_TYPE;
use reqwest::Response;
use serde::de::DeserializeOwned;

use super::output::Output;
use crate::client::ApiClientError;

/// Maximum number of bytes of a body kept in error messages.
pub(in crate::client) const BODY_MAX_LENGTH: usize = 1024;

/// The result of an API call that went through its [`ResponseExpectation`](crate::ResponseExpectation) gate.
///
/// The body is fully read; use one of the `as_*` methods to map it onto
/// the shape the test expects.
///
/// ```rust,no_run
/// use reqspec_core::{ApiClient, CallPath, EndpointSpec, ResponseExpectation};
/// # use serde::Deserialize;
/// # #[derive(Deserialize)]
/// # struct UserEnvelope { data: Option<serde_json::Value> }
///
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let client = ApiClient::builder().with_host("reqres.in").build()?;
/// let users = EndpointSpec::new("/users");
///
/// let envelope: UserEnvelope = client
///     .get(&users, CallPath::from("/{id}").add_param("id", 3))?
///     .expect(ResponseExpectation::success())
///     .await?
///     .as_json()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CallResult {
    status: StatusCode,
    content_type: Option<ContentType>,
    output: Output,
}

/// Complete raw access to a response: status, content type, and body.
#[derive(Debug, Clone)]
pub struct RawResult {
    status: StatusCode,
    content_type: Option<ContentType>,
    body: RawBody,
}

/// The body content of a raw HTTP response.
#[derive(Debug, Clone, PartialEq)]
pub enum RawBody {
    /// Text-based content (JSON, HTML, ...)
    Text(String),
    /// Binary content
    Binary(Vec<u8>),
    /// Empty response body
    Empty,
}

impl RawResult {
    /// Returns the HTTP status code of the response.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// Returns the content type of the response, if present.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// Returns the response body.
    pub fn body(&self) -> &RawBody {
        &self.body
    }

    /// Returns the response body as text if it's text content.
    pub fn text(&self) -> Option<&str> {
        match &self.body {
            RawBody::Text(text) => Some(text),
            RawBody::Binary(_) | RawBody::Empty => None,
        }
    }

    /// Returns true if the response body is empty.
    pub fn is_empty(&self) -> bool {
        matches!(self.body, RawBody::Empty)
    }
}

impl CallResult {
    fn extract_content_type(response: &Response) -> Result<Option<ContentType>, ApiClientError> {
        let content_type = response
            .headers()
            .get_all(CONTENT_TYPE)
            .iter()
            .collect::<Vec<_>>();

        if content_type.is_empty() {
            Ok(None)
        } else {
            let ct = ContentType::decode(&mut content_type.into_iter())?;
            Ok(Some(ct))
        }
    }

    pub(in crate::client) async fn from_response(
        response: Response,
    ) -> Result<Self, ApiClientError> {
        let status = response.status();
        let content_type = Self::extract_content_type(&response)?;
        let data = if status == StatusCode::NO_CONTENT {
            Vec::new()
        } else {
            response.bytes().await?.to_vec()
        };
        let output = Output::classify(content_type.as_ref(), data);

        Ok(Self::new(status, content_type, output))
    }

    pub(in crate::client) fn new(
        status: StatusCode,
        content_type: Option<ContentType>,
        output: Output,
    ) -> Self {
        Self {
            status,
            content_type,
            output,
        }
    }

    /// The response status code.
    pub fn status_code(&self) -> StatusCode {
        self.status
    }

    /// The response content type, if any.
    pub fn content_type(&self) -> Option<&ContentType> {
        self.content_type.as_ref()
    }

    /// The classified response body.
    pub fn output(&self) -> &Output {
        &self.output
    }

    /// The body for diagnostics, truncated to 1024 bytes.
    pub(in crate::client) fn body_excerpt(&self) -> String {
        match self.output.as_text() {
            Some(text) => truncate(text),
            None => "<binary body>".to_string(),
        }
    }

    /// Deserializes the JSON body into a response model.
    ///
    /// Sections modelled with `Option` may be absent: an empty object `{}`
    /// maps onto a model with every optional section set to `None`.
    ///
    /// # Errors
    ///
    /// - [`ApiClientError::UnsupportedJsonOutput`] if the body is neither JSON nor empty
    /// - [`ApiClientError::SchemaMismatch`] if the payload shape does not fit `T`,
    ///   an empty body included
    pub fn as_json<T>(&self) -> Result<T, ApiClientError>
    where
        T: DeserializeOwned,
    {
        // An empty body is malformed JSON, not another kind of output.
        let json = match &self.output {
            Output::Json(json) => json.as_str(),
            Output::Empty => "",
            _ => {
                return Err(ApiClientError::UnsupportedJsonOutput {
                    output: self.output.clone(),
                    name: type_name::<T>(),
                });
            }
        };

        let deserializer = &mut serde_json::Deserializer::from_str(json);
        serde_path_to_error::deserialize(deserializer).map_err(|err| {
            ApiClientError::SchemaMismatch {
                target: type_name::<T>(),
                path: err.path().to_string(),
                error: err.into_inner(),
                body: truncate(json),
            }
        })
    }

    /// Returns the body as text, whatever its textual content type.
    ///
    /// An empty body is returned as an empty string.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::UnsupportedTextOutput`] on binary bodies.
    pub fn as_text(&self) -> Result<&str, ApiClientError> {
        self.output
            .as_text()
            .ok_or_else(|| ApiClientError::UnsupportedTextOutput {
                output: self.output.clone(),
            })
    }

    /// Checks the response has no body.
    ///
    /// # Errors
    ///
    /// Fails with [`ApiClientError::UnexpectedBody`] if a body was received.
    pub fn as_empty(&self) -> Result<(), ApiClientError> {
        if self.output.is_empty() {
            Ok(())
        } else {
            Err(ApiClientError::UnexpectedBody {
                output: self.output.clone(),
            })
        }
    }

    /// Returns the complete raw response.
    pub fn as_raw(&self) -> RawResult {
        let body = match &self.output {
            Output::Empty => RawBody::Empty,
            Output::Json(body) | Output::Text(body) | Output::Other { body } => {
                RawBody::Text(body.clone())
            }
            Output::Bytes(bytes) => RawBody::Binary(bytes.clone()),
        };

        RawResult {
            status: self.status,
            content_type: self.content_type.clone(),
            body,
        }
    }
}

pub(in crate::client) fn truncate(text: &str) -> String {
    if text.len() <= BODY_MAX_LENGTH {
        return text.to_string();
    }
    let mut end = BODY_MAX_LENGTH;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    let head = text.get(..end).unwrap_or_default();
    format!("{head}... (truncated)")
}
