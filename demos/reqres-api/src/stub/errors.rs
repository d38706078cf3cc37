use axum::Json;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde_json::json;

use crate::models::RegistrationError;

/// The page served for a body that is not valid JSON.
pub const MALFORMED_BODY_PAGE: &str = "<!DOCTYPE html>
<html lang=\"en\">
<head>
<meta charset=\"utf-8\">
<title>Error</title>
</head>
<body>
<pre>Bad Request</pre>
</body>
</html>
";

#[derive(Debug, derive_more::Error, derive_more::From, derive_more::Display)]
pub(crate) enum StubError {
    #[display("Malformed JSON body: {_0}")]
    MalformedBody(serde_json::Error),

    #[display("Resource not found")]
    #[from(skip)]
    NotFound,

    #[display("Registration refused: {message}")]
    #[from(skip)]
    RegistrationRefused { message: String },
}

impl IntoResponse for StubError {
    fn into_response(self) -> Response {
        match self {
            Self::MalformedBody(_) => {
                (StatusCode::BAD_REQUEST, Html(MALFORMED_BODY_PAGE)).into_response()
            }
            Self::NotFound => (StatusCode::NOT_FOUND, Json(json!({}))).into_response(),
            Self::RegistrationRefused { message } => (
                StatusCode::BAD_REQUEST,
                Json(RegistrationError { error: message }),
            )
                .into_response(),
        }
    }
}
