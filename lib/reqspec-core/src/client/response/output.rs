use headers::ContentType;
use mime::Mime;

/// The response body, classified by its content type.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Output {
    /// No body (e.g. 204 No Content).
    Empty,
    /// A JSON document (`application/json` or `+json`).
    Json(String),
    /// A textual document (`text/*`, e.g. an HTML error page).
    Text(String),
    /// Binary content (`application/octet-stream`).
    Bytes(Vec<u8>),
    /// Anything else, decoded as lossy UTF-8.
    Other {
        /// The body.
        body: String,
    },
}

impl Output {
    pub(in crate::client) fn classify(content_type: Option<&ContentType>, data: Vec<u8>) -> Self {
        if data.is_empty() {
            return Self::Empty;
        }

        let Some(media) = content_type.map(|ct| Mime::from(ct.clone())) else {
            return Self::Other {
                body: String::from_utf8_lossy(&data).into_owned(),
            };
        };

        let is_json = media.type_() == mime::APPLICATION
            && (media.subtype() == mime::JSON
                || media.suffix().is_some_and(|suffix| suffix == mime::JSON));

        if is_json {
            Self::Json(String::from_utf8_lossy(&data).into_owned())
        } else if media.type_() == mime::TEXT {
            Self::Text(String::from_utf8_lossy(&data).into_owned())
        } else if media.essence_str() == mime::APPLICATION_OCTET_STREAM.essence_str() {
            Self::Bytes(data)
        } else {
            Self::Other {
                body: String::from_utf8_lossy(&data).into_owned(),
            }
        }
    }

    /// The body as text, if it is not binary. An empty body is an empty string.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Empty => Some(""),
            Self::Json(body) | Self::Text(body) | Self::Other { body } => Some(body),
            Self::Bytes(_) => None,
        }
    }

    /// Returns true if there is no body.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn content_type(value: &str) -> ContentType {
        ContentType::from(value.parse::<Mime>().expect("valid mime"))
    }

    #[test]
    fn should_classify_json_with_charset() {
        let ct = content_type("application/json; charset=utf-8");

        let output = Output::classify(Some(&ct), b"{}".to_vec());

        assert_eq!(output, Output::Json("{}".to_string()));
    }

    #[test]
    fn should_classify_problem_json() {
        let ct = content_type("application/problem+json");

        let output = Output::classify(Some(&ct), br#"{"title":"oops"}"#.to_vec());

        assert!(matches!(output, Output::Json(_)));
    }

    #[test]
    fn should_classify_html_as_text() {
        let ct = content_type("text/html; charset=utf-8");

        let output = Output::classify(Some(&ct), b"<title>Error</title>".to_vec());

        assert_eq!(output.as_text(), Some("<title>Error</title>"));
    }

    #[test]
    fn should_classify_empty_body() {
        let ct = ContentType::json();

        let output = Output::classify(Some(&ct), Vec::new());

        assert!(output.is_empty());
        assert_eq!(output.as_text(), Some(""));
    }

    #[test]
    fn should_classify_bytes() {
        let output = Output::classify(Some(&ContentType::octet_stream()), vec![1, 2, 3]);

        assert_eq!(output, Output::Bytes(vec![1, 2, 3]));
        assert_eq!(output.as_text(), None);
    }

    #[test]
    fn should_classify_missing_content_type_as_other() {
        let output = Output::classify(None, b"plop".to_vec());

        assert_eq!(
            output,
            Output::Other {
                body: "plop".to_string()
            }
        );
    }
}
