use headers::ContentType;
use serde::Serialize;

use crate::client::ApiClientError;

/// The body of an HTTP request.
///
/// A body built with [`CallBody::plain`] carries no content type of its own:
/// the default content type of the [`EndpointSpec`](crate::EndpointSpec) applies.
#[derive(Clone, derive_more::Debug, PartialEq)]
pub struct CallBody {
    pub(in crate::client) content_type: Option<ContentType>,
    #[debug("{} byte(s)", data.len())]
    pub(in crate::client) data: Vec<u8>,
}

impl CallBody {
    /// Creates a JSON body from a serializable value.
    ///
    /// ```rust
    /// # use reqspec_core::CallBody;
    /// # use serde::Serialize;
    /// # fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// #[derive(Serialize)]
    /// struct UserCreationRequest {
    ///     name: String,
    ///     job: String,
    /// }
    ///
    /// let request = UserCreationRequest {
    ///     name: "morpheus".to_string(),
    ///     job: "leader".to_string(),
    /// };
    /// let body = CallBody::json(&request)?;
    /// assert_eq!(body.as_text(), r#"{"name":"morpheus","job":"leader"}"#);
    /// # Ok(())
    /// # }
    /// ```
    pub fn json<T>(value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = serde_json::to_vec(value)?;
        Ok(Self {
            content_type: Some(ContentType::json()),
            data,
        })
    }

    /// Creates a body sent as-is, with the endpoint default content type.
    ///
    /// This is how a malformed payload is sent to a JSON endpoint.
    pub fn plain(data: impl Into<Vec<u8>>) -> Self {
        Self {
            content_type: None,
            data: data.into(),
        }
    }

    /// Creates a `text/plain` body.
    pub fn text(text: &str) -> Self {
        Self::raw(text.as_bytes().to_vec(), ContentType::text())
    }

    /// Creates a body with a custom content type.
    pub fn raw(data: Vec<u8>, content_type: ContentType) -> Self {
        Self {
            content_type: Some(content_type),
            data,
        }
    }

    /// The body as (lossy) UTF-8 text, as recorded in reports.
    pub fn as_text(&self) -> String {
        String::from_utf8_lossy(&self.data).into_owned()
    }

    /// The body length in bytes.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns true if the body has no byte.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Serialize)]
    struct RegistrationData {
        email: String,
        password: String,
    }

    #[test]
    fn should_build_json_body() {
        let data = RegistrationData {
            email: "test.test@reqres.in".to_string(),
            password: "testpswd".to_string(),
        };

        let body = CallBody::json(&data).expect("serializable");

        assert_eq!(body.content_type, Some(ContentType::json()));
        insta::assert_snapshot!(body.as_text(), @r#"{"email":"test.test@reqres.in","password":"testpswd"}"#);
    }

    #[test]
    fn should_keep_plain_body_without_content_type() {
        let body = CallBody::plain("fff");

        assert_eq!(body.content_type, None);
        assert_eq!(body.len(), 3);
        insta::assert_debug_snapshot!(body, @r#"
        CallBody {
            content_type: None,
            data: 3 byte(s),
        }
        "#);
    }

    #[test]
    fn should_build_text_body() {
        let body = CallBody::text("hello");

        assert_eq!(body.content_type, Some(ContentType::text()));
        assert!(!body.is_empty());
    }
}
