use headers::ContentType;
use serde::Serialize;

use super::ApiCall;
use crate::client::{
    ApiClientError, CallBody, CallHeaders, ExpectedStatusCodes, ParameterValue,
    ResponseExpectation,
};

// Headers
impl ApiCall {
    /// Adds a request header, overriding client and endpoint headers of the same name.
    pub fn with_header<T: ParameterValue>(mut self, name: impl Into<String>, value: T) -> Self {
        self.headers = self.headers.add_header(name, value);
        self
    }

    /// Adds several request headers.
    pub fn with_headers(mut self, headers: CallHeaders) -> Self {
        self.headers = self.headers.merge(headers);
        self
    }
}

// Expectation
impl ApiCall {
    /// Attaches the expectation checked before the result is handed back.
    ///
    /// ```rust,no_run
    /// use reqspec_core::{ApiClient, CallPath, EndpointSpec, ResponseExpectation};
    ///
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// let client = ApiClient::builder().build()?;
    /// let users = EndpointSpec::new("/users");
    ///
    /// client
    ///     .delete(&users, CallPath::from("/{id}").add_param("id", 2))?
    ///     .expect(ResponseExpectation::no_content())
    ///     .await?
    ///     .as_empty()?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn expect(mut self, expectation: ResponseExpectation) -> Self {
        self.expectation = Some(expectation);
        self
    }

    /// Shorthand for an unnamed expectation on status codes only.
    pub fn with_expected_status_codes(self, status_codes: ExpectedStatusCodes) -> Self {
        self.expect(ResponseExpectation::custom("custom", status_codes))
    }
}

// Body
impl ApiCall {
    /// Sets a JSON request body.
    ///
    /// # Errors
    ///
    /// Fails if the value cannot be serialized.
    pub fn json<T>(self, value: &T) -> Result<Self, ApiClientError>
    where
        T: Serialize + ?Sized,
    {
        let body = CallBody::json(value)?;
        Ok(self.body(body))
    }

    /// Sends data as-is, labelled with the endpoint default content type.
    pub fn plain(self, data: impl Into<Vec<u8>>) -> Self {
        self.body(CallBody::plain(data))
    }

    /// Sets a `text/plain` request body.
    pub fn text(self, text: &str) -> Self {
        self.body(CallBody::text(text))
    }

    /// Sets a raw request body with an explicit content type.
    pub fn raw(self, data: Vec<u8>, content_type: ContentType) -> Self {
        self.body(CallBody::raw(data, content_type))
    }

    /// Sets the request body.
    pub fn body(mut self, body: CallBody) -> Self {
        self.body = Some(body);
        self
    }
}
