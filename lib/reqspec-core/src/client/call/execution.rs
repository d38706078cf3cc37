use std::future::{Future, IntoFuture};
use std::pin::Pin;

use headers::{ContentType, HeaderMapExt};
use http::header::{HeaderName, HeaderValue};
use http::{Method, Uri};
use reqwest::{Body, Request};
use tracing::{debug, info};
use url::Url;

use super::ApiCall;
use crate::client::parameters::PathResolved;
use crate::client::report::{CallReport, Journal};
use crate::client::response::truncate;
use crate::client::{
    ApiClientError, CallBody, CallHeaders, CallPath, CallResult, EndpointSpec,
    ExpectedStatusCodes, LogDetail, ResponseExpectation,
};

impl ApiCall {
    pub(in crate::client) fn build(
        client: reqwest::Client,
        base_uri: Uri,
        journal: Journal,
        default_headers: &CallHeaders,
        endpoint: &EndpointSpec,
        method: Method,
        path: CallPath,
    ) -> Self {
        let headers = default_headers.clone().merge(endpoint.headers().clone());

        Self {
            client,
            base_uri,
            journal,
            endpoint: endpoint.clone(),
            method,
            path,
            headers,
            body: None,
            expectation: None,
        }
    }
}

impl ApiCall {
    /// Sends the request, then checks the response against the attached
    /// expectation (or `200..500` without one).
    ///
    /// Every exchange is recorded in the client journal, passed or not.
    async fn exchange(self) -> Result<CallResult, ApiClientError> {
        let Self {
            client,
            base_uri,
            journal,
            endpoint,
            method,
            path,
            headers,
            body,
            expectation,
        } = self;

        let url = Self::build_url(&base_uri, endpoint.base_path(), &path)?;
        let request_headers = headers.to_http_headers()?;
        let request = Self::build_request(
            method.clone(),
            url.clone(),
            &request_headers,
            body.as_ref(),
            endpoint.content_type(),
        )?;
        Self::log_request(&endpoint, &method, &url, &request_headers, body.as_ref());

        let expectation = expectation.unwrap_or_else(|| {
            ResponseExpectation::custom("default", ExpectedStatusCodes::default())
        });
        let mut report = CallReport {
            endpoint: endpoint.name().to_string(),
            method: method.to_string(),
            uri: url.to_string(),
            request_headers: endpoint
                .logs(LogDetail::Headers)
                .then(|| request_headers.clone()),
            request_body: body
                .as_ref()
                .filter(|_| endpoint.logs(LogDetail::Body))
                .map(|body| truncate(&body.as_text())),
            expectation: expectation.label().to_string(),
            status: None,
            response_body: None,
            failure: None,
        };

        let result = match Self::send(&client, request).await {
            Ok(result) => result,
            Err(error) => {
                report.failure = Some(error.to_string());
                journal.record(report).await;
                return Err(error);
            }
        };

        report.status = Some(result.status_code().as_u16());
        report.response_body = Some(result.body_excerpt()).filter(|body| !body.is_empty());
        let verified = expectation.verify(&result);
        if let Err(error) = &verified {
            report.failure = Some(error.to_string());
        }
        journal.record(report).await;

        verified.map(|()| result)
    }

    async fn send(client: &reqwest::Client, request: Request) -> Result<CallResult, ApiClientError> {
        debug!(?request, "sending...");
        let response = client.execute(request).await?;
        debug!(?response, "...receiving");

        CallResult::from_response(response).await
    }

    pub(super) fn build_url(
        base_uri: &Uri,
        base_path: &str,
        path: &CallPath,
    ) -> Result<Url, ApiClientError> {
        let resolved = PathResolved::try_from(path.clone())?;
        let suffix = resolved.path.trim_start_matches('/');

        let base_uri = base_uri.to_string();
        let mut url = format!("{}{base_path}", base_uri.trim_end_matches('/'));
        if !suffix.is_empty() {
            url.push('/');
            url.push_str(suffix);
        }

        Ok(url.parse::<Url>()?)
    }

    pub(super) fn build_request(
        method: Method,
        url: Url,
        headers: &[(String, String)],
        body: Option<&CallBody>,
        default_content_type: &ContentType,
    ) -> Result<Request, ApiClientError> {
        let mut request = Request::new(method, url);
        let req_headers = request.headers_mut();

        for (name, value) in headers {
            req_headers.insert(
                HeaderName::from_bytes(name.as_bytes())?,
                HeaderValue::from_str(value)?,
            );
        }

        if let Some(body) = body {
            let content_type = body
                .content_type
                .clone()
                .unwrap_or_else(|| default_content_type.clone());
            req_headers.typed_insert(content_type);
            let req_body = request.body_mut();
            *req_body = Some(Body::from(body.data.clone()));
        }

        Ok(request)
    }

    fn log_request(
        endpoint: &EndpointSpec,
        method: &Method,
        url: &Url,
        headers: &[(String, String)],
        body: Option<&CallBody>,
    ) {
        let name = endpoint.name();
        for detail in endpoint.log() {
            match detail {
                LogDetail::Uri => info!(endpoint = name, %method, %url, "request"),
                LogDetail::Headers => info!(endpoint = name, ?headers, "request headers"),
                LogDetail::Body => {
                    if let Some(body) = body {
                        info!(endpoint = name, body = %truncate(&body.as_text()), "request body");
                    }
                }
                LogDetail::Status => {}
            }
        }
    }
}

/// Implement IntoFuture for ApiCall to enable direct .await syntax
///
/// ```rust,no_run
/// # use reqspec_core::{ApiClient, EndpointSpec};
/// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
/// # let client = ApiClient::builder().build()?;
/// let unknown = EndpointSpec::new("/unknown");
/// let response = client.get(&unknown, "")?.await?;
/// # Ok(())
/// # }
/// ```
impl IntoFuture for ApiCall {
    type Output = Result<CallResult, ApiClientError>;
    type IntoFuture = Pin<Box<dyn Future<Output = Self::Output> + Send>>;

    fn into_future(self) -> Self::IntoFuture {
        Box::pin(self.exchange())
    }
}
