use http::{Method, Uri};

use super::report::Journal;
use super::{CallBody, CallHeaders, CallPath, EndpointSpec, ResponseExpectation};

mod builder;
mod execution;

/// One HTTP exchange derived from an [`EndpointSpec`], ready to be awaited.
///
/// # Method Groups
///
/// ## Request Body Methods
/// - [`json(data)`](Self::json) - Set JSON request body
/// - [`plain(data)`](Self::plain) - Send data as-is with the endpoint content type
/// - [`text(content)`](Self::text) - Set plain text request body
/// - [`raw(bytes, content_type)`](Self::raw) - Set raw request body
///
/// ## Header Methods
/// - [`with_header(name, value)`](Self::with_header) - Add single header
/// - [`with_headers(headers)`](Self::with_headers) - Add several headers
///
/// ## Expectation
/// - [`expect(expectation)`](Self::expect) - Gate the response with a [`ResponseExpectation`]
///
/// ## Execution
/// - `.await` - Send the request, check the expectation and return the [`CallResult`](crate::CallResult)
///
/// Without an expectation, any status in `200..500` is accepted.
#[derive(derive_more::Debug)]
pub struct ApiCall {
    pub(super) client: reqwest::Client,
    pub(super) base_uri: Uri,
    #[debug(skip)]
    pub(super) journal: Journal,

    pub(super) endpoint: EndpointSpec,
    pub(super) method: Method,
    pub(super) path: CallPath,
    pub(super) headers: CallHeaders,

    #[debug(ignore)]
    pub(super) body: Option<CallBody>,

    pub(super) expectation: Option<ResponseExpectation>,
}
