use reqspec_core::{EndpointSpec, ResponseExpectation};

/// The `/users` endpoint.
pub fn users_endpoint() -> EndpointSpec {
    EndpointSpec::new("/users")
}

/// `204 No Content`
pub fn user_deleted() -> ResponseExpectation {
    ResponseExpectation::no_content()
}

/// `404 Not Found`
pub fn nonexistent_user() -> ResponseExpectation {
    ResponseExpectation::not_found()
}

/// `400 Bad Request` with the HTML error page of a malformed body.
pub fn bad_request_html() -> ResponseExpectation {
    ResponseExpectation::bad_request().with_content_type(mime::TEXT_HTML)
}

/// `201 Created`
pub fn user_created() -> ResponseExpectation {
    ResponseExpectation::created()
}
