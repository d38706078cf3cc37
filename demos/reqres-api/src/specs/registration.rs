use reqspec_core::{EndpointSpec, ResponseExpectation};

/// The `/register` endpoint.
pub fn registration_endpoint() -> EndpointSpec {
    EndpointSpec::new("/register")
}

/// `400 Bad Request` for an email outside the defined users.
pub fn registration_not_allowed() -> ResponseExpectation {
    ResponseExpectation::bad_request()
}
