use reqspec_core::ResponseExpectation;

/// `200 OK`, logging status and body.
pub fn successful_response() -> ResponseExpectation {
    ResponseExpectation::success()
}
