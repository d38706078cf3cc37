use std::time::Duration;

use crate::ApiClientError;

/// Errors raised while starting a [`TestClient`](super::TestClient) or
/// writing its report.
#[derive(Debug, derive_more::Error, derive_more::Display, derive_more::From)]
pub enum TestAppError {
    /// Binding the local listener failed.
    #[display("I/O error: {_0}")]
    IoError(std::io::Error),

    /// The client could not be built, or the report not written.
    #[display("API client error: {_0}")]
    ClientError(ApiClientError),

    /// The server never reported itself healthy.
    #[from(ignore)]
    #[display("Server failed to become healthy within {timeout:?}")]
    UnhealthyServer {
        /// The maximum backoff delay used.
        timeout: Duration,
    },
}
