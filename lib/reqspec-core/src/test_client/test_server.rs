use std::future::Future;
use std::net::TcpListener;
use std::time::Duration;

use crate::{ApiClient, ApiClientBuilder};

/// The answer of a [`TestServer`] health check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    /// Ready to serve.
    Healthy,
    /// Not ready yet, the check is retried.
    Unhealthy,
    /// No health endpoint, readiness is a successful TCP connection.
    Uncheckable,
}

/// A server launched in-process for a test run.
///
/// ```rust,no_run
/// use std::net::TcpListener;
/// use reqspec_core::test_client::{HealthStatus, TestServer};
/// use reqspec_core::ApiClient;
///
/// struct StubServer;
///
/// impl TestServer for StubServer {
///     type Error = std::io::Error;
///
///     async fn launch(&self, listener: TcpListener) -> Result<(), Self::Error> {
///         listener.set_nonblocking(true)?;
///         let _listener = tokio::net::TcpListener::from_std(listener)?;
///         // serve requests here
///         Ok(())
///     }
/// }
/// ```
pub trait TestServer {
    /// The error raised by the server.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Serves requests on an already bound listener.
    fn launch(&self, listener: TcpListener) -> impl Future<Output = Result<(), Self::Error>> + Send;

    /// Checks the server readiness, [`HealthStatus::Uncheckable`] by default.
    fn is_healthy(
        &self,
        _client: &mut ApiClient,
    ) -> impl Future<Output = Result<HealthStatus, Self::Error>> + Send {
        std::future::ready(Ok(HealthStatus::Uncheckable))
    }

    /// The client and readiness configuration.
    fn config(&self) -> TestServerConfig {
        TestServerConfig::default()
    }
}

/// Configuration of a [`TestClient`](super::TestClient).
#[derive(Debug, Clone)]
pub struct TestServerConfig {
    /// The client builder, the port is replaced with the listener one.
    pub api_client: Option<ApiClientBuilder>,
    /// Initial delay between health checks.
    pub min_backoff_delay: Duration,
    /// Maximum delay between health checks.
    pub max_backoff_delay: Duration,
    /// Whether to add jitter to the delays.
    pub backoff_jitter: bool,
    /// Maximum number of health checks.
    pub max_retry_attempts: usize,
}

impl Default for TestServerConfig {
    fn default() -> Self {
        Self {
            api_client: None,
            min_backoff_delay: Duration::from_millis(10),
            max_backoff_delay: Duration::from_secs(1),
            backoff_jitter: true,
            max_retry_attempts: 10,
        }
    }
}
