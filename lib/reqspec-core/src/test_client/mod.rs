//! In-process servers for contract tests.
//!
//! [`TestClient`] binds a random local port, launches a [`TestServer`] on it,
//! waits for the server with an exponential backoff, and then derefs to an
//! [`ApiClient`] pointing at it. The server task is aborted on drop.
//!
//! ```rust,ignore
//! use reqspec_core::test_client::TestClient;
//!
//! let client = TestClient::start(ReqresStub::default()).await?;
//! let result = client.get(&users(), "/2")?.await?;
//! client.write_report("target/reqres-report.json").await?;
//! ```

use std::net::{Ipv4Addr, SocketAddr, TcpListener};
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use backon::{ExponentialBuilder, Retryable};
use tracing::{debug, error};

use crate::ApiClient;

mod error;
pub use self::error::*;

mod test_server;
pub use self::test_server::*;

/// An [`ApiClient`] bound to a server running in the background.
#[derive(Debug, derive_more::Deref, derive_more::DerefMut)]
pub struct TestClient<T> {
    local_addr: SocketAddr,
    #[deref]
    #[deref_mut]
    client: ApiClient,
    handle: Option<tokio::task::JoinHandle<()>>,
    #[allow(dead_code)]
    test_server: Arc<T>,
}

impl<T> TestClient<T>
where
    T: TestServer + Send + Sync + 'static,
{
    /// Launches the server and waits until it is healthy.
    ///
    /// # Errors
    ///
    /// Fails if no local port can be bound, the client cannot be built, or
    /// the server never becomes healthy.
    pub async fn start(test_server: T) -> Result<Self, TestAppError> {
        let addr = SocketAddr::from((Ipv4Addr::LOCALHOST, 0));
        let listener = TcpListener::bind(addr)?;
        let local_addr = listener.local_addr()?;

        let test_server = Arc::new(test_server);
        let handle = tokio::spawn({
            let server = Arc::clone(&test_server);
            async move {
                if let Err(error) = server.launch(listener).await {
                    error!(%error, "Server launch failed");
                }
            }
        });

        let TestServerConfig {
            api_client,
            min_backoff_delay,
            max_backoff_delay,
            backoff_jitter,
            max_retry_attempts,
        } = test_server.config();

        let client = api_client.unwrap_or_else(ApiClient::builder);
        let client = client.with_port(local_addr.port()).build()?;

        let mut backoff = ExponentialBuilder::default()
            .with_min_delay(min_backoff_delay)
            .with_max_delay(max_backoff_delay)
            .with_max_times(max_retry_attempts);
        if backoff_jitter {
            backoff = backoff.with_jitter();
        }

        let healthy = Self::wait_for_health(&test_server, &client, local_addr, backoff).await;
        if !healthy {
            handle.abort();
            return Err(TestAppError::UnhealthyServer {
                timeout: max_backoff_delay,
            });
        }

        Ok(Self {
            local_addr,
            client,
            handle: Some(handle),
            test_server,
        })
    }

    async fn wait_for_health(
        test_server: &Arc<T>,
        client: &ApiClient,
        local_addr: SocketAddr,
        backoff: ExponentialBuilder,
    ) -> bool {
        let health_check = || {
            let mut client = client.clone();
            let server = Arc::clone(test_server);
            async move {
                match server.is_healthy(&mut client).await {
                    Ok(HealthStatus::Healthy) => {
                        debug!("server healthy");
                        Ok(true)
                    }
                    Ok(HealthStatus::Unhealthy) => {
                        debug!("server not yet healthy, retrying");
                        Err(std::io::Error::new(
                            std::io::ErrorKind::ConnectionRefused,
                            "Server not healthy yet",
                        ))
                    }
                    Ok(HealthStatus::Uncheckable) => {
                        tokio::net::TcpStream::connect(local_addr)
                            .await
                            .map(|_| true)
                    }
                    Err(error) => {
                        error!(%error, "Health check error");
                        Ok(false)
                    }
                }
            }
        };

        health_check.retry(backoff).await.unwrap_or(false)
    }

    /// The address the server listens on.
    pub fn local_addr(&self) -> SocketAddr {
        self.local_addr
    }

    /// Writes the step report, creating parent directories as needed.
    ///
    /// # Errors
    ///
    /// Fails if the directories or the report cannot be written.
    pub async fn write_report(&self, path: impl AsRef<Path>) -> Result<(), TestAppError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        self.client.write_report(path).await?;
        Ok(())
    }
}

impl<T> Drop for TestClient<T> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.abort();
        }
    }
}

/// Shorthand for a fast health check configuration, handy in tests.
pub fn quick_config() -> TestServerConfig {
    TestServerConfig {
        min_backoff_delay: Duration::from_millis(5),
        max_backoff_delay: Duration::from_millis(100),
        backoff_jitter: false,
        max_retry_attempts: 5,
        ..TestServerConfig::default()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, Ordering};

    use axum::Router;
    use axum::routing::get;
    use tokio::net::TcpListener as TokioTcpListener;

    use super::*;
    use crate::{EndpointSpec, ResponseExpectation};

    #[derive(Debug)]
    struct MockTestServer {
        healthy: AtomicBool,
        config: TestServerConfig,
    }

    impl MockTestServer {
        fn new(healthy: bool) -> Self {
            Self {
                healthy: AtomicBool::new(healthy),
                config: quick_config(),
            }
        }
    }

    impl TestServer for MockTestServer {
        type Error = std::io::Error;

        async fn launch(&self, listener: TcpListener) -> Result<(), Self::Error> {
            listener.set_nonblocking(true)?;
            let listener = TokioTcpListener::from_std(listener)?;
            let router = Router::new().route("/ping", get(|| async { "pong" }));
            axum::serve(listener, router).await
        }

        async fn is_healthy(&self, _client: &mut ApiClient) -> Result<HealthStatus, Self::Error> {
            Ok(if self.healthy.load(Ordering::Relaxed) {
                HealthStatus::Healthy
            } else {
                HealthStatus::Unhealthy
            })
        }

        fn config(&self) -> TestServerConfig {
            self.config.clone()
        }
    }

    #[tokio::test]
    async fn test_test_client_start_success() {
        let test_client = TestClient::start(MockTestServer::new(true))
            .await
            .expect("client should start");

        assert!(test_client.handle.is_some());
        assert_eq!(test_client.local_addr().ip(), Ipv4Addr::LOCALHOST);
        assert_ne!(test_client.local_addr().port(), 0);
    }

    #[tokio::test]
    async fn test_test_client_start_unhealthy_server() {
        let result = TestClient::start(MockTestServer::new(false)).await;

        let Err(TestAppError::UnhealthyServer { timeout }) = result else {
            panic!("expected an unhealthy server");
        };
        assert_eq!(timeout, Duration::from_millis(100));
    }

    #[tokio::test]
    async fn test_test_client_derefs_to_api_client() {
        let test_client = TestClient::start(MockTestServer::new(true))
            .await
            .expect("client should start");
        let ping = EndpointSpec::new("/ping");

        let result = test_client
            .get(&ping, "")
            .expect("call")
            .expect(ResponseExpectation::success())
            .await
            .expect("pong");

        assert_eq!(result.as_text().expect("text"), "pong");
        assert_eq!(test_client.collected_reports().await.len(), 1);
    }

    #[tokio::test]
    async fn test_test_client_write_report() {
        let test_client = TestClient::start(MockTestServer::new(true))
            .await
            .expect("client should start");
        let ping = EndpointSpec::new("/ping");
        test_client.get(&ping, "").expect("call").await.expect("pong");

        let path = std::env::temp_dir()
            .join(format!("reqspec-{}", test_client.local_addr().port()))
            .join("report.json");
        test_client.write_report(&path).await.expect("report written");

        let content = std::fs::read_to_string(&path).expect("file should exist");
        let json: serde_json::Value = serde_json::from_str(&content).expect("valid JSON");
        assert_eq!(json.as_array().map(Vec::len), Some(1));

        let _ = std::fs::remove_file(&path);
    }
}
