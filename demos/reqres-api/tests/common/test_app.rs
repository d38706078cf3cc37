#![allow(
    clippy::missing_errors_doc,
    dead_code,
    missing_docs,
    clippy::expect_used
)]
use std::net::TcpListener;

use reqspec_core::test_client::{
    HealthStatus, TestClient, TestServer, TestServerConfig, quick_config,
};
use reqspec_core::{ApiClient, EndpointSpec, ResponseExpectation};
use tracing::{debug, info};

#[derive(Debug, Default)]
pub struct ReqresStub;

impl TestServer for ReqresStub {
    type Error = std::io::Error;

    async fn launch(&self, listener: TcpListener) -> Result<(), Self::Error> {
        listener.set_nonblocking(true)?;
        let listener = tokio::net::TcpListener::from_std(listener)?;
        info!(?listener, "launching reqres stub");
        reqres_api::launch(listener).await
    }

    async fn is_healthy(&self, client: &mut ApiClient) -> Result<HealthStatus, Self::Error> {
        let health = EndpointSpec::new("/health");
        let Ok(call) = client.get(&health, "") else {
            return Ok(HealthStatus::Unhealthy);
        };
        match call.expect(ResponseExpectation::success()).await {
            Ok(_) => Ok(HealthStatus::Healthy),
            Err(error) => {
                debug!(%error, "stub not ready");
                Ok(HealthStatus::Unhealthy)
            }
        }
    }

    fn config(&self) -> TestServerConfig {
        let client = ApiClient::builder()
            .with_base_path("/api")
            .expect("valid base path");
        TestServerConfig {
            api_client: Some(client),
            ..quick_config()
        }
    }
}

#[derive(Debug, derive_more::Deref, derive_more::DerefMut)]
pub struct TestApp {
    #[deref]
    #[deref_mut]
    client: TestClient<ReqresStub>,
}

impl TestApp {
    pub async fn start() -> anyhow::Result<Self> {
        let client = TestClient::start(ReqresStub).await?;
        Ok(Self { client })
    }
}
