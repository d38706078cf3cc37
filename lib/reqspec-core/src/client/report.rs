//! Step reports: one [`CallReport`] per exchange, kept in a journal shared by
//! a client and its clones.

use std::future::IntoFuture;
use std::path::Path;
use std::sync::Arc;

use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{Instrument, info, info_span};

use super::ApiClientError;

/// The record of one request/response exchange.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallReport {
    /// The endpoint name.
    pub endpoint: String,
    /// The HTTP method.
    pub method: String,
    /// The request URI.
    pub uri: String,
    /// The request headers, when the endpoint logs them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Vec<(String, String)>>,
    /// The request body, when the endpoint logs it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_body: Option<String>,
    /// The expectation label.
    pub expectation: String,
    /// The response status, absent if the exchange failed before a response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    /// The response body excerpt.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_body: Option<String>,
    /// The failure, if the call did not pass its expectation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure: Option<String>,
}

impl CallReport {
    /// Whether the exchange passed its expectation.
    pub fn passed(&self) -> bool {
        self.failure.is_none()
    }
}

#[derive(Debug, Clone, Default)]
pub(in crate::client) struct Journal {
    reports: Arc<RwLock<Vec<CallReport>>>,
}

impl Journal {
    pub(in crate::client) async fn record(&self, report: CallReport) {
        info!(
            endpoint = %report.endpoint,
            method = %report.method,
            uri = %report.uri,
            status = ?report.status,
            passed = report.passed(),
            "call reported"
        );
        self.reports.write().await.push(report);
    }

    pub(in crate::client) async fn reports(&self) -> Vec<CallReport> {
        self.reports.read().await.clone()
    }
}

/// The format of a written report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Pretty-printed JSON.
    #[default]
    Json,
    /// YAML.
    #[cfg(feature = "yaml")]
    Yaml,
}

impl ReportFormat {
    /// Picks the format from a file extension, JSON unless `.yaml` or `.yml`
    /// (with the `yaml` feature).
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            #[cfg(feature = "yaml")]
            Some("yaml" | "yml") => Self::Yaml,
            _ => Self::Json,
        }
    }

    pub(in crate::client) fn render(self, reports: &[CallReport]) -> Result<String, ApiClientError> {
        match self {
            Self::Json => Ok(serde_json::to_string_pretty(reports)?),
            #[cfg(feature = "yaml")]
            Self::Yaml => {
                use crate::ToYaml;
                reports
                    .to_yaml()
                    .map_err(|error| ApiClientError::ReportSerialization {
                        error: error.to_string(),
                    })
            }
        }
    }
}

pub(in crate::client) async fn write_reports(
    path: &Path,
    reports: &[CallReport],
) -> Result<(), ApiClientError> {
    let content = ReportFormat::from_path(path).render(reports)?;
    tokio::fs::write(path, content).await?;
    info!(path = %path.display(), count = reports.len(), "report written");
    Ok(())
}

/// Runs a named test step inside its own tracing span.
///
/// Anything awaitable is a step: an async block, or directly an [`ApiCall`](crate::ApiCall).
///
/// ```rust
/// use reqspec_core::step;
///
/// # async fn example() {
/// let answer = step("Check Response", async { 42 }).await;
/// assert_eq!(answer, 42);
/// # }
/// ```
pub async fn step<F>(name: &str, work: F) -> F::Output
where
    F: IntoFuture,
{
    let span = info_span!("step", name);
    async move {
        info!("step started");
        let output = work.await;
        info!("step finished");
        output
    }
    .instrument(span)
    .await
}
