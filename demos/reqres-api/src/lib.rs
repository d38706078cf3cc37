#![allow(missing_docs)]
//! Contract tests of the reqres.in API.
//!
//! - [`models`]: the response and request payloads
//! - [`specs`]: the endpoint templates and response expectations
//! - [`stub`]: an axum server serving the same payloads, for hermetic runs

use std::net::SocketAddr;

use anyhow::Context;
use tower_http::trace::TraceLayer;
use tracing::info;

pub mod models;
pub mod specs;
pub mod stub;

mod state;
pub use self::state::AppState;

/// Launch the stub server
///
/// # Errors
///
/// fail if the socket cannot be created (e.g. port already used)
/// fail if the server cannot be launch
pub async fn run(addr: SocketAddr) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("opening {addr}"))?;
    info!("Using address {addr}");

    launch(listener).await.context("starting server")
}

/// Launch the stub server on a bound listener
///
/// # Errors
///
/// fail if the server cannot be launch
pub async fn launch(listener: tokio::net::TcpListener) -> std::io::Result<()> {
    let app = stub::stub_router()
        .layer(TraceLayer::new_for_http())
        .with_state(AppState::new());

    axum::serve(listener, app.into_make_service()).await
}
