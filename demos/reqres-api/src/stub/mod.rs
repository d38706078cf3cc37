//! An in-process stand-in for reqres.in, serving the same payloads for the
//! resources the contract tests touch.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::json;

use crate::state::AppState;

mod errors;
pub use self::errors::MALFORMED_BODY_PAGE;

pub mod fixtures;

mod handlers;

/// The stub router, every route under `/api`.
pub fn stub_router() -> Router<AppState> {
    let api = Router::new()
        .route("/health", get(health))
        .route("/users", get(handlers::list_users).post(handlers::create_user))
        .route(
            "/users/{id}",
            get(handlers::get_user)
                .put(handlers::update_user)
                .patch(handlers::update_user)
                .delete(handlers::delete_user),
        )
        .route("/unknown", get(handlers::list_colors))
        .route("/unknown/{id}", get(handlers::get_color))
        .route("/register", post(handlers::register));

    Router::new().nest("/api", api)
}

async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let uptime = state.uptime();

    Json(json!({
        "status": "OK",
        "uptime": uptime,
    }))
}
