use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use bytes::Bytes;
use jiff::Timestamp;
use serde_json::{Map, Value};
use tracing::{debug, info};

use super::errors::StubError;
use super::fixtures::{self, PER_PAGE, UNDEFINED_USER_ERROR};
use crate::models::{
    ColorCollection, PaginatedCollection, RegistrationSuccess, SingleResource, UserEnvelope,
};
use crate::state::AppState;

type JsonObject = Map<String, Value>;

fn parse_object(body: &Bytes) -> Result<JsonObject, StubError> {
    let object = serde_json::from_slice(body)?;
    Ok(object)
}

fn parse_id(id: &str) -> Result<u32, StubError> {
    id.parse().map_err(|_| StubError::NotFound)
}

fn first_page<T: Clone>(items: &[T], state: &AppState) -> PaginatedCollection<T> {
    let total = items.len();
    let total_pages = total.div_ceil(PER_PAGE);
    PaginatedCollection {
        page: 1,
        per_page: u32::try_from(PER_PAGE).unwrap_or(u32::MAX),
        total: u32::try_from(total).unwrap_or(u32::MAX),
        total_pages: u32::try_from(total_pages).unwrap_or(u32::MAX),
        data: items.iter().take(PER_PAGE).cloned().collect(),
        support: Some(state.support()),
    }
}

pub(super) async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    Json(first_page(state.users(), &state))
}

pub(super) async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<UserEnvelope>, StubError> {
    let id = parse_id(&id)?;
    let user = state.user(id).ok_or(StubError::NotFound)?;
    debug!(id, "user found");

    Ok(Json(SingleResource {
        data: Some(user.clone()),
        support: Some(state.support()),
    }))
}

pub(super) async fn create_user(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<impl IntoResponse, StubError> {
    let mut receipt = parse_object(&body)?;
    let id = state.next_user_id();
    receipt.insert("id".to_string(), Value::String(id.to_string()));
    receipt.insert(
        "createdAt".to_string(),
        Value::String(Timestamp::now().to_string()),
    );
    info!(id, "user created");

    Ok((StatusCode::CREATED, Json(receipt)))
}

pub(super) async fn update_user(
    Path(id): Path<String>,
    body: Bytes,
) -> Result<Json<JsonObject>, StubError> {
    let mut receipt = parse_object(&body)?;
    receipt.insert(
        "updatedAt".to_string(),
        Value::String(Timestamp::now().to_string()),
    );
    info!(%id, "user updated");

    Ok(Json(receipt))
}

pub(super) async fn delete_user(Path(id): Path<String>) -> StatusCode {
    info!(%id, "user deleted");
    StatusCode::NO_CONTENT
}

pub(super) async fn list_colors(State(state): State<AppState>) -> Json<ColorCollection> {
    Json(first_page(state.colors(), &state))
}

pub(super) async fn get_color(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, StubError> {
    let id = parse_id(&id)?;
    let color = state.color(id).ok_or(StubError::NotFound)?;

    Ok(Json(SingleResource {
        data: Some(color.clone()),
        support: Some(state.support()),
    }))
}

pub(super) async fn register(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<RegistrationSuccess>, StubError> {
    let request = parse_object(&body)?;
    let text = |key: &str| {
        request
            .get(key)
            .and_then(Value::as_str)
            .filter(|value| !value.is_empty())
    };

    let Some(email) = text("email") else {
        return Err(StubError::RegistrationRefused {
            message: "Missing email or username".to_string(),
        });
    };
    if text("password").is_none() {
        return Err(StubError::RegistrationRefused {
            message: "Missing password".to_string(),
        });
    }

    let user = state
        .users()
        .iter()
        .find(|user| user.email == email)
        .ok_or_else(|| StubError::RegistrationRefused {
            message: UNDEFINED_USER_ERROR.to_string(),
        })?;
    info!(id = user.id, "user registered");

    Ok(Json(RegistrationSuccess {
        id: user.id,
        token: fixtures::token(user.id),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_page_should_hold_six_colors() {
        let state = AppState::new();

        let page = first_page(state.colors(), &state);

        assert_eq!(page.page, 1);
        assert_eq!(page.per_page, 6);
        assert_eq!(page.total, 12);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.data.len(), 6);
    }

    #[test]
    fn should_reject_malformed_body() {
        let result = parse_object(&Bytes::from_static(b"fff"));

        assert!(matches!(result, Err(StubError::MalformedBody(_))));
    }

    #[test]
    fn non_numeric_id_should_be_not_found() {
        assert!(matches!(parse_id("abc"), Err(StubError::NotFound)));
        assert!(matches!(parse_id("3"), Ok(3)));
    }

    #[tokio::test]
    async fn should_register_defined_user() {
        let body = Bytes::from_static(br#"{"email":"eve.holt@reqres.in","password":"pistol"}"#);

        let Json(success) = register(State(AppState::new()), body)
            .await
            .expect("defined user");

        assert_eq!(success.id, 4);
        assert_eq!(success.token, "QpwL5tke4Pnpja7X4");
    }

    #[tokio::test]
    async fn should_refuse_registration_without_password() {
        let body = Bytes::from_static(br#"{"email":"sydney@fife"}"#);

        let result = register(State(AppState::new()), body).await;

        let Err(StubError::RegistrationRefused { message }) = result else {
            panic!("expected a refused registration");
        };
        assert_eq!(message, "Missing password");
    }

    #[tokio::test]
    async fn should_refuse_undefined_user() {
        let body = Bytes::from_static(br#"{"email":"sydney@fife","password":"pistol"}"#);

        let result = register(State(AppState::new()), body).await;

        let Err(StubError::RegistrationRefused { message }) = result else {
            panic!("expected a refused registration");
        };
        assert_eq!(message, UNDEFINED_USER_ERROR);
    }
}
