//! The reqres contract, shared by the stub and live suites.
#![allow(dead_code, missing_docs)]

use assert2::{assert, let_assert};
use reqspec_core::{ApiClient, CallPath, step};

use reqres_api::models::{
    ColorCollection, RegistrationError, RegistrationRequest, UserCreationReceipt,
    UserCreationRequest, UserEnvelope,
};
use reqres_api::specs::{
    bad_request_html, nonexistent_user, registration_endpoint, registration_not_allowed,
    successful_response, unknown_endpoint, user_created, user_deleted, users_endpoint,
};

pub const UNDEFINED_USER_ERROR: &str = "Note: Only defined users succeed registration";

fn user_path(id: u32) -> CallPath {
    CallPath::from("/{id}").add_param("id", id)
}

pub async fn fetch_existing_user(client: &ApiClient) -> anyhow::Result<()> {
    let call = client
        .get(&users_endpoint(), user_path(3))?
        .expect(successful_response());
    let envelope: UserEnvelope = step("Make Request", call).await?.as_json()?;

    step("Check Response", async move {
        let_assert!(Some(user) = envelope.data);
        assert!(user.id == 3);
        assert!(user.email == "emma.wong@reqres.in");
        assert!(user.first_name == "Emma");
        assert!(user.last_name == "Wong");
        assert!(envelope.support.is_some());
    })
    .await;
    Ok(())
}

pub async fn fetch_nonexistent_user(client: &ApiClient) -> anyhow::Result<()> {
    let call = client
        .get(&users_endpoint(), user_path(25))?
        .expect(nonexistent_user());
    let envelope: UserEnvelope = step("Make Request", call).await?.as_json()?;

    step("Check Response", async move {
        assert!(envelope.data.is_none());
        assert!(envelope.support.is_none());
    })
    .await;
    Ok(())
}

pub async fn list_colors(client: &ApiClient) -> anyhow::Result<()> {
    let call = client
        .get(&unknown_endpoint(), "")?
        .expect(successful_response());
    let colors: ColorCollection = step("Make Request", call).await?.as_json()?;

    step("Check Response", async move {
        assert!(colors.data.len() == 6);
        let_assert!(Some(entry) = colors.data.get(5));
        assert!(entry.name == "blue turquoise");
        assert!(entry.year == 2005);
    })
    .await;
    Ok(())
}

pub async fn register_undefined_user(client: &ApiClient) -> anyhow::Result<()> {
    let request = RegistrationRequest::new("test.test@reqres.in", "testpswd");
    let call = client
        .post(&registration_endpoint(), "")?
        .json(&request)?
        .expect(registration_not_allowed());
    let error: RegistrationError = step("Make Request", call).await?.as_json()?;

    step("Check Response", async move {
        assert!(error.error == UNDEFINED_USER_ERROR);
    })
    .await;
    Ok(())
}

pub async fn create_user(client: &ApiClient) -> anyhow::Result<()> {
    let request = UserCreationRequest::new("morpheus", "leader");
    let call = client
        .post(&users_endpoint(), "")?
        .json(&request)?
        .expect(user_created());
    let receipt: UserCreationReceipt = step("Make Request", call).await?.as_json()?;

    step("Check Response", async move {
        assert!(receipt.name == "morpheus");
        assert!(receipt.job == "leader");
        assert!(receipt.id.is_some());
        assert!(receipt.created_at.is_some());
    })
    .await;
    Ok(())
}

pub async fn patch_with_malformed_body(client: &ApiClient) -> anyhow::Result<()> {
    let call = client
        .patch(&users_endpoint(), user_path(2))?
        .plain("fff")
        .expect(bad_request_html());
    let result = step("Make Request", call).await?;

    step("Check Response", async move {
        let_assert!(Ok(page) = result.as_text());
        assert!(page.contains("<title>Error</title>"));
    })
    .await;
    Ok(())
}

pub async fn delete_user(client: &ApiClient) -> anyhow::Result<()> {
    let call = client
        .delete(&users_endpoint(), user_path(2))?
        .expect(user_deleted());
    let result = step("Make Request", call).await?;

    step("Check Response", async move {
        assert!(result.status_code().as_u16() == 204);
        assert!(result.as_empty().is_ok());
    })
    .await;
    Ok(())
}
