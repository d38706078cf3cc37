use jiff::Timestamp;
use serde::{Deserialize, Serialize};

/// A reqres user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserRecord {
    pub id: u32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub avatar: String,
}

/// `POST /users` and `PATCH /users/{id}` body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct UserCreationRequest {
    pub name: String,
    pub job: String,
}

impl UserCreationRequest {
    pub fn new(name: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job: job.into(),
        }
    }
}

/// `POST /users` response, the request echoed with server-assigned fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserCreationReceipt {
    pub name: String,
    pub job: String,
    pub id: Option<String>,
    pub created_at: Option<Timestamp>,
}

/// `PATCH /users/{id}` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserUpdateReceipt {
    pub name: Option<String>,
    pub job: Option<String>,
    pub updated_at: Option<Timestamp>,
}
