use serde::{Deserialize, Serialize};

/// The `support` section attached to most reqres payloads.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SupportInfo {
    pub url: String,
    pub text: String,
}

/// A single resource lookup.
///
/// Both sections are absent on a 404, whose payload is `{}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SingleResource<T> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportInfo>,
}

impl<T> SingleResource<T> {
    /// The `{}` payload of a missing resource.
    pub fn missing() -> Self {
        Self {
            data: None,
            support: None,
        }
    }
}

/// One page of a listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct PaginatedCollection<T> {
    pub page: u32,
    pub per_page: u32,
    pub total: u32,
    pub total_pages: u32,
    pub data: Vec<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub support: Option<SupportInfo>,
}
