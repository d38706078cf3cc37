use serde::{Deserialize, Serialize};

/// One element of the `/unknown` listing, a Pantone color of the year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ColorEntry {
    pub id: u32,
    pub name: String,
    pub year: u16,
    pub color: String,
    pub pantone_value: String,
}
