//! Item Model
//!
//! Items are referenced by ID from both production and sale line items.

use serde::{Deserialize, Serialize};

/// Item entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Item {
    pub id: i64,
    pub name: String,
    /// Item category (`type` on the wire)
    #[serde(rename = "type")]
    pub kind: String,
    pub created_at: Option<String>,
}

/// Create item payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemCreate {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
}
