//! Party Model
//!
//! Parties are the customers sale orders are billed to.

use serde::{Deserialize, Serialize};

/// Party entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Party {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub created_at: Option<String>,
}

/// Create party payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartyCreate {
    pub name: String,
    pub mobile: String,
    pub address: String,
}
