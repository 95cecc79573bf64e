//! Operator Model

use serde::{Deserialize, Serialize};

/// Operator entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Operator {
    pub id: i64,
    pub name: String,
    pub mobile: String,
    pub address: String,
    pub created_at: Option<String>,
}

/// Create operator payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OperatorCreate {
    pub name: String,
    pub mobile: String,
    pub address: String,
}
