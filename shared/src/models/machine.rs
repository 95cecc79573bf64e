//! Machine Model

use serde::{Deserialize, Serialize};

/// Machine entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machine {
    pub id: i64,
    pub name: String,
    pub remarks: String,
    pub created_at: Option<String>,
}

/// Create machine payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MachineCreate {
    pub name: String,
    pub remarks: String,
}
