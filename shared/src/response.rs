//! API response envelope
//!
//! Every mutation endpoint answers with the same acknowledgement shape:
//! ```json
//! { "success": true, "message": "Production saved successfully", "id": 17 }
//! ```

use serde::{Deserialize, Serialize};

/// Acknowledgement returned by all mutation endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiAck {
    /// Whether the server accepted the request
    pub success: bool,
    /// Human-readable message, surfaced to the user verbatim
    pub message: String,
    /// Row ID of the created record (save endpoints only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

impl ApiAck {
    /// Create a successful acknowledgement
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            success: true,
            message: message.into(),
            id: None,
        }
    }

    /// Create a rejection acknowledgement
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            id: None,
        }
    }

    /// Attach the created row ID
    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }
}
