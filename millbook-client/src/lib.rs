//! Millbook Client - HTTP client for the record-keeping backend
//!
//! Provides the JSON API calls (entries, master data, users) and the
//! form-session controllers that stage line items before submission.

pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::{ProductionSession, SaleSession};

// Re-export shared types for convenience
pub use shared::{ApiAck, ValidationError};
