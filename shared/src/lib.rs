//! Shared types for the Millbook record-keeping client
//!
//! Wire contract and pure domain state used by the client crate:
//! data models, line-item staging, document number sequencing,
//! response envelope and validation errors.

pub mod document;
pub mod entry;
pub mod error;
pub mod models;
pub mod report;
pub mod response;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use document::{DocPrefix, next_number};
pub use entry::{ProductionLineItem, SaleLineItem, StagingBuffer};
pub use error::ValidationError;
pub use response::ApiAck;
