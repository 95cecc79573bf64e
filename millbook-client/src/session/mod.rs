//! Form sessions
//!
//! Each open entry form is a session that owns its staging buffer, its
//! selector state and the transient inputs for the next line item. All
//! mutations happen synchronously on the owning session; only submission
//! goes over the network.

pub mod production;
pub mod sale;

pub use production::{ProductionInputs, ProductionSession};
pub use sale::{SaleInputs, SaleSession};

/// Today's date in the wire format (`YYYY-MM-DD`), the default entry date
/// for a fresh form.
pub fn today() -> String {
    chrono::Local::now().format("%Y-%m-%d").to_string()
}
