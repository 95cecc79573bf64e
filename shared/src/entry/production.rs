//! Production entry types

use serde::{Deserialize, Serialize};

/// One production line item: an item produced on a machine during the run.
///
/// Display names are snapshotted at staging time so the batch is
/// self-contained on the wire.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductionLineItem {
    pub item_id: i64,
    pub item_name: String,
    pub machine_id: i64,
    pub machine_name: String,
    /// Produced length, metres
    pub length: f64,
    /// Produced weight, kilograms
    pub weight: f64,
    pub remarks: String,
}

/// Save-production request body (`POST /api/save_production`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductionSave {
    /// Document number (`DP…` series)
    pub number: String,
    /// Entry date, `YYYY-MM-DD`
    pub date: String,
    pub shift: String,
    pub operator_id: i64,
    pub items: Vec<ProductionLineItem>,
}
