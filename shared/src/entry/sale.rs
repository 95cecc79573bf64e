//! Sale entry types

use serde::{Deserialize, Serialize};

/// One sale line item.
///
/// `amount` defaults to `quantity × rate` (rounded to two decimals via the
/// amount field, see [`format_amount`]) but the user may override it before
/// the item is staged.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SaleLineItem {
    pub item_id: i64,
    pub item_name: String,
    pub quantity: f64,
    pub rate: f64,
    pub amount: f64,
    pub remarks: String,
}

/// Save-sale request body (`POST /api/save_sale`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SaleSave {
    /// Order number (`JOB…` series)
    pub order_no: String,
    /// Entry date, `YYYY-MM-DD`
    pub date: String,
    pub party_id: i64,
    pub items: Vec<SaleLineItem>,
}

/// Format the derived line amount (`quantity × rate`) for the amount input
/// field, always with two decimal places.
pub fn format_amount(quantity: f64, rate: f64) -> String {
    format!("{:.2}", quantity * rate)
}
