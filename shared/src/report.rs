//! Report totals
//!
//! Aggregates over submitted entries, shown on the dashboard and report
//! screens.

use crate::entry::{ProductionLineItem, SaleSave};
use serde::{Deserialize, Serialize};

/// Production totals across all line items
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProductionTotals {
    pub total_length: f64,
    pub total_weight: f64,
    pub total_items: usize,
}

impl ProductionTotals {
    /// Accumulate totals over production line items
    pub fn from_items<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a ProductionLineItem>,
    {
        let mut totals = Self::default();
        for item in items {
            totals.total_length += item.length;
            totals.total_weight += item.weight;
            totals.total_items += 1;
        }
        totals
    }
}

/// Sale totals across all orders
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct SaleTotals {
    pub total_amount: f64,
    pub total_items: usize,
    pub total_orders: usize,
}

impl SaleTotals {
    /// Accumulate totals over sale orders
    pub fn from_orders(orders: &[SaleSave]) -> Self {
        let mut totals = Self {
            total_orders: orders.len(),
            ..Self::default()
        };
        for order in orders {
            for item in &order.items {
                totals.total_amount += item.amount;
                totals.total_items += 1;
            }
        }
        totals
    }
}
