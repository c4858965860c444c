//! Fine record model

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::item::ItemId;

/// Fixed fine charged per whole day overdue
pub const FINE_RATE_PER_DAY: f64 = 10.0;

/// Amount charged for `days_overdue` whole days past the due date
pub fn fine_amount(days_overdue: u32) -> f64 {
    f64::from(days_overdue) * FINE_RATE_PER_DAY
}

/// Fine produced when an overdue item is returned
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FineRecord {
    pub item_id: ItemId,
    pub borrower: String,
    pub days_overdue: u32,
    pub amount: f64,
    pub at: DateTime<Utc>,
}

impl FineRecord {
    pub fn new(item_id: ItemId, borrower: String, days_overdue: u32, at: DateTime<Utc>) -> Self {
        Self {
            item_id,
            borrower,
            days_overdue,
            amount: fine_amount(days_overdue),
            at,
        }
    }
}

impl fmt::Display for FineRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "FineRecord[itemId={}, borrower='{}', daysOverdue={}, amount={:.1}, at={}]",
            self.item_id,
            self.borrower,
            self.days_overdue,
            self.amount,
            self.at.format("%Y-%m-%d %H:%M")
        )
    }
}
