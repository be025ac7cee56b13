//! Expense record model
//!
//! A record is immutable once created; there is no edit or delete, only
//! the ledger-wide clear.

use chrono::{Local, NaiveDate};

use super::{Amount, Category};

/// The day-month-year format used for every date label
pub const DATE_FORMAT: &str = "%d-%m-%Y";

/// One recorded expense
#[derive(Debug, Clone, PartialEq)]
pub struct ExpenseRecord {
    /// Calendar date stamped at insertion
    pub date: NaiveDate,

    /// What the money went to
    pub item: String,

    /// One of the fixed categories
    pub category: Category,

    /// Signed amount at full precision
    pub amount: Amount,
}

impl ExpenseRecord {
    /// Create a record dated today from the system clock
    pub fn new(item: impl Into<String>, category: Category, amount: Amount) -> Self {
        Self::dated(Local::now().date_naive(), item, category, amount)
    }

    /// Create a record with an explicit date
    pub fn dated(
        date: NaiveDate,
        item: impl Into<String>,
        category: Category,
        amount: Amount,
    ) -> Self {
        Self {
            date,
            item: item.into(),
            category,
            amount,
        }
    }

    /// The day-month-year label shown and exported for this record
    pub fn date_label(&self) -> String {
        self.date.format(DATE_FORMAT).to_string()
    }
}
