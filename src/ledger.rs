//! The expense ledger
//!
//! Owns the ordered record collection and the running total, and exposes
//! every operation the shell performs: add, clear, search, the two
//! aggregations, and the export snapshot. The ledger never references
//! the presentation layer.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{OutlayError, OutlayResult};
use crate::export;
use crate::models::{Amount, Category, ExpenseRecord};

/// In-memory expense ledger
///
/// Created empty at process start and discarded on exit; the export
/// snapshot is the only way records leave the process.
#[derive(Debug, Default)]
pub struct Ledger {
    records: Vec<ExpenseRecord>,
    running_total: Amount,
}

impl Ledger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// All records in insertion order
    pub fn records(&self) -> &[ExpenseRecord] {
        &self.records
    }

    /// Number of records
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the ledger has no records
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// The maintained sum of all record amounts
    pub fn running_total(&self) -> Amount {
        self.running_total
    }

    /// Validate raw field text and append a record dated today
    ///
    /// Checks run in a fixed order so error messages are deterministic:
    /// item, then category, then amount presence, then amount parse.
    /// Nothing is appended when any check fails.
    pub fn add(&mut self, item: &str, category: &str, amount: &str) -> OutlayResult<ExpenseRecord> {
        let item = item.trim();
        if item.is_empty() {
            return Err(OutlayError::missing_item());
        }
        let category: Category = category.parse()?;
        let amount = Amount::parse(amount)?;

        let record = ExpenseRecord::new(item, category, amount);
        self.insert(record.clone());
        Ok(record)
    }

    /// Append an already-built record, maintaining the running total
    ///
    /// The total accumulates in insertion order, the same order a
    /// recomputed sum folds in, so the two never drift apart.
    pub fn insert(&mut self, record: ExpenseRecord) {
        self.running_total += record.amount;
        self.records.push(record);
    }

    /// Drop every record and reset the total to exactly zero
    pub fn clear(&mut self) {
        self.records.clear();
        self.running_total = Amount::zero();
    }

    /// Case-insensitive substring filter over item, category, and date label
    ///
    /// A record matches if the query appears in any of the three fields.
    /// The empty query matches everything. Results keep insertion order;
    /// nothing is mutated.
    pub fn search(&self, query: &str) -> Vec<&ExpenseRecord> {
        let query = query.to_lowercase();
        self.records
            .iter()
            .filter(|r| {
                r.item.to_lowercase().contains(&query)
                    || r.category.name().to_lowercase().contains(&query)
                    || r.date_label().contains(&query)
            })
            .collect()
    }

    /// Sum of amounts per category
    ///
    /// Categories without records are absent from the result, not zero.
    pub fn aggregate_by_category(&self) -> HashMap<Category, Amount> {
        let mut totals: HashMap<Category, Amount> = HashMap::new();
        for record in &self.records {
            *totals.entry(record.category).or_insert_with(Amount::zero) += record.amount;
        }
        totals
    }

    /// Sum of amounts per day, keyed ascending by calendar date
    ///
    /// Keyed on the date itself rather than the day-month-year label;
    /// the label would sort lexicographically and put days before years.
    pub fn aggregate_by_date(&self) -> BTreeMap<NaiveDate, Amount> {
        let mut totals: BTreeMap<NaiveDate, Amount> = BTreeMap::new();
        for record in &self.records {
            *totals.entry(record.date).or_insert_with(Amount::zero) += record.amount;
        }
        totals
    }

    /// Serialize the current records as CSV bytes
    pub fn export_snapshot(&self) -> OutlayResult<Vec<u8>> {
        if self.is_empty() {
            return Err(OutlayError::EmptyLedger);
        }
        export::csv::write_snapshot(&self.records)
    }

    /// Write the snapshot to a file
    ///
    /// Read-only with respect to ledger state; a failed write leaves the
    /// records and total untouched.
    pub fn export_to_path(&self, path: &Path) -> OutlayResult<()> {
        if self.is_empty() {
            return Err(OutlayError::EmptyLedger);
        }
        export::csv::snapshot_to_path(&self.records, path)
    }
}
