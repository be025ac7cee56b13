//! CSV snapshot export
//!
//! Serializes ledger records to the four-column `Date,Item,Category,Amount`
//! format, one row per record in insertion order. Amounts are written at
//! full precision; display rounding never reaches the file.

use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{OutlayError, OutlayResult};
use crate::models::ExpenseRecord;

/// One exported row
///
/// Field order matches the header order. The date travels as its
/// day-month-year label; the amount as the raw value, which the csv
/// writer prints in its shortest round-trip form.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SnapshotRow {
    pub date: String,
    pub item: String,
    pub category: String,
    pub amount: f64,
}

impl From<&ExpenseRecord> for SnapshotRow {
    fn from(record: &ExpenseRecord) -> Self {
        Self {
            date: record.date_label(),
            item: record.item.clone(),
            category: record.category.name().to_string(),
            amount: record.amount.value(),
        }
    }
}

fn write_records<W: Write>(
    records: &[ExpenseRecord],
    writer: &mut csv::Writer<W>,
) -> OutlayResult<()> {
    for record in records {
        writer.serialize(SnapshotRow::from(record))?;
    }
    Ok(())
}

/// Serialize records as CSV bytes
pub fn write_snapshot(records: &[ExpenseRecord]) -> OutlayResult<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    write_records(records, &mut writer)?;
    writer
        .into_inner()
        .map_err(|e| OutlayError::Export(e.to_string()))
}

/// Write the snapshot to a file
///
/// The file handle lives only for this call: flushed and closed on
/// success, dropped on any failure path.
pub fn snapshot_to_path(records: &[ExpenseRecord], path: &Path) -> OutlayResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    write_records(records, &mut writer)?;
    writer.flush()?;
    Ok(())
}
