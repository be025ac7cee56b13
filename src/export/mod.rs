//! Export module for Outlay
//!
//! The ledger's only persisted artifact: a CSV snapshot of the current
//! records, produced on explicit request and never written implicitly.

pub mod csv;

pub use csv::{snapshot_to_path, write_snapshot};
