//! Outlay - Terminal-based expense tracker
//!
//! This library provides the core functionality for the Outlay expense
//! tracker. A [`Ledger`] holds one session's expense records in memory;
//! the [`tui`] module drives it from a full-screen terminal interface.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `error`: Custom error types
//! - `models`: Core data models (amounts, categories, records)
//! - `ledger`: The in-memory expense ledger and its queries
//! - `export`: CSV snapshot export
//! - `tui`: The terminal interface
//!
//! # Example
//!
//! ```rust
//! use outlay::Ledger;
//!
//! let mut ledger = Ledger::new();
//! ledger.add("Tea", "Food", "12.50")?;
//! assert_eq!(ledger.len(), 1);
//! # Ok::<(), outlay::OutlayError>(())
//! ```

pub mod error;
pub mod export;
pub mod ledger;
pub mod models;
pub mod tui;

pub use error::{OutlayError, OutlayResult};
pub use ledger::Ledger;
