//! Custom error types for Outlay
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for ledger operations
#[derive(Error, Debug)]
pub enum OutlayError {
    /// A required add field was empty, or the category was not one of the known set
    #[error("Please fill in the {0} before adding.")]
    MissingField(&'static str),

    /// The amount text did not parse as a real number
    #[error("Amount should be a number.")]
    InvalidAmount,

    /// An export or chart was requested with zero records
    #[error("No expenses to export.")]
    EmptyLedger,

    /// The export destination could not be written
    #[error("Export error: {0}")]
    Export(String),
}

impl OutlayError {
    /// Create a missing-field error for the item field
    pub fn missing_item() -> Self {
        Self::MissingField("item")
    }

    /// Create a missing-field error for the category field
    pub fn missing_category() -> Self {
        Self::MissingField("category")
    }

    /// Create a missing-field error for the amount field
    pub fn missing_amount() -> Self {
        Self::MissingField("amount")
    }

    /// Check if this is a missing-field error
    pub fn is_missing_field(&self) -> bool {
        matches!(self, Self::MissingField(_))
    }

    /// Check if this is the empty-ledger signal
    pub fn is_empty_ledger(&self) -> bool {
        matches!(self, Self::EmptyLedger)
    }
}

// Implement From traits for the error types export can hit

impl From<std::io::Error> for OutlayError {
    fn from(err: std::io::Error) -> Self {
        Self::Export(err.to_string())
    }
}

impl From<csv::Error> for OutlayError {
    fn from(err: csv::Error) -> Self {
        Self::Export(err.to_string())
    }
}

/// Result type alias for ledger operations
pub type OutlayResult<T> = Result<T, OutlayError>;
