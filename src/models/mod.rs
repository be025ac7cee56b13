//! Core data models for Outlay
//!
//! This module contains the data structures that represent the expense
//! domain: amounts, the fixed category set, and expense records.

pub mod amount;
pub mod category;
pub mod record;

pub use amount::{Amount, CURRENCY_SYMBOL};
pub use category::Category;
pub use record::{ExpenseRecord, DATE_FORMAT};
