//! Terminal User Interface module
//!
//! This module provides the full-screen interface for Outlay using
//! ratatui. It holds the expense table, the aggregate views, and the
//! dialogs for data entry and export.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Dialogs
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
