//! TUI Views module
//!
//! Contains the main views: expenses, categories, trend, plus the
//! status bar.

pub mod categories;
pub mod expenses;
pub mod status_bar;
pub mod trend;

use ratatui::Frame;

use super::app::{ActiveDialog, ActiveView, App};
use super::dialogs;
use super::layout::AppLayout;

/// Render the entire application
pub fn render(frame: &mut Frame, app: &App) {
    let layout = AppLayout::new(frame.area());

    // Render main view based on active view
    match app.active_view {
        ActiveView::Expenses => {
            expenses::render(frame, app, layout.main);
        }
        ActiveView::Categories => {
            categories::render(frame, app, layout.main);
        }
        ActiveView::Trend => {
            trend::render(frame, app, layout.main);
        }
    }

    // Render status bar
    status_bar::render(frame, app, layout.status_bar);

    // Render dialog if active
    if app.has_dialog() {
        render_dialog(frame, app);
    }
}

/// Render active dialog
fn render_dialog(frame: &mut Frame, app: &App) {
    match &app.active_dialog {
        ActiveDialog::Help => {
            dialogs::help::render(frame, app);
        }
        ActiveDialog::Confirm(message) => {
            dialogs::confirm::render(frame, message);
        }
        ActiveDialog::AddExpense => {
            dialogs::expense::render(frame, app);
        }
        ActiveDialog::Export => {
            dialogs::export::render(frame, app);
        }
        ActiveDialog::None => {}
    }
}
