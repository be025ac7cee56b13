//! Application state for the TUI
//!
//! The App struct holds all state needed for rendering and handling events.

use crate::ledger::Ledger;

use super::dialogs::expense::ExpenseFormState;
use super::dialogs::export::ExportFormState;
use super::widgets::TextInput;

/// How many ticks a transient status message stays visible.
/// Roughly five seconds at the default 250ms tick rate.
const STATUS_TICKS: u8 = 20;

/// Which view is currently active
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveView {
    #[default]
    Expenses,
    Categories,
    Trend,
}

/// Mode of input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Search,
}

/// Currently active dialog (if any)
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ActiveDialog {
    #[default]
    None,
    AddExpense,
    Confirm(String),
    Export,
    Help,
}

/// Main application state
pub struct App<'a> {
    /// The ledger holding this session's expenses
    pub ledger: &'a mut Ledger,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Currently active view
    pub active_view: ActiveView,

    /// Current input mode
    pub input_mode: InputMode,

    /// Currently active dialog
    pub active_dialog: ActiveDialog,

    /// Selected row in the expenses table, indexing the filtered rows
    pub selected_expense_index: usize,

    /// Live search query for the expenses view
    pub search_input: TextInput,

    /// Status message to display
    pub status_message: Option<String>,

    /// Ticks left before the status message expires
    pub status_ticks: u8,

    /// Add-expense form state
    pub expense_form: ExpenseFormState,

    /// Export dialog state
    pub export_form: ExportFormState,
}

impl<'a> App<'a> {
    /// Create a new App instance
    pub fn new(ledger: &'a mut Ledger) -> Self {
        Self {
            ledger,
            should_quit: false,
            active_view: ActiveView::default(),
            input_mode: InputMode::default(),
            active_dialog: ActiveDialog::default(),
            selected_expense_index: 0,
            search_input: TextInput::new().placeholder("type / to filter"),
            status_message: None,
            status_ticks: 0,
            expense_form: ExpenseFormState::new(),
            export_form: ExportFormState::default(),
        }
    }

    /// Request to quit the application
    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Set a transient status message
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_ticks = STATUS_TICKS;
    }

    /// Clear the status message
    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_ticks = 0;
    }

    /// Advance timers, expiring the status message when its ticks run out
    pub fn tick(&mut self) {
        if self.status_ticks > 0 {
            self.status_ticks -= 1;
            if self.status_ticks == 0 {
                self.status_message = None;
            }
        }
    }

    /// Switch to a different view
    pub fn switch_view(&mut self, view: ActiveView) {
        if self.active_view != view {
            self.active_view = view;
            self.selected_expense_index = 0;
        }
    }

    /// Open a dialog, resetting its form so stale input never carries over
    pub fn open_dialog(&mut self, dialog: ActiveDialog) {
        match &dialog {
            ActiveDialog::AddExpense => {
                self.expense_form = ExpenseFormState::new();
            }
            ActiveDialog::Export => {
                self.export_form = ExportFormState::prefilled();
            }
            _ => {}
        }
        self.active_dialog = dialog;
    }

    /// Close the current dialog
    pub fn close_dialog(&mut self) {
        self.active_dialog = ActiveDialog::None;
    }

    /// Check if a dialog is active
    pub fn has_dialog(&self) -> bool {
        !matches!(self.active_dialog, ActiveDialog::None)
    }

    /// How many rows the expenses table currently shows
    pub fn visible_expense_count(&self) -> usize {
        self.ledger.search(self.search_input.value()).len()
    }

    /// Move selection up in the expenses table
    pub fn move_up(&mut self) {
        if self.selected_expense_index > 0 {
            self.selected_expense_index -= 1;
        }
    }

    /// Move selection down in the expenses table
    pub fn move_down(&mut self) {
        let max = self.visible_expense_count();
        if self.selected_expense_index < max.saturating_sub(1) {
            self.selected_expense_index += 1;
        }
    }

    /// Jump to the first row
    pub fn select_first(&mut self) {
        self.selected_expense_index = 0;
    }

    /// Jump to the last row
    pub fn select_last(&mut self) {
        self.selected_expense_index = self.visible_expense_count().saturating_sub(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_sets_flag() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        assert!(!app.should_quit);
        app.quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_status_expires_after_ticks() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.set_status("saved");
        assert_eq!(app.status_message.as_deref(), Some("saved"));
        for _ in 0..STATUS_TICKS {
            app.tick();
        }
        assert!(app.status_message.is_none());
    }

    #[test]
    fn test_switch_view_resets_selection() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.selected_expense_index = 3;
        app.switch_view(ActiveView::Categories);
        assert_eq!(app.active_view, ActiveView::Categories);
        assert_eq!(app.selected_expense_index, 0);
    }

    #[test]
    fn test_open_dialog_resets_form() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.expense_form.item_input.insert('x');
        app.open_dialog(ActiveDialog::AddExpense);
        assert!(app.has_dialog());
        assert_eq!(app.expense_form.item_input.value(), "");
    }

    #[test]
    fn test_move_down_is_bounded_by_visible_rows() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        ledger.add("Bus", "Transport", "20").unwrap();
        let mut app = App::new(&mut ledger);
        app.move_down();
        app.move_down();
        app.move_down();
        assert_eq!(app.selected_expense_index, 1);
        app.move_up();
        app.move_up();
        assert_eq!(app.selected_expense_index, 0);
    }
}
