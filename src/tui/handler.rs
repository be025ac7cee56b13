//! Event handler for the TUI
//!
//! Routes keyboard events to the appropriate handlers based on the
//! current application state. Dialogs capture keys first, then the
//! search field, then the active view.

use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{ActiveDialog, ActiveView, App, InputMode};
use super::dialogs;
use super::event::Event;

/// Prompt shown before wiping the ledger
const CLEAR_PROMPT: &str = "Are you sure you want to clear all records?";

/// Handle an incoming event
pub fn handle_event(app: &mut App, event: Event) -> Result<()> {
    match event {
        Event::Key(key) => handle_key_event(app, key),
        Event::Tick => {
            app.tick();
            Ok(())
        }
        Event::Resize(_, _) => Ok(()),
    }
}

/// Handle a key event
fn handle_key_event(app: &mut App, key: KeyEvent) -> Result<()> {
    // Check if we're in a dialog first
    if app.has_dialog() {
        return handle_dialog_key(app, key);
    }

    // Check input mode
    match app.input_mode {
        InputMode::Normal => handle_normal_key(app, key),
        InputMode::Search => handle_search_key(app, key),
    }
}

/// Handle keys while a dialog is open
fn handle_dialog_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match &app.active_dialog {
        ActiveDialog::Help => {
            // Any key closes the help overlay.
            app.close_dialog();
        }

        ActiveDialog::Confirm(_) => match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.close_dialog();
                app.ledger.clear();
                app.selected_expense_index = 0;
                app.set_status("All records cleared");
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.close_dialog();
            }
            _ => {}
        },

        ActiveDialog::AddExpense => {
            dialogs::expense::handle_key(app, key);
        }

        ActiveDialog::Export => {
            dialogs::export::handle_key(app, key);
        }

        ActiveDialog::None => {}
    }
    Ok(())
}

/// Handle keys in normal mode
fn handle_normal_key(app: &mut App, key: KeyEvent) -> Result<()> {
    // Global keys (work everywhere)
    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.quit();
            return Ok(());
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.quit();
            return Ok(());
        }

        // Help
        KeyCode::Char('?') => {
            app.open_dialog(ActiveDialog::Help);
            return Ok(());
        }

        // View switching
        KeyCode::Char('1') => {
            app.switch_view(ActiveView::Expenses);
            return Ok(());
        }
        KeyCode::Char('2') => {
            app.switch_view(ActiveView::Categories);
            return Ok(());
        }
        KeyCode::Char('3') => {
            app.switch_view(ActiveView::Trend);
            return Ok(());
        }

        // Add expense
        KeyCode::Char('a') => {
            app.open_dialog(ActiveDialog::AddExpense);
            return Ok(());
        }

        // Clear all records, behind a confirmation
        KeyCode::Char('c') => {
            app.open_dialog(ActiveDialog::Confirm(CLEAR_PROMPT.to_string()));
            return Ok(());
        }

        // Export to CSV
        KeyCode::Char('e') => {
            if app.ledger.is_empty() {
                app.set_status("No expenses to export.");
            } else {
                app.open_dialog(ActiveDialog::Export);
            }
            return Ok(());
        }

        // Search, always lands in the expenses view
        KeyCode::Char('/') => {
            app.switch_view(ActiveView::Expenses);
            app.input_mode = InputMode::Search;
            app.search_input.set_focused(true);
            return Ok(());
        }

        // Drop a kept filter
        KeyCode::Esc => {
            if !app.search_input.is_empty() {
                app.search_input.clear();
                app.selected_expense_index = 0;
            }
            return Ok(());
        }

        _ => {}
    }

    handle_view_key(app, key)
}

/// Handle navigation keys for the active view
fn handle_view_key(app: &mut App, key: KeyEvent) -> Result<()> {
    if app.active_view != ActiveView::Expenses {
        return Ok(());
    }

    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('g') => app.select_first(),
        KeyCode::Char('G') => app.select_last(),
        _ => {}
    }
    Ok(())
}

/// Handle keys while the search field is being edited
fn handle_search_key(app: &mut App, key: KeyEvent) -> Result<()> {
    match key.code {
        KeyCode::Esc => {
            app.search_input.clear();
            app.search_input.set_focused(false);
            app.input_mode = InputMode::Normal;
            app.selected_expense_index = 0;
        }
        KeyCode::Enter => {
            // Keep the filter, hand keys back to the view.
            app.search_input.set_focused(false);
            app.input_mode = InputMode::Normal;
        }
        KeyCode::Char(c) => {
            app.search_input.insert(c);
            app.selected_expense_index = 0;
        }
        KeyCode::Backspace => {
            app.search_input.backspace();
            app.selected_expense_index = 0;
        }
        KeyCode::Delete => app.search_input.delete(),
        KeyCode::Left => app.search_input.move_left(),
        KeyCode::Right => app.search_input.move_right(),
        KeyCode::Home => app.search_input.move_start(),
        KeyCode::End => app.search_input.move_end(),
        _ => {}
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_event(app, Event::Key(key(code))).unwrap();
    }

    fn type_str(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_q_quits() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_number_keys_switch_views() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.active_view, ActiveView::Categories);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.active_view, ActiveView::Trend);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.active_view, ActiveView::Expenses);
    }

    #[test]
    fn test_slash_enters_search_and_enter_keeps_filter() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        ledger.add("Bus", "Transport", "20").unwrap();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::Search);

        type_str(&mut app, "tea");
        assert_eq!(app.visible_expense_count(), 1);

        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search_input.value(), "tea");
    }

    #[test]
    fn test_escape_in_search_clears_filter() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "xyz");
        assert_eq!(app.visible_expense_count(), 0);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.search_input.value(), "");
        assert_eq!(app.visible_expense_count(), 1);
    }

    #[test]
    fn test_escape_in_normal_mode_drops_kept_filter() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        ledger.add("Bus", "Transport", "20").unwrap();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('/'));
        type_str(&mut app, "tea");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.visible_expense_count(), 1);

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.search_input.value(), "");
        assert_eq!(app.visible_expense_count(), 2);
    }

    #[test]
    fn test_search_key_slash_lands_in_expenses_view() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('3'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.active_view, ActiveView::Expenses);
        assert_eq!(app.input_mode, InputMode::Search);
    }

    #[test]
    fn test_export_on_empty_ledger_only_sets_status() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('e'));
        assert!(!app.has_dialog());
        assert_eq!(
            app.status_message.as_deref(),
            Some("No expenses to export.")
        );
    }

    #[test]
    fn test_export_opens_dialog_when_records_exist() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.active_dialog, ActiveDialog::Export);
        assert!(app
            .export_form
            .path_input
            .value()
            .ends_with("expenses.csv"));
    }

    #[test]
    fn test_clear_asks_for_confirmation_first() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('c'));
        assert_eq!(
            app.active_dialog,
            ActiveDialog::Confirm(CLEAR_PROMPT.to_string())
        );
        assert_eq!(app.ledger.len(), 1);

        press(&mut app, KeyCode::Char('y'));
        assert!(!app.has_dialog());
        assert!(app.ledger.is_empty());
        assert_eq!(app.status_message.as_deref(), Some("All records cleared"));
    }

    #[test]
    fn test_clear_can_be_declined() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Char('n'));
        assert!(!app.has_dialog());
        assert_eq!(app.ledger.len(), 1);

        press(&mut app, KeyCode::Char('c'));
        press(&mut app, KeyCode::Esc);
        assert!(!app.has_dialog());
        assert_eq!(app.ledger.len(), 1);
    }

    #[test]
    fn test_help_opens_and_closes_on_any_key() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.active_dialog, ActiveDialog::Help);
        press(&mut app, KeyCode::Char('x'));
        assert!(!app.has_dialog());
    }

    #[test]
    fn test_navigation_is_bounded() {
        let mut ledger = Ledger::new();
        ledger.add("Tea", "Food", "10").unwrap();
        ledger.add("Bus", "Transport", "20").unwrap();
        ledger.add("Pen", "Shopping", "5").unwrap();
        let mut app = App::new(&mut ledger);

        for _ in 0..5 {
            press(&mut app, KeyCode::Char('j'));
        }
        assert_eq!(app.selected_expense_index, 2);

        press(&mut app, KeyCode::Char('g'));
        assert_eq!(app.selected_expense_index, 0);
        press(&mut app, KeyCode::Char('G'));
        assert_eq!(app.selected_expense_index, 2);

        press(&mut app, KeyCode::Char('k'));
        assert_eq!(app.selected_expense_index, 1);
    }

    #[test]
    fn test_add_dialog_flow_through_handler() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);

        press(&mut app, KeyCode::Char('a'));
        assert_eq!(app.active_dialog, ActiveDialog::AddExpense);

        type_str(&mut app, "Tea");
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Tab);
        type_str(&mut app, "12.50");
        press(&mut app, KeyCode::Enter);

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.ledger.records()[0].item, "Tea");
    }

    #[test]
    fn test_tick_expires_status_message() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.set_status("hello");
        for _ in 0..30 {
            handle_event(&mut app, Event::Tick).unwrap();
        }
        assert!(app.status_message.is_none());
    }
}
