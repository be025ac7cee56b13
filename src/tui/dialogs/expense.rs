//! Add expense dialog
//!
//! Form for entering a new expense record. Validation runs in the
//! ledger; a rejected submit keeps the dialog open with every field
//! intact so the user can correct it.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::Category;
use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// Which form field has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExpenseField {
    #[default]
    Item,
    Category,
    Amount,
}

impl ExpenseField {
    fn next(self) -> Self {
        match self {
            Self::Item => Self::Category,
            Self::Category => Self::Amount,
            Self::Amount => Self::Item,
        }
    }

    fn prev(self) -> Self {
        match self {
            Self::Item => Self::Amount,
            Self::Category => Self::Item,
            Self::Amount => Self::Category,
        }
    }
}

/// State of the add-expense form
#[derive(Debug)]
pub struct ExpenseFormState {
    /// Currently focused field
    pub focused_field: ExpenseField,
    /// Item description input
    pub item_input: TextInput,
    /// Index into [`Category::all`], starts unselected
    pub selected_category: Option<usize>,
    /// Amount input
    pub amount_input: TextInput,
    /// Validation error from the last submit
    pub error_message: Option<String>,
}

impl ExpenseFormState {
    /// Create a fresh form with the item field focused
    pub fn new() -> Self {
        let mut form = Self {
            focused_field: ExpenseField::Item,
            item_input: TextInput::new(),
            selected_category: None,
            amount_input: TextInput::new().placeholder("0.00"),
            error_message: None,
        };
        form.update_focus();
        form
    }

    /// Sync each input's focus flag with the focused field
    pub fn update_focus(&mut self) {
        self.item_input
            .set_focused(self.focused_field == ExpenseField::Item);
        self.amount_input
            .set_focused(self.focused_field == ExpenseField::Amount);
    }

    /// Move focus to the next field
    pub fn next_field(&mut self) {
        self.focused_field = self.focused_field.next();
        self.update_focus();
    }

    /// Move focus to the previous field
    pub fn prev_field(&mut self) {
        self.focused_field = self.focused_field.prev();
        self.update_focus();
    }

    fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused_field {
            ExpenseField::Item => Some(&mut self.item_input),
            ExpenseField::Category => None,
            ExpenseField::Amount => Some(&mut self.amount_input),
        }
    }

    /// Cycle forward through the fixed category set
    pub fn next_category(&mut self) {
        let count = Category::all().len();
        self.selected_category = Some(match self.selected_category {
            None => 0,
            Some(index) => (index + 1) % count,
        });
    }

    /// Cycle backward through the fixed category set
    pub fn prev_category(&mut self) {
        let count = Category::all().len();
        self.selected_category = Some(match self.selected_category {
            None => count - 1,
            Some(index) => (index + count - 1) % count,
        });
    }

    /// Name of the selected category, empty while nothing is picked
    pub fn category_name(&self) -> &'static str {
        self.selected_category
            .map(|index| Category::all()[index].name())
            .unwrap_or("")
    }

    /// Set the validation error
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Clear the validation error
    pub fn clear_error(&mut self) {
        self.error_message = None;
    }
}

impl Default for ExpenseFormState {
    fn default() -> Self {
        Self::new()
    }
}

/// Handle a key press while the add-expense dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.close_dialog();
        }

        KeyCode::Enter => {
            submit(app);
        }

        KeyCode::Tab => {
            if key.modifiers.contains(KeyModifiers::SHIFT) {
                app.expense_form.prev_field();
            } else {
                app.expense_form.next_field();
            }
        }

        KeyCode::BackTab | KeyCode::Up => {
            app.expense_form.prev_field();
        }

        KeyCode::Down => {
            app.expense_form.next_field();
        }

        _ if app.expense_form.focused_field == ExpenseField::Category => match key.code {
            KeyCode::Left => {
                app.expense_form.clear_error();
                app.expense_form.prev_category();
            }
            KeyCode::Right | KeyCode::Char(' ') => {
                app.expense_form.clear_error();
                app.expense_form.next_category();
            }
            _ => {}
        },

        KeyCode::Char(c) => {
            app.expense_form.clear_error();
            if let Some(input) = app.expense_form.focused_input() {
                input.insert(c);
            }
        }

        KeyCode::Backspace => {
            app.expense_form.clear_error();
            if let Some(input) = app.expense_form.focused_input() {
                input.backspace();
            }
        }

        KeyCode::Delete => {
            if let Some(input) = app.expense_form.focused_input() {
                input.delete();
            }
        }

        KeyCode::Left => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_left();
            }
        }

        KeyCode::Right => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_right();
            }
        }

        KeyCode::Home => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_start();
            }
        }

        KeyCode::End => {
            if let Some(input) = app.expense_form.focused_input() {
                input.move_end();
            }
        }

        _ => {}
    }
}

/// Run the form through the ledger, closing the dialog on success
fn submit(app: &mut App) {
    let item = app.expense_form.item_input.value().to_string();
    let category = app.expense_form.category_name();
    let amount = app.expense_form.amount_input.value().to_string();

    match app.ledger.add(&item, category, &amount) {
        Ok(record) => {
            app.close_dialog();
            app.set_status(format!("Added {} {}", record.item, record.amount));
        }
        Err(err) => {
            app.expense_form.set_error(err.to_string());
        }
    }
}

/// Render the add-expense dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(52, 11, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Add Expense ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(block, area);

    let inner = Rect {
        x: area.x + 2,
        y: area.y + 1,
        width: area.width.saturating_sub(4),
        height: area.height.saturating_sub(2),
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Item
            Constraint::Length(1), // Category
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Error
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    let form = &app.expense_form;

    render_field(
        frame,
        chunks[1],
        "Item",
        &form.item_input,
        form.focused_field == ExpenseField::Item,
    );
    render_category_field(frame, chunks[2], form);
    render_field(
        frame,
        chunks[3],
        "Amount",
        &form.amount_input,
        form.focused_field == ExpenseField::Amount,
    );

    if let Some(error) = &form.error_message {
        frame.render_widget(
            Paragraph::new(Span::styled(
                error.clone(),
                Style::default().fg(Color::Red),
            )),
            chunks[5],
        );
    }

    let hints = Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::DarkGray)),
        Span::raw(" next field  "),
        Span::styled("[Enter]", Style::default().fg(Color::DarkGray)),
        Span::raw(" add  "),
        Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[7]);
}

/// Render a labelled text field
fn render_field(frame: &mut Frame, area: Rect, label: &str, input: &TextInput, focused: bool) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(10)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:>10}: ", label),
            label_style(focused),
        )),
        chunks[0],
    );
    frame.render_widget(input, chunks[1]);
}

/// Render the category cycler
fn render_category_field(frame: &mut Frame, area: Rect, form: &ExpenseFormState) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(12), Constraint::Min(10)])
        .split(area);

    let focused = form.focused_field == ExpenseField::Category;

    frame.render_widget(
        Paragraph::new(Span::styled(
            format!("{:>10}: ", "Category"),
            label_style(focused),
        )),
        chunks[0],
    );

    let value = match form.selected_category {
        Some(index) => format!("< {} >", Category::all()[index].name()),
        None => String::from("(none)"),
    };
    let value_style = match (focused, form.selected_category) {
        (true, _) => Style::default().add_modifier(Modifier::REVERSED),
        (false, None) => Style::default().fg(Color::DarkGray),
        (false, Some(_)) => Style::default().fg(Color::Yellow),
    };
    frame.render_widget(Paragraph::new(Span::styled(value, value_style)), chunks[1]);
}

fn label_style(focused: bool) -> Style {
    if focused {
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ledger::Ledger;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_field_order_wraps() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.focused_field, ExpenseField::Item);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Category);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
        form.next_field();
        assert_eq!(form.focused_field, ExpenseField::Item);
        form.prev_field();
        assert_eq!(form.focused_field, ExpenseField::Amount);
    }

    #[test]
    fn test_category_cycler_starts_unselected() {
        let mut form = ExpenseFormState::new();
        assert_eq!(form.category_name(), "");
        form.next_category();
        assert_eq!(form.category_name(), "Food");
        form.prev_category();
        form.prev_category();
        assert_eq!(form.category_name(), "Entertainment");
    }

    #[test]
    fn test_submit_empty_form_reports_missing_item() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.open_dialog(crate::tui::app::ActiveDialog::AddExpense);

        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Please fill in the item before adding.")
        );
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_submit_keeps_fields_on_failure() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.open_dialog(crate::tui::app::ActiveDialog::AddExpense);

        for c in "Tea".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Right));
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "abc".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(app.has_dialog());
        assert_eq!(
            app.expense_form.error_message.as_deref(),
            Some("Amount should be a number.")
        );
        assert_eq!(app.expense_form.item_input.value(), "Tea");
        assert_eq!(app.expense_form.category_name(), "Food");
        assert_eq!(app.expense_form.amount_input.value(), "abc");
    }

    #[test]
    fn test_submit_valid_form_adds_and_closes() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.open_dialog(crate::tui::app::ActiveDialog::AddExpense);

        for c in "Tea".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Tab));
        handle_key(&mut app, key(KeyCode::Char(' ')));
        handle_key(&mut app, key(KeyCode::Tab));
        for c in "12.50".chars() {
            handle_key(&mut app, key(KeyCode::Char(c)));
        }
        handle_key(&mut app, key(KeyCode::Enter));

        assert!(!app.has_dialog());
        assert_eq!(app.ledger.len(), 1);
        assert_eq!(app.status_message.as_deref(), Some("Added Tea ₹12.50"));
    }

    #[test]
    fn test_escape_closes_without_adding() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.open_dialog(crate::tui::app::ActiveDialog::AddExpense);

        handle_key(&mut app, key(KeyCode::Char('x')));
        handle_key(&mut app, key(KeyCode::Esc));

        assert!(!app.has_dialog());
        assert!(app.ledger.is_empty());
    }

    #[test]
    fn test_typing_clears_previous_error() {
        let mut ledger = Ledger::new();
        let mut app = App::new(&mut ledger);
        app.open_dialog(crate::tui::app::ActiveDialog::AddExpense);

        handle_key(&mut app, key(KeyCode::Enter));
        assert!(app.expense_form.error_message.is_some());

        handle_key(&mut app, key(KeyCode::Char('T')));
        assert!(app.expense_form.error_message.is_none());
    }
}
