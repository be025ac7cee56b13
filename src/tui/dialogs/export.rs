//! Export dialog
//!
//! Prompts for a destination path and writes the CSV snapshot there.
//! The outcome lands in the status bar either way; a failed write
//! never takes the session down.

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent};
use directories::UserDirs;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::tui::app::App;
use crate::tui::layout::centered_rect_fixed;
use crate::tui::widgets::TextInput;

/// State of the export dialog
#[derive(Debug, Default)]
pub struct ExportFormState {
    /// Destination path input
    pub path_input: TextInput,
}

impl ExportFormState {
    /// Create the form with the default destination filled in
    pub fn prefilled() -> Self {
        let path = default_export_path();
        let path_input = TextInput::new()
            .content(path.to_string_lossy())
            .focused(true);
        Self { path_input }
    }
}

/// Default CSV destination, in the home directory when it resolves
fn default_export_path() -> PathBuf {
    UserDirs::new()
        .map(|dirs| dirs.home_dir().join("expenses.csv"))
        .unwrap_or_else(|| PathBuf::from("expenses.csv"))
}

/// Handle a key press while the export dialog is open
pub fn handle_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.close_dialog(),
        KeyCode::Enter => submit(app),
        KeyCode::Char(c) => app.export_form.path_input.insert(c),
        KeyCode::Backspace => app.export_form.path_input.backspace(),
        KeyCode::Delete => app.export_form.path_input.delete(),
        KeyCode::Left => app.export_form.path_input.move_left(),
        KeyCode::Right => app.export_form.path_input.move_right(),
        KeyCode::Home => app.export_form.path_input.move_start(),
        KeyCode::End => app.export_form.path_input.move_end(),
        _ => {}
    }
}

/// Write the snapshot and report the outcome in the status bar
fn submit(app: &mut App) {
    let path = PathBuf::from(app.export_form.path_input.value());
    match app.ledger.export_to_path(&path) {
        Ok(()) => {
            app.close_dialog();
            app.set_status(format!("Expenses saved to {}", path.display()));
        }
        Err(err) => {
            app.close_dialog();
            app.set_status(err.to_string());
        }
    }
}

/// Render the export dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect_fixed(60, 7, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Export CSV ")
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
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Path input
            Constraint::Length(1), // Spacer
            Constraint::Length(1), // Hints
            Constraint::Min(0),    // Remaining
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(Span::styled("Save to:", Style::default().fg(Color::Cyan))),
        chunks[0],
    );
    frame.render_widget(&app.export_form.path_input, chunks[1]);

    let hints = Line::from(vec![
        Span::styled("[Enter]", Style::default().fg(Color::DarkGray)),
        Span::raw(" save  "),
        Span::styled("[Esc]", Style::default().fg(Color::DarkGray)),
        Span::raw(" cancel"),
    ]);
    frame.render_widget(Paragraph::new(hints), chunks[3]);
}
