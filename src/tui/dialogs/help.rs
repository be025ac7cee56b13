//! Help dialog
//!
//! Shows contextual keyboard shortcuts

use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::tui::app::{ActiveView, App};
use crate::tui::layout::centered_rect;

/// Render the help dialog
pub fn render(frame: &mut Frame, app: &App) {
    let area = centered_rect(60, 70, frame.area());

    // Clear the background
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Help ")
        .title_style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let help_lines = get_help_lines(app);

    let paragraph = Paragraph::new(help_lines)
        .block(block)
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}

/// Get help lines for the current context
fn get_help_lines(app: &App) -> Vec<Line<'static>> {
    let mut lines = vec![
        Line::from(vec![Span::styled(
            "Global Keys",
            Style::default()
                .add_modifier(Modifier::BOLD)
                .fg(Color::Yellow),
        )]),
        Line::from(""),
        key_line("q", "Quit application"),
        key_line("?", "Show/hide help"),
        key_line("1", "Expenses view"),
        key_line("2", "Categories view"),
        key_line("3", "Trend view"),
        key_line("a", "Add an expense"),
        key_line("c", "Clear all records"),
        key_line("e", "Export to CSV"),
        Line::from(""),
    ];

    // View-specific help
    match app.active_view {
        ActiveView::Expenses => {
            lines.push(Line::from(vec![Span::styled(
                "Expenses View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(key_line("/", "Filter expenses"));
            lines.push(key_line("j/k", "Move selection down/up"));
            lines.push(key_line("g", "Go to top"));
            lines.push(key_line("G", "Go to bottom"));
            lines.push(key_line("Esc", "Clear the active filter"));
        }
        ActiveView::Categories => {
            lines.push(Line::from(vec![Span::styled(
                "Categories View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(Line::from(
                "Totals per category, largest share first.",
            ));
        }
        ActiveView::Trend => {
            lines.push(Line::from(vec![Span::styled(
                "Trend View",
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::Yellow),
            )]));
            lines.push(Line::from(""));
            lines.push(Line::from("Daily totals over time, oldest to newest."));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![Span::styled(
        "Press any key to close",
        Style::default().fg(Color::DarkGray),
    )]));

    lines
}

/// Create a formatted key line
fn key_line(key: &str, description: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{:>8}", key), Style::default().fg(Color::Cyan)),
        Span::raw("  "),
        Span::raw(description.to_string()),
    ])
}
