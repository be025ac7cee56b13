//! Status bar view
//!
//! Shows the view tabs, record count, running total, and key hints

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{ActiveView, App, InputMode};

/// Render the status bar
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::raw(" ")];

    // View tabs
    for (view, label) in [
        (ActiveView::Expenses, "1:Expenses"),
        (ActiveView::Categories, "2:Categories"),
        (ActiveView::Trend, "3:Trend"),
    ] {
        let style = if app.active_view == view {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
    }

    // Record count and running total
    spans.push(Span::raw("│ "));
    spans.push(Span::styled(
        format!("{} records", app.ledger.len()),
        Style::default().fg(Color::White),
    ));
    spans.push(Span::raw(" │ "));
    spans.push(Span::styled("Total: ", Style::default().fg(Color::White)));
    spans.push(Span::styled(
        app.ledger.running_total().to_string(),
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    ));

    // Status message if any
    if let Some(ref message) = app.status_message {
        spans.push(Span::raw(" │ "));
        spans.push(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Yellow),
        ));
    }

    // Key hints (right-aligned)
    let hints = match app.input_mode {
        InputMode::Search => " Enter:Keep filter  Esc:Clear ",
        InputMode::Normal => " a:Add  /:Search  ?:Help  q:Quit ",
    };

    // Pad by display width, not byte length, the separators are multi-byte.
    let left_len: usize = spans.iter().map(|s| s.content.chars().count()).sum();
    let hints_len = hints.chars().count();
    let padding_len = (area.width as usize).saturating_sub(left_len + hints_len);
    spans.push(Span::raw(" ".repeat(padding_len.max(1))));
    spans.push(Span::styled(hints, Style::default().fg(Color::White)));

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line);

    frame.render_widget(paragraph, area);
}
