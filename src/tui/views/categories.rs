//! Categories view
//!
//! Totals per category with a share bar, largest share first.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::models::{Amount, Category};
use crate::tui::app::App;

/// Render the category breakdown
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Spending by Category ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if app.ledger.is_empty() {
        let text = Paragraph::new("No expenses to plot.")
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut entries: Vec<(Category, Amount)> =
        app.ledger.aggregate_by_category().into_iter().collect();
    // Largest absolute share first; ties fall back to the category name.
    entries.sort_by(|a, b| {
        b.1.value()
            .abs()
            .partial_cmp(&a.1.value().abs())
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.0.name().cmp(b.0.name()))
    });

    let grand_abs: f64 = entries
        .iter()
        .map(|(_, amount)| amount.value().abs())
        .sum();

    let bar_width = (inner.width as usize).saturating_sub(42).clamp(10, 40);

    let mut lines = vec![Line::from("")];
    for (category, amount) in &entries {
        let share = if grand_abs > 0.0 {
            amount.value().abs() / grand_abs
        } else {
            0.0
        };
        lines.push(Line::from(vec![
            Span::raw(format!(" {:<14}", category.name())),
            Span::styled(share_bar(share, bar_width), Style::default().fg(Color::Cyan)),
            Span::styled(
                format!("  {:>12}", amount.to_string()),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {:>5.1}%", share * 100.0),
                Style::default().fg(Color::DarkGray),
            ),
        ]));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

/// Build a fixed-width bar filled proportionally to `share`
fn share_bar(share: f64, width: usize) -> String {
    let ratio = share.clamp(0.0, 1.0);
    let filled = ((ratio * width as f64) as usize).min(width);
    let empty = width.saturating_sub(filled);
    format!("{}{}", "█".repeat(filled), "░".repeat(empty))
}
