//! Trend view
//!
//! Daily totals drawn as a line chart, oldest date on the left.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    symbols::Marker,
    text::Line,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::models::{CURRENCY_SYMBOL, DATE_FORMAT};
use crate::tui::app::App;

/// Render the daily spend chart
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Daily Spend ")
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

    let totals = app.ledger.aggregate_by_date();

    let points: Vec<(f64, f64)> = totals
        .values()
        .enumerate()
        .map(|(index, amount)| (index as f64, amount.value()))
        .collect();
    let date_labels: Vec<String> = totals
        .keys()
        .map(|date| date.format(DATE_FORMAT).to_string())
        .collect();

    // A single day still needs a non-degenerate x range.
    let x_max = points.len().saturating_sub(1).max(1) as f64;

    let min_y = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::INFINITY, f64::min);
    let max_y = points
        .iter()
        .map(|(_, y)| *y)
        .fold(f64::NEG_INFINITY, f64::max);
    let lower = min_y.min(0.0);
    let padding = (max_y - lower).abs().max(1.0) * 0.1;
    let upper = max_y + padding;

    let y_labels: Vec<Line> = vec![
        Line::from(format!("{:.0}", lower)),
        Line::from(format!("{:.0}", (lower + upper) / 2.0)),
        Line::from(format!("{:.0}", upper)),
    ];

    let dataset = Dataset::default()
        .name("daily total")
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&points);

    let chart = Chart::new(vec![dataset])
        .block(block)
        .x_axis(
            Axis::default()
                .title("Date")
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, x_max])
                .labels(x_axis_labels(&date_labels)),
        )
        .y_axis(
            Axis::default()
                .title(format!("Amount ({})", CURRENCY_SYMBOL))
                .style(Style::default().fg(Color::DarkGray))
                .bounds([lower, upper])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}

/// First, middle, and last date labels for the x axis
fn x_axis_labels(labels: &[String]) -> Vec<Line<'static>> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![Line::from(labels[0].clone())],
        2 => vec![Line::from(labels[0].clone()), Line::from(labels[1].clone())],
        n => vec![
            Line::from(labels[0].clone()),
            Line::from(labels[n / 2].clone()),
            Line::from(labels[n - 1].clone()),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x_axis_labels_pick_first_middle_last() {
        let labels: Vec<String> = ["01-01-2025", "02-01-2025", "03-01-2025", "04-01-2025"]
            .iter()
            .map(|s| s.to_string())
            .collect();
        let picked = x_axis_labels(&labels);
        assert_eq!(picked.len(), 3);
        assert_eq!(picked[0].to_string(), "01-01-2025");
        assert_eq!(picked[1].to_string(), "03-01-2025");
        assert_eq!(picked[2].to_string(), "04-01-2025");
    }

    #[test]
    fn test_x_axis_labels_single_day() {
        let labels = vec!["01-01-2025".to_string()];
        assert_eq!(x_axis_labels(&labels).len(), 1);
    }
}
