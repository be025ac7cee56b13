//! Expenses view
//!
//! Search field, the expense table, and a totals footer.

use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::models::{Amount, ExpenseRecord};
use crate::tui::app::{App, InputMode};
use crate::tui::layout::ExpensesLayout;

/// Render the expenses view
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let layout = ExpensesLayout::new(area);

    render_search(frame, app, layout.search);

    let records = app.ledger.search(app.search_input.value());
    render_table(frame, app, &records, layout.table);
    render_totals(frame, app, &records, layout.totals);
}

/// Render the search field
fn render_search(frame: &mut Frame, app: &App, area: Rect) {
    let searching = app.input_mode == InputMode::Search;
    let border_color = if searching { Color::Cyan } else { Color::DarkGray };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(&app.search_input, inner);
}

/// Render the expense table
fn render_table(frame: &mut Frame, app: &App, records: &[&ExpenseRecord], area: Rect) {
    let block = Block::default()
        .title(" Expenses ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    if records.is_empty() {
        let message = if app.ledger.is_empty() {
            "No expenses. Press 'a' to add one."
        } else {
            "No matching expenses."
        };
        let text = Paragraph::new(message)
            .block(block)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center);
        frame.render_widget(text, area);
        return;
    }

    let widths = [
        Constraint::Length(12), // Date
        Constraint::Min(10),    // Item
        Constraint::Length(15), // Category
        Constraint::Length(12), // Amount
    ];

    let header = Row::new(vec![
        Cell::from("Date").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Item").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from("Category").style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(
            Line::from(Span::styled(
                "Amount",
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
        ),
    ])
    .style(Style::default().fg(Color::Yellow))
    .height(1);

    let item_width = (area.width as usize)
        .saturating_sub(12 + 15 + 12 + 6)
        .max(10);

    let rows: Vec<Row> = records
        .iter()
        .map(|record| {
            // Refunds carry a negative amount.
            let amount_style = if record.amount.is_negative() {
                Style::default().fg(Color::Green)
            } else {
                Style::default()
            };

            Row::new(vec![
                Cell::from(record.date_label()),
                Cell::from(truncate_string(&record.item, item_width)),
                Cell::from(record.category.name()),
                Cell::from(
                    Line::from(Span::styled(record.amount.to_string(), amount_style))
                        .alignment(Alignment::Right),
                ),
            ])
        })
        .collect();

    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(Some(app.selected_expense_index.min(records.len() - 1)));

    frame.render_stateful_widget(table, area, &mut state);
}

/// Render the totals footer
fn render_totals(frame: &mut Frame, app: &App, records: &[&ExpenseRecord], area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let total_span = Span::styled(
        app.ledger.running_total().to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    );

    let line = if app.search_input.is_empty() {
        Line::from(vec![Span::raw("Total: "), total_span])
    } else {
        let shown: Amount = records.iter().map(|record| record.amount).sum();
        Line::from(vec![
            Span::raw("Shown: "),
            Span::styled(
                shown.to_string(),
                Style::default().add_modifier(Modifier::BOLD),
            ),
            Span::raw("  │  Total: "),
            total_span,
        ])
    };

    frame.render_widget(Paragraph::new(line).block(block), area);
}

/// Truncate a string to a maximum display width
fn truncate_string(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", kept)
    }
}
