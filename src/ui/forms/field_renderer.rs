//! Field rendering utilities for forms

use crate::state::{FormField, InputKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw a labeled form field with its error line.
///
/// An error turns the border red and renders the message directly beneath
/// the input, the terminal equivalent of `aria-invalid` plus an alert
/// region next to the field.
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    error: Option<&str>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Input box
            Constraint::Length(1), // Error line
        ])
        .split(area);

    draw_input_box(frame, chunks[0], field, is_active, error.is_some());

    if let Some(message) = error {
        let alert = Paragraph::new(Line::from(Span::styled(
            format!("✗ {message}"),
            Style::default().fg(Color::Red),
        )));
        frame.render_widget(alert, chunks[1]);
    }
}

fn draw_input_box(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let style = if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let border_style = if has_error {
        Style::default().fg(Color::Red)
    } else if is_active {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let display_str = if field.is_empty() && !is_active {
        placeholder(field.kind).to_string()
    } else {
        field.as_text().to_string()
    };

    let cursor = if is_active { "▌" } else { "" };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(l.to_string()))
            .collect();
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans
                    .push(Span::styled(cursor, Style::default().fg(Color::Cyan)));
            } else {
                lines.push(Line::from(Span::styled(
                    cursor,
                    Style::default().fg(Color::Cyan),
                )));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, style),
            Span::styled(cursor, Style::default().fg(Color::Cyan)),
        ]))
    };

    let marker = if field.required { "*" } else { "" };
    let block = Block::default()
        .title(format!(" {}{} ", field.label, marker))
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Hint shown in an empty, unfocused field
fn placeholder(kind: InputKind) -> &'static str {
    match kind {
        InputKind::Text => "(empty)",
        InputKind::Email => "(e.g. jan@example.com)",
        InputKind::Tel => "(e.g. +420123456789)",
    }
}
