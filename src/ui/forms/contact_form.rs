//! Contact form rendering

use super::field_renderer::draw_field;
use crate::app::App;
use crate::state::SubmissionState;
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the contact form: four fields, the submit control, and the result
/// line announcing submission state changes
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),             // Name (+ error line)
            Constraint::Length(4),             // Email (+ error line)
            Constraint::Length(4),             // Phone (+ error line)
            Constraint::Min(7),                // Message (+ error line)
            Constraint::Length(BUTTON_HEIGHT), // Submit
            Constraint::Length(1),             // Result line
        ])
        .margin(1)
        .split(area);

    let is_submitting = app.state.submission.is_submitting();
    let border_color = if is_submitting {
        Color::DarkGray
    } else {
        Color::Cyan
    };

    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    frame.render_widget(block, area);

    let form = &app.state.form;
    let fields = [&form.name, &form.email, &form.phone, &form.message];
    for (idx, field) in fields.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx],
            field,
            form.active_field_index == idx,
            app.state.errors.get(&field.name),
        );
    }

    let caption = if is_submitting {
        "Submitting..."
    } else {
        "Submit"
    };
    render_button(
        frame,
        chunks[4],
        caption,
        form.is_submit_active(),
        !is_submitting,
    );

    draw_result_line(frame, chunks[5], &app.state.submission);
}

/// Draw the submission result line (the assertive live region)
fn draw_result_line(frame: &mut Frame, area: Rect, submission: &SubmissionState) {
    let line = match submission {
        SubmissionState::Idle => Line::default(),
        SubmissionState::Submitting => Line::from(Span::styled(
            "Submitting...",
            Style::default().fg(Color::Yellow),
        )),
        SubmissionState::Succeeded(msg) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Green)))
        }
        SubmissionState::Failed(msg) => {
            Line::from(Span::styled(msg.clone(), Style::default().fg(Color::Red)))
        }
    };
    frame.render_widget(Paragraph::new(line), area);
}
