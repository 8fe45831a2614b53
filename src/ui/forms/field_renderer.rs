//! Field rendering utilities for forms

use crate::state::{Form, FormField, Rule, SubmissionPhase, SubmissionState};
use crate::ui::components::render_button;
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw field `index` of `form` into `area`
pub fn draw_form_field<F: Form>(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    form: &F,
    index: usize,
) {
    if let Some(field) = form.get_field(index) {
        draw_field(frame, area, palette, field, form.active_field() == index);
    }
}

/// Draw a form field, with its validation error in the bottom border
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    field: &FormField,
    is_active: bool,
) {
    let error_style = Style::default().fg(palette.error);
    let style = if is_active {
        palette.accent()
    } else {
        Style::default().fg(palette.text)
    };

    let border_style = if field.error.is_some() {
        error_style
    } else {
        palette.border(is_active)
    };

    let display_value = field.display_value();
    let (display_str, value_style) = if display_value.is_empty() && !is_active {
        ("(empty)".to_string(), palette.muted())
    } else {
        (display_value, style)
    };

    // Choice fields are edited with arrows, so no text cursor
    let cursor = if is_active && !field.is_choice() {
        "▌"
    } else {
        ""
    };

    let content = if field.is_multiline {
        let mut lines: Vec<Line> = display_str
            .lines()
            .map(|l| Line::from(Span::styled(l.to_string(), value_style)))
            .collect();
        if display_str.ends_with('\n') {
            lines.push(Line::from(""));
        }
        if is_active {
            if let Some(last) = lines.last_mut() {
                last.spans.push(Span::styled(cursor, palette.accent()));
            } else {
                lines.push(Line::from(Span::styled(cursor, palette.accent())));
            }
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![
            Span::styled(display_str, value_style),
            Span::styled(cursor, palette.accent()),
        ]))
    };

    let required = field
        .rules
        .iter()
        .any(|r| matches!(r, Rule::Required(_)));
    let title = if required {
        format!(" {} * ", field.label)
    } else {
        format!(" {} ", field.label)
    };

    let mut block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);
    if let Some(error) = field.error {
        block = block.title_bottom(Line::from(Span::styled(format!(" {error} "), error_style)));
    }

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), area);
}

/// Label shown on the submit button for the current phase
pub fn submit_label(submission: &SubmissionState, idle_label: &'static str) -> &'static str {
    match submission.phase() {
        SubmissionPhase::Submitting => "Submitting...",
        SubmissionPhase::Failed(_) => "Try Again",
        SubmissionPhase::Idle | SubmissionPhase::Submitted => idle_label,
    }
}

/// Draw the submit button, with the failure reason beside it
pub fn draw_submit_row(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    submission: &SubmissionState,
    idle_label: &'static str,
    is_active: bool,
) {
    let label = submit_label(submission, idle_label);
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(label.chars().count() as u16 + 4),
            Constraint::Min(0),
        ])
        .split(area);

    render_button(
        frame,
        chunks[0],
        palette,
        label,
        is_active && submission.can_submit(),
        submission.can_submit(),
    );

    if let SubmissionPhase::Failed(reason) = submission.phase() {
        let message = Paragraph::new(Line::from(Span::styled(
            format!(" {reason}"),
            Style::default().fg(palette.error),
        )))
        .wrap(Wrap { trim: true });
        let message_area = Rect {
            y: chunks[1].y + chunks[1].height / 2,
            height: 1,
            ..chunks[1]
        };
        frame.render_widget(message, message_area);
    }
}

/// Key help line under a form
pub fn draw_help_text(frame: &mut Frame, area: Rect, palette: &Palette, keys: &[(&str, &str)]) {
    let mut spans = Vec::new();
    for (key, action) in keys {
        spans.push(Span::styled(key.to_string(), palette.accent()));
        spans.push(Span::raw(format!(": {action}  ")));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)).style(palette.muted()), area);
}
