//! Booking form and success screen

use super::field_renderer::{draw_form_field, draw_help_text, draw_submit_row};
use crate::app::App;
use crate::content::site::BOOKING_CONFIRMATION;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::{BookingForm, Form};
use crate::ui::theme::Palette;
use chrono::Local;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the booking form, or the confirmation once it has been sent
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let form = &app.state.booking;
    if form.submission.is_submitted() {
        draw_success(frame, area, form, palette);
    } else {
        draw_form(frame, area, form, palette);
    }
}

fn draw_form(frame: &mut Frame, area: Rect, form: &BookingForm, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(" Book Your Consultation ", palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name | Email
            Constraint::Length(3), // Phone | Consultation type
            Constraint::Length(3), // Date | Time
            Constraint::Min(3),    // Health concerns
            Constraint::Min(3),    // Message
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    for (row, (left, right)) in [(0, 1), (2, 3), (4, 5)].into_iter().enumerate() {
        let halves = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[row]);
        draw_form_field(frame, halves[0], palette, form, left);
        draw_form_field(frame, halves[1], palette, form, right);
    }
    draw_form_field(frame, chunks[3], palette, form, 6);
    draw_form_field(frame, chunks[4], palette, form, 7);

    draw_submit_row(
        frame,
        chunks[5],
        palette,
        &form.submission,
        "Book Consultation",
        form.is_submit_row_active(),
    );

    draw_help_text(
        frame,
        chunks[6],
        palette,
        &[
            ("Tab", "next"),
            ("Left/Right", "choose"),
            (SUBMIT_SHORTCUT, "submit"),
            ("Esc", "home"),
        ],
    );
}

fn draw_success(frame: &mut Frame, area: Rect, form: &BookingForm, palette: &Palette) {
    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Booking Request Submitted!",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(BOOKING_CONFIRMATION),
        Line::from(""),
    ];

    if let Some(receipt) = form.submission.receipt() {
        lines.push(Line::from(vec![
            Span::styled("Reference: ", palette.muted()),
            Span::styled(receipt.short_reference(), palette.title()),
        ]));
        lines.push(Line::from(vec![
            Span::styled("Received:  ", palette.muted()),
            Span::raw(
                receipt
                    .submitted_at
                    .with_timezone(&Local)
                    .format("%d %B %Y, %H:%M")
                    .to_string(),
            ),
        ]));
        lines.push(Line::from(""));
    }

    lines.push(Line::from(vec![
        Span::styled("[ Enter ]", palette.title()),
        Span::raw(" Book another consultation   "),
        Span::styled("[ Esc ]", palette.title()),
        Span::raw(" Home"),
    ]));

    let success = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(" Book Your Consultation ", palette.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.success)),
        );
    frame.render_widget(success, area);
}
