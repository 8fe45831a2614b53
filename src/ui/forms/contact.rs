//! Contact details and message form

use super::field_renderer::{draw_form_field, draw_help_text, draw_submit_row};
use crate::app::App;
use crate::content::site::{ContactChannel, CONTACT_CHANNELS, CONTACT_CONFIRMATION, EMAIL, PHONE};
use crate::platform::{COPY_EMAIL_SHORTCUT, COPY_PHONE_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::{ContactForm, Form};
use crate::ui::theme::Palette;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the contact channels beside the message form
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(36), Constraint::Min(0)])
        .split(area);

    draw_channels(frame, columns[0], palette);

    let form = &app.state.contact;
    if form.submission.is_submitted() {
        draw_confirmation(frame, columns[1], palette);
    } else {
        draw_form(frame, columns[1], form, palette);
    }
}

/// Copy shortcut for a channel, if it has one
fn copy_hint(channel: &ContactChannel) -> Option<&'static str> {
    if *channel == EMAIL {
        Some(COPY_EMAIL_SHORTCUT)
    } else if *channel == PHONE {
        Some(COPY_PHONE_SHORTCUT)
    } else {
        None
    }
}

fn draw_channels(frame: &mut Frame, area: Rect, palette: &Palette) {
    let mut lines = Vec::new();
    for channel in CONTACT_CHANNELS.iter() {
        let mut title = vec![Span::styled(
            channel.title,
            palette.accent().add_modifier(Modifier::BOLD),
        )];
        if let Some(hint) = copy_hint(channel) {
            title.push(Span::styled(format!("  ({hint}: copy)"), palette.muted()));
        }
        lines.push(Line::from(title));
        lines.push(Line::from(channel.content));
        lines.push(Line::from(Span::styled(channel.note, palette.muted())));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(" Get In Touch ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(panel, area);
}

fn draw_form(frame: &mut Frame, area: Rect, form: &ContactForm, palette: &Palette) {
    let block = Block::default()
        .title(Span::styled(" Send us a Message ", palette.title()))
        .borders(Borders::ALL)
        .border_style(palette.border(true))
        .style(palette.base());
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Name
            Constraint::Length(3), // Email
            Constraint::Length(3), // Subject
            Constraint::Min(4),    // Message
            Constraint::Length(3), // Submit
            Constraint::Length(1), // Help text
        ])
        .margin(1)
        .split(area);

    for index in 0..ContactForm::SUBMIT_ROW {
        draw_form_field(frame, chunks[index], palette, form, index);
    }

    draw_submit_row(
        frame,
        chunks[4],
        palette,
        &form.submission,
        "Send Message",
        form.is_submit_row_active(),
    );

    draw_help_text(
        frame,
        chunks[5],
        palette,
        &[("Tab", "next"), (SUBMIT_SHORTCUT, "send"), ("Esc", "home")],
    );
}

fn draw_confirmation(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "✓ Message Sent!",
            Style::default()
                .fg(palette.success)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(CONTACT_CONFIRMATION),
    ];

    let confirmation = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(" Send us a Message ", palette.title()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(palette.success)),
        );
    frame.render_widget(confirmation, area);
}
