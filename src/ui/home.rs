//! Hero and about sections

use super::theme::Palette;
use crate::content::site::{
    Highlight, BENEFITS, BRAND, KEY_QUOTE, PHILOSOPHY_INTRO, PRINCIPLES, SOCIAL_PROOF, SUBTITLE,
    TAGLINE,
};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the hero banner
pub fn draw_home(frame: &mut Frame, area: Rect, palette: &Palette) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            BRAND.to_uppercase(),
            palette.title().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            TAGLINE,
            Style::default()
                .fg(palette.highlight)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(SUBTITLE),
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{KEY_QUOTE}\u{201d}"),
            palette.muted().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(vec![
            Span::styled("[ Enter ]", palette.title()),
            Span::raw(" Book a consultation   "),
            Span::styled("[ Down ]", palette.title()),
            Span::raw(" Learn more"),
        ]),
        Line::from(""),
        Line::from(Span::styled(SOCIAL_PROOF, palette.muted())),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        );
    frame.render_widget(hero, area);
}

/// Draw the philosophy, principles and benefits
pub fn draw_about(frame: &mut Frame, area: Rect, palette: &Palette) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(5), Constraint::Min(0)])
        .split(area);

    let intro = Paragraph::new(PHILOSOPHY_INTRO)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(" Our Philosophy ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        );
    frame.render_widget(intro, chunks[0]);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    draw_highlights(frame, columns[0], palette, " Core Principles ", &PRINCIPLES);
    draw_highlights(frame, columns[1], palette, " Why Choose Us ", &BENEFITS);
}

fn draw_highlights(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    items: &[Highlight],
) {
    let mut lines = Vec::new();
    for item in items {
        lines.push(Line::from(Span::styled(
            format!("◆ {}", item.title),
            palette.accent().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(item.description));
        lines.push(Line::from(""));
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(title.to_string(), palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(panel, area);
}
