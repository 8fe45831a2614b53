//! Centered overlay panel

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Rectangle of at most `width` x `height`, centered in `area`
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Render `body` in a bordered panel over `area`, with an optional hint line
pub fn render_overlay(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    title: &str,
    mut body: Vec<Line>,
    hint: Option<&str>,
) {
    let height = (body.len() as u16 + if hint.is_some() { 4 } else { 2 }).max(5);
    let overlay_area = centered_rect(area, area.width.saturating_sub(8).min(72), height);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    if let Some(hint) = hint {
        body.push(Line::from(""));
        body.push(Line::from(Span::styled(hint.to_string(), palette.muted())));
    }

    let overlay = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(format!(" {title} "), palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.accent())
                .style(palette.base()),
        );

    frame.render_widget(overlay, overlay_area);
}
