//! Testimonial carousel

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::content::site::STATISTICS;
use crate::content::{filter_label, Testimonial};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Draw the filter bar, the current story, the pagination and the statistics
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let carousel = &app.state.testimonials;
    let snapshot = carousel.selector.snapshot();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(BUTTON_HEIGHT), // Filters
            Constraint::Min(6),                // Card
            Constraint::Length(1),             // Dots
            Constraint::Length(4),             // Statistics
        ])
        .split(area);

    // Filter buttons
    let categories = carousel.selector.categories();
    let filter_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            categories
                .iter()
                .map(|c| Constraint::Length(filter_label(*c).chars().count() as u16 + 4)),
        )
        .split(chunks[0]);
    for (idx, category) in categories.iter().enumerate() {
        render_button(
            frame,
            filter_chunks[idx],
            palette,
            &filter_label(*category),
            *category == snapshot.category,
            true,
        );
    }

    // Card, offset while sliding in
    let card_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(0),
            Constraint::Length(3),
        ])
        .split(chunks[1]);
    let card_area = slide_rect(card_row[1], carousel.slide.columns());
    match carousel.current() {
        Some(testimonial) => {
            frame.render_widget(Clear, card_row[1]);
            frame.render_widget(card(testimonial, palette), card_area);
        }
        None => {
            let empty = Paragraph::new("No stories for this filter yet.")
                .style(palette.muted())
                .alignment(Alignment::Center)
                .block(Block::default().borders(Borders::ALL).border_style(palette.muted()));
            frame.render_widget(empty, card_row[1]);
        }
    }

    if carousel.show_controls() {
        let arrow = palette.accent().add_modifier(Modifier::BOLD);
        let middle = card_row[0].y + card_row[0].height / 2;
        frame.render_widget(
            Paragraph::new(Span::styled(" ‹", arrow)),
            Rect::new(card_row[0].x, middle, card_row[0].width, 1),
        );
        frame.render_widget(
            Paragraph::new(Span::styled("› ", arrow)),
            Rect::new(card_row[2].x, middle, card_row[2].width, 1),
        );

        let dots: Vec<Span> = (0..snapshot.visible_len)
            .map(|idx| {
                if idx == snapshot.cursor {
                    Span::styled("● ", palette.accent())
                } else {
                    Span::styled("○ ", palette.muted())
                }
            })
            .collect();
        frame.render_widget(
            Paragraph::new(Line::from(dots)).alignment(Alignment::Center),
            chunks[2],
        );
    }

    draw_statistics(frame, chunks[3], palette);
}

/// `area` shifted horizontally by `columns`, clipped to stay inside it
fn slide_rect(area: Rect, columns: i32) -> Rect {
    let shift = columns.unsigned_abs().min(u32::from(area.width)) as u16;
    let width = area.width - shift;
    if columns >= 0 {
        Rect::new(area.x + shift, area.y, width, area.height)
    } else {
        Rect::new(area.x, area.y, width, area.height)
    }
}

fn card<'a>(testimonial: &'a Testimonial, palette: &Palette) -> Paragraph<'a> {
    let stars = testimonial.stars() as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled("★".repeat(stars), Style::default().fg(palette.highlight)),
            Span::styled("☆".repeat(5 - stars), palette.muted()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            format!("\u{201c}{}\u{201d}", testimonial.text),
            palette.base().add_modifier(Modifier::ITALIC),
        )),
        Line::from(""),
        Line::from(Span::styled(testimonial.name, palette.title())),
        Line::from(Span::styled(
            format!("{} · {}", testimonial.location, testimonial.month_label()),
            palette.muted(),
        )),
        Line::from(Span::styled(testimonial.condition, palette.accent())),
    ];

    Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(" Success Stories ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
}

fn draw_statistics(frame: &mut Frame, area: Rect, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(STATISTICS.iter().map(|_| Constraint::Ratio(1, STATISTICS.len() as u32)))
        .split(area);

    for (idx, (value, label)) in STATISTICS.iter().enumerate() {
        let stat = Paragraph::new(vec![
            Line::from(Span::styled(*value, palette.title())),
            Line::from(Span::styled(*label, palette.muted())),
        ])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).border_style(palette.muted()));
        frame.render_widget(stat, columns[idx]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slide_rect_settled() {
        let area = Rect::new(5, 2, 40, 10);
        assert_eq!(slide_rect(area, 0), area);
    }

    #[test]
    fn test_slide_rect_forward_shifts_right() {
        let area = Rect::new(5, 2, 40, 10);
        assert_eq!(slide_rect(area, 12), Rect::new(17, 2, 28, 10));
    }

    #[test]
    fn test_slide_rect_backward_trims_right_edge() {
        let area = Rect::new(5, 2, 40, 10);
        assert_eq!(slide_rect(area, -12), Rect::new(5, 2, 28, 10));
    }

    #[test]
    fn test_slide_rect_clamps_to_width() {
        let area = Rect::new(0, 0, 10, 3);
        assert_eq!(slide_rect(area, 50).width, 0);
    }
}
