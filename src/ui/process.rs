//! Treatment process stepper

use super::components::{render_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the step indicator, the current step and the prev/next controls
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let process = &app.state.process;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),             // Step indicator
            Constraint::Min(0),                // Step detail
            Constraint::Length(BUTTON_HEIGHT), // Controls
        ])
        .split(area);

    // Step indicator: ①──②──③ style, current step accented
    let mut spans = Vec::new();
    for (idx, step) in process.selector.items().iter().enumerate() {
        if idx > 0 {
            spans.push(Span::styled("──", palette.muted()));
        }
        let style = if usize::from(step.number) == process.step_number() {
            palette.title().add_modifier(Modifier::REVERSED)
        } else if usize::from(step.number) < process.step_number() {
            palette.accent()
        } else {
            palette.muted()
        };
        spans.push(Span::styled(format!(" {} ", step.number), style));
    }
    let indicator = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .title(Span::styled(" Our Healing Process ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(indicator, chunks[0]);

    let content = match process.current() {
        Some(step) => vec![
            Line::from(Span::styled(
                format!("{}  Step {}: {}", step.icon, step.number, step.title),
                palette.title(),
            )),
            Line::from(""),
            Line::from(Span::styled(step.summary, palette.accent())),
            Line::from(""),
            Line::from(step.details),
        ],
        None => vec![Line::from(Span::styled("No steps", palette.muted()))],
    };
    let detail = Paragraph::new(content)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        );
    frame.render_widget(detail, chunks[1]);

    let controls = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(16),
            Constraint::Min(0),
            Constraint::Length(16),
        ])
        .split(chunks[2]);
    render_button(
        frame,
        controls[0],
        palette,
        "← Previous",
        false,
        process.can_go_back(),
    );
    render_button(
        frame,
        controls[2],
        palette,
        "Next →",
        false,
        process.can_go_forward(),
    );
}
