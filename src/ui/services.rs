//! Services catalog and detail overlay

use super::components::render_overlay;
use super::theme::Palette;
use crate::app::App;
use crate::content::Service;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

/// Draw the service list and summary, with the detail overlay when open
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let catalog = &app.state.services;

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(34), Constraint::Min(0)])
        .split(area);

    let items: Vec<ListItem> = catalog
        .selector
        .items()
        .iter()
        .map(|service| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    service.title,
                    palette.base().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(service.kind.label(), palette.muted())),
            ])
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(Span::styled(" Our Services ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(!catalog.detail_open)),
        )
        .highlight_style(palette.accent().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(catalog.selector.cursor()));
    frame.render_stateful_widget(list, chunks[0], &mut list_state);

    let summary = match catalog.selected() {
        Some(service) => summary_lines(service, palette),
        None => vec![Line::from(Span::styled("No services", palette.muted()))],
    };
    let panel = Paragraph::new(summary)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(panel, chunks[1]);

    if catalog.detail_open {
        if let Some(service) = catalog.selected() {
            render_overlay(
                frame,
                area,
                palette,
                service.title,
                detail_lines(service, palette),
                Some("Esc:close  b:book this service"),
            );
        }
    }
}

fn summary_lines<'a>(service: &'a Service, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![
        Line::from(Span::styled(service.title, palette.title())),
        Line::from(""),
        Line::from(service.description),
        Line::from(""),
    ];
    if let Some(pricing) = service.pricing {
        lines.push(Line::from(vec![
            Span::styled("Price: ", palette.muted()),
            Span::raw(pricing),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Press Enter for details",
        palette.muted(),
    )));
    lines
}

fn detail_lines<'a>(service: &'a Service, palette: &Palette) -> Vec<Line<'a>> {
    let mut lines = vec![Line::from(service.description), Line::from("")];
    lines.push(Line::from(Span::styled("What's included", palette.accent())));
    for benefit in service.benefits {
        lines.push(Line::from(format!("  ✓ {benefit}")));
    }
    lines.push(Line::from(""));
    if let Some(duration) = service.duration {
        lines.push(Line::from(vec![
            Span::styled("Duration: ", palette.muted()),
            Span::raw(duration),
        ]));
    }
    if let Some(pricing) = service.pricing {
        lines.push(Line::from(vec![
            Span::styled("Price:    ", palette.muted()),
            Span::raw(pricing),
        ]));
    }
    lines.push(Line::from(vec![
        Span::styled("Format:   ", palette.muted()),
        Span::raw(service.kind.label()),
    ]));
    lines
}
