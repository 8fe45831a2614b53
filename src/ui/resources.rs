//! Resources tabs and FAQ accordion

use super::theme::Palette;
use crate::app::App;
use crate::content::{tab_title, ResourceEntry, ResourceKind};
use crate::state::ResourceTabs;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Tabs, Wrap},
    Frame,
};

/// Draw the tab bar and the active tab's entries
pub fn draw(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let resources = &app.state.resources;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let categories = resources.selector.categories();
    let titles: Vec<Line> = categories
        .iter()
        .enumerate()
        .map(|(idx, tab)| Line::from(format!("{} {}", idx + 1, tab_title(*tab))))
        .collect();
    let selected_tab = categories
        .iter()
        .position(|tab| *tab == resources.active_tab())
        .unwrap_or(0);
    let tabs = Tabs::new(titles)
        .select(selected_tab)
        .style(palette.muted())
        .highlight_style(palette.title().add_modifier(Modifier::UNDERLINED))
        .block(
            Block::default()
                .title(Span::styled(" Resources ", palette.title()))
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(tabs, chunks[0]);

    if resources.is_faq_tab() {
        draw_faq(frame, chunks[1], resources, palette);
    } else {
        draw_entries(frame, chunks[1], resources, palette);
    }
}

fn draw_entries(frame: &mut Frame, area: Rect, resources: &ResourceTabs, palette: &Palette) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let items: Vec<ListItem> = resources
        .selector
        .visible_items()
        .into_iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(
                    entry.title,
                    palette.base().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(entry_meta(entry), palette.muted())),
            ])
        })
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        )
        .highlight_style(palette.accent().add_modifier(Modifier::REVERSED))
        .highlight_symbol("▸ ");
    let mut list_state = ListState::default().with_selected(Some(resources.selector.cursor()));
    frame.render_stateful_widget(list, columns[0], &mut list_state);

    let body = match resources.selector.current() {
        Some(entry) => vec![
            Line::from(Span::styled(entry.title, palette.title())),
            Line::from(Span::styled(entry_meta(entry), palette.muted())),
            Line::from(""),
            Line::from(entry.body),
        ],
        None => vec![Line::from(Span::styled("Nothing here yet", palette.muted()))],
    };
    let detail = Paragraph::new(body)
        .wrap(Wrap { trim: true })
        .style(palette.base())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(palette.border(false)),
        );
    frame.render_widget(detail, columns[1]);
}

fn draw_faq(frame: &mut Frame, area: Rect, resources: &ResourceTabs, palette: &Palette) {
    let cursor = resources.selector.cursor();
    let mut lines = Vec::new();
    for (idx, entry) in resources.selector.visible_items().into_iter().enumerate() {
        let is_open = resources.open_faq == Some(idx);
        let marker = if is_open { "▾" } else { "▸" };
        let style = if idx == cursor {
            palette.accent().add_modifier(Modifier::BOLD)
        } else {
            palette.base()
        };
        lines.push(Line::from(Span::styled(
            format!("{marker} {}", entry.title),
            style,
        )));
        if is_open {
            lines.push(Line::from(Span::styled(
                format!("  {}", entry.body),
                palette.muted(),
            )));
        }
        lines.push(Line::from(""));
    }

    let faq = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .style(palette.base())
        .block(
            Block::default()
                .title(Span::styled(
                    " Frequently Asked Questions ",
                    palette.title(),
                ))
                .borders(Borders::ALL)
                .border_style(palette.border(true)),
        );
    frame.render_widget(faq, area);
}

/// Secondary line under an entry title
fn entry_meta(entry: &ResourceEntry) -> String {
    match entry.kind {
        ResourceKind::Feature { format, duration } => format!("{format} · {duration}"),
        ResourceKind::Article {
            category,
            read_time,
        } => format!("{category} · {read_time}"),
        ResourceKind::Faq => "FAQ".to_string(),
    }
}
