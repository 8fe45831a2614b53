//! Layout components (menu, status bar)

use super::components::{render_menu_button, BUTTON_HEIGHT};
use super::theme::Palette;
use crate::app::App;
use crate::platform::{COPY_EMAIL_SHORTCUT, SUBMIT_SHORTCUT};
use crate::state::Section;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the frame into an optional menu column and the main content.
/// The bottom row is left free for the status bar.
pub fn create_layout(area: Rect, menu_width: u16) -> (Option<Rect>, Rect) {
    // Reserve bottom line for status bar
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    if menu_width == 0 {
        return (None, rows[0]);
    }

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(menu_width), // Menu
            Constraint::Min(0),             // Main content
        ])
        .split(rows[0]);

    (Some(chunks[0]), chunks[1])
}

/// Draw the section menu with boxed buttons
pub fn draw_menu(frame: &mut Frame, area: Rect, app: &App, palette: &Palette) {
    let mut constraints = vec![Constraint::Min(0)];
    constraints.extend(Section::ALL.iter().map(|_| Constraint::Length(BUTTON_HEIGHT)));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    for (idx, section) in Section::ALL.iter().enumerate() {
        let is_selected = *section == app.state.current_section;
        let marker = if is_selected { "▸" } else { " " };
        render_menu_button(
            frame,
            chunks[idx + 1],
            palette,
            marker,
            section.title(),
            is_selected,
        );
    }
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, app: &App, palette: &Palette) {
    let area = frame.area();
    let status_area = Rect {
        x: 0,
        y: area.height.saturating_sub(1),
        width: area.width,
        height: 1,
    };
    let bar = Style::default().bg(palette.status_bg).fg(palette.text);

    let mut spans = vec![Span::styled(
        format!(" #{} ", app.state.current_section.anchor()),
        bar.fg(palette.accent),
    )];

    // Section-specific hints
    spans.push(Span::raw(section_hints(app.state.current_section)));

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, bar.fg(palette.highlight)));
    }

    if let Some(msg) = &app.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, bar.fg(palette.success)));
    }

    let status = Paragraph::new(Line::from(spans)).style(bar);
    frame.render_widget(status, status_area);

    // Quit hint on the right
    let quit_hint = if app.state.current_section.is_form_section() {
        " Esc:home ^C:quit "
    } else {
        " q:quit "
    };
    let quit_area = Rect {
        x: area.width.saturating_sub(quit_hint.len() as u16),
        y: area.height.saturating_sub(1),
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    frame.render_widget(Paragraph::new(quit_hint).style(bar), quit_area);
}

/// Keyboard hints for the current section
fn section_hints(section: Section) -> String {
    let nav = "Tab/[]:section  m:menu  t:theme  b:book";
    match section {
        Section::Home => format!("Enter:book  Down:about  {nav}"),
        Section::About => nav.to_string(),
        Section::Process => format!("Left/Right:step  1-5:jump  {nav}"),
        Section::Services => format!("Up/Down:select  Enter:details  Esc:close  {nav}"),
        Section::Testimonials => format!("Left/Right:story  f/F:filter  0:all  {nav}"),
        Section::Resources => format!("Left/Right:tab  Up/Down:entry  Enter:open  {nav}"),
        Section::Booking | Section::Contact => format!(
            "Tab:next field  Space:choose  {SUBMIT_SHORTCUT}:submit  PgUp/PgDn:section  {COPY_EMAIL_SHORTCUT}:copy email"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_without_menu() {
        let (menu, main) = create_layout(Rect::new(0, 0, 80, 24), 0);
        assert!(menu.is_none());
        assert_eq!(main, Rect::new(0, 0, 80, 23));
    }

    #[test]
    fn test_layout_with_menu() {
        let (menu, main) = create_layout(Rect::new(0, 0, 80, 24), 20);
        assert_eq!(menu, Some(Rect::new(0, 0, 20, 23)));
        assert_eq!(main, Rect::new(20, 0, 60, 23));
    }

    #[test]
    fn test_form_hints_mention_submit() {
        assert!(section_hints(Section::Booking).contains(SUBMIT_SHORTCUT));
        assert!(!section_hints(Section::Process).contains(SUBMIT_SHORTCUT));
    }
}
