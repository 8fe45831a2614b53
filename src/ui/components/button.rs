//! Button component for TUI

use crate::ui::theme::Palette;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Button height in rows (top border + content + bottom border)
pub const BUTTON_HEIGHT: u16 = 3;

/// Render a generic button with border
pub fn render_button(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    content: &str,
    is_selected: bool,
    is_enabled: bool,
) {
    let border_style = palette.border(is_selected);

    let text_style = if is_selected {
        palette.accent().add_modifier(Modifier::BOLD)
    } else if !is_enabled {
        palette.muted()
    } else {
        Style::default().fg(palette.text)
    };

    let paragraph = Paragraph::new(format!(" {content} ")).style(text_style);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(paragraph.block(block), area);
}

/// Render a menu button with key and label
pub fn render_menu_button(
    frame: &mut Frame,
    area: Rect,
    palette: &Palette,
    key: &str,
    label: &str,
    is_selected: bool,
) {
    let content = format!("{key} {label}");
    render_button(frame, area, palette, &content, is_selected, true);
}
