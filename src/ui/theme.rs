//! Colors for the light and dark themes

use crate::state::Theme;
use ratatui::style::{Color, Modifier, Style};

/// Resolved colors for one theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: Color,
    pub text: Color,
    pub muted: Color,
    pub accent: Color,
    pub highlight: Color,
    pub success: Color,
    pub error: Color,
    pub status_bg: Color,
}

impl Palette {
    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Light => Self {
                background: Color::White,
                text: Color::Black,
                muted: Color::Gray,
                accent: Color::Blue,
                highlight: Color::Magenta,
                success: Color::Green,
                error: Color::Red,
                status_bg: Color::Gray,
            },
            Theme::Dark => Self {
                background: Color::Reset,
                text: Color::White,
                muted: Color::DarkGray,
                accent: Color::Cyan,
                highlight: Color::Yellow,
                success: Color::Green,
                error: Color::LightRed,
                status_bg: Color::DarkGray,
            },
        }
    }

    pub fn base(&self) -> Style {
        Style::default().fg(self.text).bg(self.background)
    }

    pub fn muted(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    /// Border for a panel, accented when it has focus
    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.accent()
        } else {
            self.muted()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_themes_differ() {
        let light = Palette::for_theme(Theme::Light);
        let dark = Palette::for_theme(Theme::Dark);
        assert_ne!(light, dark);
        assert_eq!(light.text, Color::Black);
        assert_eq!(dark.text, Color::White);
    }

    #[test]
    fn test_border_follows_focus() {
        let palette = Palette::for_theme(Theme::Dark);
        assert_eq!(palette.border(true), Style::default().fg(Color::Cyan));
        assert_eq!(palette.border(false), Style::default().fg(Color::DarkGray));
    }
}
