//! UI module for rendering the TUI

mod components;
mod forms;
mod home;
mod layout;
mod process;
mod resources;
mod services;
mod testimonials;
mod theme;

use theme::Palette;

use crate::app::App;
use crate::state::Section;
use ratatui::{widgets::Block, Frame};

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let palette = Palette::for_theme(app.theme());

    frame.render_widget(Block::default().style(palette.base()), area);

    let (menu_area, main_area) = layout::create_layout(area, app.menu_width());

    if let Some(menu_area) = menu_area {
        layout::draw_menu(frame, menu_area, app, &palette);
    }

    // Draw main content based on current section
    match app.state.current_section {
        Section::Home => home::draw_home(frame, main_area, &palette),
        Section::About => home::draw_about(frame, main_area, &palette),
        Section::Process => process::draw(frame, main_area, app, &palette),
        Section::Services => services::draw(frame, main_area, app, &palette),
        Section::Booking => forms::draw_booking(frame, main_area, app, &palette),
        Section::Testimonials => testimonials::draw(frame, main_area, app, &palette),
        Section::Resources => resources::draw(frame, main_area, app, &palette),
        Section::Contact => forms::draw_contact(frame, main_area, app, &palette),
    }

    layout::draw_status_bar(frame, app, &palette);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::SiteConfig;
    use crate::submit::SimulatedSubmitter;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::Arc;

    fn render(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 32)).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn app() -> App {
        App::new(
            SiteConfig::default(),
            None,
            Arc::new(SimulatedSubmitter::default()),
        )
    }

    #[test]
    fn test_every_section_renders() {
        let mut app = app();
        for section in Section::ALL {
            app.state.go_to(section);
            let screen = render(&app);
            assert!(screen.contains(&format!("#{}", section.anchor())));
        }
    }

    #[test]
    fn test_home_shows_tagline_and_menu() {
        let screen = render(&app());
        assert!(screen.contains("It Cures!"));
        assert!(screen.contains("Book Now"));
    }

    #[test]
    fn test_hidden_menu_is_not_drawn() {
        let mut app = app();
        app.state.toggle_menu();
        app.state.go_to(Section::Process);
        let screen = render(&app);
        assert!(!screen.contains("Book Now"));
        assert!(screen.contains("Spring Water Collection"));
    }

    #[test]
    fn test_booking_errors_are_shown() {
        let mut app = app();
        app.state.go_to(Section::Booking);
        app.state.booking.name.validate();
        let screen = render(&app);
        assert!(screen.contains("Name is required"));
    }
}
