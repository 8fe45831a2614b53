//! Application state and core logic

use crate::config::SiteConfig;
use crate::content::site::{ContactChannel, EMAIL, PHONE};
use crate::content::RESOURCE_TABS;
use crate::state::{AppState, Category, Form, Section, SubmitAttempt, Submittable, Theme};
use crate::submit::{Dispatcher, FormKind, SubmissionEvent, Submitter};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

/// Width of the section menu when open
pub const MENU_WIDTH: u16 = 20;

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Runs form submissions in the background
    dispatcher: Dispatcher,
    /// Loaded configuration, written back when the theme changes
    config: SiteConfig,
    /// Where to persist the configuration, if anywhere
    config_path: Option<PathBuf>,
    /// Whether the app should quit
    quit: bool,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Status bar message
    pub status_message: Option<String>,
    /// Terminal size for animation widths (height, width)
    pub terminal_size: Option<(u16, u16)>,
}

impl App {
    /// Create a new App instance
    pub fn new(
        config: SiteConfig,
        config_path: Option<PathBuf>,
        submitter: Arc<dyn Submitter>,
    ) -> Self {
        let state = AppState::new(config.theme(), config.contact_dismiss(), config.show_menu());
        Self {
            state,
            dispatcher: Dispatcher::new(submitter),
            config,
            config_path,
            quit: false,
            copy_message: None,
            status_message: None,
            terminal_size: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Get the menu width (0 when the menu is hidden)
    pub fn menu_width(&self) -> u16 {
        if self.state.menu_open {
            MENU_WIDTH
        } else {
            0
        }
    }

    /// True while the loop should redraw at animation speed
    pub fn needs_fast_poll(&self) -> bool {
        self.state.is_animating() || self.state.has_pending_timer()
    }

    /// Apply finished submissions and advance timers
    pub fn tick(&mut self, now: Instant) {
        while let Some(event) = self.dispatcher.try_recv() {
            self.apply_submission(event, now);
        }
        let width = self
            .terminal_size
            .map(|(_, w)| w.saturating_sub(self.menu_width()))
            .unwrap_or(80);
        self.state.tick(now, width);
    }

    fn apply_submission(&mut self, event: SubmissionEvent, now: Instant) {
        let label = match event.form {
            FormKind::Booking => "Booking request",
            FormKind::Contact => "Message",
        };
        self.status_message = Some(match &event.result {
            Ok(receipt) => format!("{label} sent (ref {})", receipt.short_reference()),
            Err(err) => format!("{label} not sent: {err}"),
        });
        match event.form {
            FormKind::Booking => self.state.booking.finish(event.result, now),
            FormKind::Contact => self.state.contact.finish(event.result, now),
        }
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Clear any status messages on key press
        self.copy_message = None;

        if self.handle_shortcut_key(key) {
            return Ok(());
        }

        match self.state.current_section {
            Section::Booking => self.handle_booking_key(key),
            Section::Contact => self.handle_contact_key(key),
            section => {
                if !self.handle_navigation_key(key) {
                    match section {
                        Section::Home => self.handle_home_key(key),
                        Section::Process => self.handle_process_key(key),
                        Section::Services => self.handle_services_key(key),
                        Section::Testimonials => self.handle_testimonials_key(key),
                        Section::Resources => self.handle_resources_key(key),
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }

    /// Modifier shortcuts that work in every section, forms included
    fn handle_shortcut_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::PageDown => self.state.go_to(self.state.current_section.next()),
            KeyCode::PageUp => self.state.go_to(self.state.current_section.prev()),
            KeyCode::Char('t') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.toggle_theme()
            }
            KeyCode::Char('y') if crate::platform::has_copy_modifier(key.modifiers) => {
                self.copy_contact(EMAIL)
            }
            KeyCode::Char('p') if crate::platform::has_copy_modifier(key.modifiers) => {
                self.copy_contact(PHONE)
            }
            _ => return false,
        }
        true
    }

    /// Single-key navigation for the non-form sections
    fn handle_navigation_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('m') => self.state.toggle_menu(),
            KeyCode::Char('t') => self.toggle_theme(),
            KeyCode::Char('b') => {
                self.state.follow_anchor("#booking");
            }
            KeyCode::Char('c') => {
                self.state.follow_anchor("#contact");
            }
            KeyCode::Char(']') | KeyCode::Tab => {
                self.state.go_to(self.state.current_section.next())
            }
            KeyCode::Char('[') | KeyCode::BackTab => {
                self.state.go_to(self.state.current_section.prev())
            }
            _ => return false,
        }
        true
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.state.go_to(Section::Booking),
            KeyCode::Down | KeyCode::Char('j') => self.state.go_to(Section::About),
            _ => {}
        }
    }

    fn handle_process_key(&mut self, key: KeyEvent) {
        let process = &mut self.state.process;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => process.prev(),
            KeyCode::Right | KeyCode::Char('l') => process.next(),
            KeyCode::Char(c) if c.is_ascii_digit() => {
                process.jump_to_step(c.to_digit(10).unwrap_or(1) as usize)
            }
            _ => {}
        }
    }

    fn handle_services_key(&mut self, key: KeyEvent) {
        let services = &mut self.state.services;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => services.prev(),
            KeyCode::Down | KeyCode::Char('j') => services.next(),
            KeyCode::Enter => services.open_detail(),
            KeyCode::Esc => services.close_detail(),
            _ => {}
        }
    }

    fn handle_testimonials_key(&mut self, key: KeyEvent) {
        let now = Instant::now();
        let carousel = &mut self.state.testimonials;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => carousel.prev(now),
            KeyCode::Right | KeyCode::Char('l') => carousel.next(now),
            KeyCode::Char('f') => carousel.next_filter(now),
            KeyCode::Char('F') => carousel.prev_filter(now),
            KeyCode::Char('0') => carousel.set_filter(Category::All, now),
            KeyCode::Char(c @ '1'..='9') => {
                if carousel.show_controls() {
                    let dot = c.to_digit(10).unwrap_or(1) as usize - 1;
                    if dot < carousel.selector.visible_len() {
                        carousel.jump_to(dot, now);
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_resources_key(&mut self, key: KeyEvent) {
        let resources = &mut self.state.resources;
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => resources.prev_tab(),
            KeyCode::Right | KeyCode::Char('l') => resources.next_tab(),
            KeyCode::Up | KeyCode::Char('k') => resources.prev_entry(),
            KeyCode::Down | KeyCode::Char('j') => resources.next_entry(),
            KeyCode::Enter | KeyCode::Char(' ') => resources.toggle_faq(),
            KeyCode::Char(c @ '1'..='9') => {
                let index = c.to_digit(10).unwrap_or(1) as usize - 1;
                if index < RESOURCE_TABS.len() {
                    resources.select_tab(index);
                }
            }
            _ => {}
        }
    }

    fn handle_booking_key(&mut self, key: KeyEvent) {
        if self.state.booking.submission.is_submitted() {
            match key.code {
                KeyCode::Enter | KeyCode::Char('n') => self.state.booking.book_another(),
                KeyCode::Esc => self.state.go_to(Section::Home),
                _ => {}
            }
            return;
        }
        let on_submit_row = self.state.booking.is_submit_row_active();
        if is_submit_key(&key) || (key.code == KeyCode::Enter && on_submit_row) {
            self.submit_booking();
            return;
        }
        if key.code == KeyCode::Esc {
            self.state.go_to(Section::Home);
            return;
        }
        edit_form(&mut self.state.booking, key);
    }

    fn handle_contact_key(&mut self, key: KeyEvent) {
        let on_submit_row = self.state.contact.is_submit_row_active();
        if is_submit_key(&key) || (key.code == KeyCode::Enter && on_submit_row) {
            self.submit_contact();
            return;
        }
        if key.code == KeyCode::Esc {
            self.state.go_to(Section::Home);
            return;
        }
        if !self.state.contact.submission.is_submitted() {
            edit_form(&mut self.state.contact, key);
        }
    }

    fn submit_booking(&mut self) {
        match self.state.booking.submit() {
            SubmitAttempt::Started(request) => {
                self.dispatcher.send_booking(request);
                self.status_message = Some("Submitting booking request...".to_string());
            }
            SubmitAttempt::Invalid => {
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitAttempt::Blocked => tracing::debug!("booking submit ignored"),
        }
    }

    fn submit_contact(&mut self) {
        match self.state.contact.submit() {
            SubmitAttempt::Started(request) => {
                self.dispatcher.send_contact(request);
                self.status_message = Some("Sending message...".to_string());
            }
            SubmitAttempt::Invalid => {
                self.status_message = Some("Please fix the highlighted fields".to_string());
            }
            SubmitAttempt::Blocked => tracing::debug!("contact submit ignored"),
        }
    }

    /// Flip light/dark and persist the choice
    fn toggle_theme(&mut self) {
        let theme = self.state.toggle_theme();
        tracing::info!(theme = theme.label(), "theme changed");
        self.config.theme = Some(theme);
        if let Err(err) = self.save_config() {
            tracing::warn!("failed to save config: {err:#}");
            self.status_message = Some("Theme not saved".to_string());
        }
    }

    fn save_config(&self) -> Result<()> {
        match &self.config_path {
            Some(path) => self.config.save_to(path),
            None => Ok(()),
        }
    }

    pub fn theme(&self) -> Theme {
        self.state.theme
    }

    fn copy_contact(&mut self, channel: ContactChannel) {
        match self.copy_to_clipboard(channel.content) {
            Ok(()) => {
                self.copy_message = Some(format!("Copied {}: {}", channel.title, channel.content))
            }
            Err(err) => {
                tracing::warn!("clipboard unavailable: {err:#}");
                self.copy_message = Some("Clipboard unavailable".to_string());
            }
        }
    }

    /// Copy text to the system clipboard
    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

/// Ctrl+S (Cmd+S on macOS) submits from any field
fn is_submit_key(key: &KeyEvent) -> bool {
    key.code == KeyCode::Char('s') && crate::platform::has_copy_modifier(key.modifiers)
}

/// Field navigation and text entry shared by both forms
fn edit_form<F: Form>(form: &mut F, key: KeyEvent) {
    let multiline = form.is_active_field_multiline();
    let on_choice = form
        .get_field(form.active_field())
        .is_some_and(|f| f.is_choice());

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.next_field(),
        KeyCode::BackTab | KeyCode::Up => form.prev_field(),
        KeyCode::Left if on_choice => {
            if let Some(field) = form.get_active_field_mut() {
                field.prev_choice();
            }
        }
        KeyCode::Right | KeyCode::Char(' ') if on_choice => {
            if let Some(field) = form.get_active_field_mut() {
                field.next_choice();
            }
        }
        KeyCode::Enter if multiline => {
            if let Some(field) = form.get_active_field_mut() {
                field.push_char('\n');
            }
        }
        KeyCode::Enter => form.next_field(),
        KeyCode::Backspace => {
            if let Some(field) = form.get_active_field_mut() {
                field.pop_char();
            }
        }
        KeyCode::Char(c)
            if !key.modifiers.contains(KeyModifiers::CONTROL)
                && !key.modifiers.contains(KeyModifiers::ALT) =>
        {
            if let Some(field) = form.get_active_field_mut() {
                field.push_char(c);
            }
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{ARTICLES_TAB, FAQ_TAB};
    use crate::state::{BookingForm, Receipt, SubmissionPhase, SubmitError};
    use crate::submit::MockSubmitter;
    use std::time::Duration;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    fn ctrl(app: &mut App, c: char) {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL))
            .unwrap();
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    fn app_with(mock: MockSubmitter) -> App {
        App::new(SiteConfig::default(), None, Arc::new(mock))
    }

    fn idle_app() -> App {
        app_with(MockSubmitter::new())
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_starts_on_home_with_menu() {
            let app = idle_app();
            assert_eq!(app.state.current_section, Section::Home);
            assert_eq!(app.menu_width(), MENU_WIDTH);
        }

        #[test]
        fn test_quit() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('q'));
            assert!(app.should_quit());
        }

        #[test]
        fn test_menu_toggle() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('m'));
            assert_eq!(app.menu_width(), 0);
        }

        #[test]
        fn test_book_shortcut() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('b'));
            assert_eq!(app.state.current_section, Section::Booking);
        }

        #[test]
        fn test_home_enter_goes_to_booking() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.current_section, Section::Booking);
        }

        #[test]
        fn test_section_cycling() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char(']'));
            assert_eq!(app.state.current_section, Section::About);
            press(&mut app, KeyCode::Char('['));
            press(&mut app, KeyCode::Char('['));
            assert_eq!(app.state.current_section, Section::Contact);
        }

        #[test]
        fn test_page_keys_leave_forms() {
            let mut app = idle_app();
            app.state.go_to(Section::Booking);
            press(&mut app, KeyCode::PageDown);
            assert_eq!(app.state.current_section, Section::Testimonials);
        }

        #[test]
        fn test_letters_type_inside_forms() {
            let mut app = idle_app();
            app.state.go_to(Section::Contact);
            type_text(&mut app, "qmb");
            assert!(!app.should_quit());
            assert_eq!(app.state.current_section, Section::Contact);
            assert_eq!(app.state.contact.name.as_text(), "qmb");
        }

        #[test]
        fn test_theme_toggle_everywhere() {
            let mut app = idle_app();
            press(&mut app, KeyCode::Char('t'));
            assert_eq!(app.theme(), Theme::Dark);
            app.state.go_to(Section::Booking);
            ctrl(&mut app, 't');
            assert_eq!(app.theme(), Theme::Light);
        }
    }

    mod sections {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_process_digits_jump() {
            let mut app = idle_app();
            app.state.go_to(Section::Process);
            press(&mut app, KeyCode::Char('4'));
            assert_eq!(app.state.process.step_number(), 4);
            press(&mut app, KeyCode::Char('9'));
            assert_eq!(app.state.process.step_number(), 5);
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.process.step_number(), 4);
        }

        #[test]
        fn test_services_detail() {
            let mut app = idle_app();
            app.state.go_to(Section::Services);
            press(&mut app, KeyCode::Down);
            press(&mut app, KeyCode::Enter);
            assert!(app.state.services.detail_open);
            assert_eq!(
                app.state.services.selected().map(|s| s.id),
                Some("virtual-consultation")
            );
            press(&mut app, KeyCode::Esc);
            assert!(!app.state.services.detail_open);
        }

        #[test]
        fn test_testimonial_filter_keys() {
            let mut app = idle_app();
            app.state.go_to(Section::Testimonials);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.testimonials.selector.cursor(), 1);
            press(&mut app, KeyCode::Char('f'));
            assert_eq!(
                app.state.testimonials.selector.active_category(),
                Category::Named("skin")
            );
            assert_eq!(app.state.testimonials.selector.cursor(), 0);
            press(&mut app, KeyCode::Char('0'));
            assert_eq!(app.state.testimonials.selector.visible_len(), 5);
        }

        #[test]
        fn test_testimonial_dot_keys() {
            let mut app = idle_app();
            app.state.go_to(Section::Testimonials);
            press(&mut app, KeyCode::Char('5'));
            assert_eq!(app.state.testimonials.selector.cursor(), 4);
            press(&mut app, KeyCode::Char('9'));
            assert_eq!(app.state.testimonials.selector.cursor(), 4);
        }

        #[test]
        fn test_resource_tabs_and_faq() {
            let mut app = idle_app();
            app.state.go_to(Section::Resources);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.resources.active_tab(), ARTICLES_TAB);
            press(&mut app, KeyCode::Char('3'));
            assert_eq!(app.state.resources.active_tab(), FAQ_TAB);
            press(&mut app, KeyCode::Enter);
            assert_eq!(app.state.resources.open_faq, Some(0));
        }
    }

    mod forms {
        use super::*;
        use pretty_assertions::assert_eq;

        fn fill_contact(app: &mut App) {
            app.state.go_to(Section::Contact);
            type_text(app, "Michael Chen");
            press(app, KeyCode::Tab);
            type_text(app, "michael@example.ca");
            press(app, KeyCode::Tab);
            type_text(app, "Energy");
            press(app, KeyCode::Tab);
            type_text(app, "Follow-up please");
        }

        #[test]
        fn test_booking_requires_name() {
            let mut app = idle_app();
            app.state.go_to(Section::Booking);
            ctrl(&mut app, 's');
            assert_eq!(app.state.booking.submission.phase(), &SubmissionPhase::Idle);
            assert_eq!(app.state.booking.name.error, Some("Name is required"));
            assert_eq!(
                app.status_message.as_deref(),
                Some("Please fix the highlighted fields")
            );
        }

        #[test]
        fn test_choice_field_keys() {
            let mut app = idle_app();
            app.state.go_to(Section::Booking);
            app.state.booking.set_active_field(3);
            press(&mut app, KeyCode::Right);
            assert_eq!(app.state.booking.consultation_type.as_text(), "virtual");
            press(&mut app, KeyCode::Left);
            assert_eq!(app.state.booking.consultation_type.as_text(), "in-person");
        }

        #[test]
        fn test_multiline_enter_inserts_newline() {
            let mut app = idle_app();
            app.state.go_to(Section::Contact);
            app.state.contact.set_active_field(3);
            type_text(&mut app, "a");
            press(&mut app, KeyCode::Enter);
            type_text(&mut app, "b");
            assert_eq!(app.state.contact.message.as_text(), "a\nb");
        }

        #[tokio::test]
        async fn test_contact_round_trip() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit_contact()
                .times(1)
                .returning(|_| Ok(Receipt::issue()));
            let mut app = app_with(mock);
            fill_contact(&mut app);

            ctrl(&mut app, 's');
            assert!(app.state.contact.submission.is_submitting());
            assert!(app.needs_fast_poll());

            // second submit while in flight is ignored
            ctrl(&mut app, 's');

            let event = app.dispatcher.recv().await.unwrap();
            let now = Instant::now();
            app.apply_submission(event, now);
            assert!(app.state.contact.submission.is_submitted());
            assert_eq!(app.state.contact.name.as_text(), "");
            assert!(app
                .status_message
                .as_deref()
                .is_some_and(|m| m.starts_with("Message sent")));

            app.tick(now + Duration::from_secs(5));
            assert_eq!(app.state.contact.submission.phase(), &SubmissionPhase::Idle);
        }

        #[tokio::test]
        async fn test_failed_booking_keeps_fields() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit_booking()
                .returning(|_| Err(SubmitError::Unavailable("offline".into())));
            let mut app = app_with(mock);
            app.state.go_to(Section::Booking);
            type_text(&mut app, "Ayesha Rahman");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "ayesha@example.ae");
            press(&mut app, KeyCode::Tab);
            type_text(&mut app, "+971 50 000 0000");
            press(&mut app, KeyCode::Tab);
            press(&mut app, KeyCode::Char(' '));
            app.state.booking.set_active_field(6);
            type_text(&mut app, "Digestive issues");

            ctrl(&mut app, 's');
            let event = app.dispatcher.recv().await.unwrap();
            app.apply_submission(event, Instant::now());

            assert!(matches!(
                app.state.booking.submission.phase(),
                SubmissionPhase::Failed(_)
            ));
            assert_eq!(app.state.booking.name.as_text(), "Ayesha Rahman");
            assert_eq!(
                app.status_message.as_deref(),
                Some("Booking request not sent: submission service unavailable: offline")
            );
        }

        #[tokio::test]
        async fn test_book_another_after_success() {
            let mut mock = MockSubmitter::new();
            mock.expect_submit_booking()
                .returning(|_| Ok(Receipt::issue()));
            let mut app = app_with(mock);
            app.state.go_to(Section::Booking);
            for (index, text) in [(0, "Sarah"), (1, "s@x.pk"), (2, "123"), (6, "Eczema")] {
                app.state.booking.set_active_field(index);
                type_text(&mut app, text);
            }
            app.state.booking.consultation_type.next_choice();
            app.state.booking.set_active_field(BookingForm::SUBMIT_ROW);
            press(&mut app, KeyCode::Enter);

            let event = app.dispatcher.recv().await.unwrap();
            app.apply_submission(event, Instant::now());
            assert!(app.state.booking.submission.is_submitted());

            press(&mut app, KeyCode::Char('x'));
            assert_eq!(app.state.booking.name.as_text(), "");
            press(&mut app, KeyCode::Char('n'));
            assert_eq!(app.state.booking.submission.phase(), &SubmissionPhase::Idle);
        }
    }
}
