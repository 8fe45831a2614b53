//! Application state definitions

use std::time::{Duration, Instant};

use serde::{Deserialize, Serialize};

use super::forms::{BookingForm, ContactForm};
use super::sections::{ProcessStepper, ResourceTabs, ServiceCatalog, TestimonialCarousel};

/// Page section, addressed by a stable anchor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Section {
    #[default]
    Home,
    About,
    Process,
    Services,
    Booking,
    Testimonials,
    Resources,
    Contact,
}

impl Section {
    /// Sections in page order
    pub const ALL: [Section; 8] = [
        Section::Home,
        Section::About,
        Section::Process,
        Section::Services,
        Section::Booking,
        Section::Testimonials,
        Section::Resources,
        Section::Contact,
    ];

    pub fn anchor(&self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Process => "process",
            Self::Services => "services",
            Self::Booking => "booking",
            Self::Testimonials => "testimonials",
            Self::Resources => "resources",
            Self::Contact => "contact",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::About => "About",
            Self::Process => "Process",
            Self::Services => "Services",
            Self::Booking => "Book Now",
            Self::Testimonials => "Testimonials",
            Self::Resources => "Resources",
            Self::Contact => "Contact",
        }
    }

    /// Look up a section by anchor, with or without a leading `#`
    pub fn from_anchor(anchor: &str) -> Option<Self> {
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        Self::ALL.into_iter().find(|s| s.anchor() == anchor)
    }

    pub fn index(&self) -> usize {
        Self::ALL.iter().position(|s| s == self).unwrap_or(0)
    }

    /// Next section in page order, wrapping
    pub fn next(&self) -> Self {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    /// Previous section in page order, wrapping
    pub fn prev(&self) -> Self {
        let len = Self::ALL.len();
        Self::ALL[(self.index() + len - 1) % len]
    }

    /// Sections whose keys go to a form
    pub fn is_form_section(&self) -> bool {
        matches!(self, Self::Booking | Self::Contact)
    }
}

/// Color scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggle(&self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    // Navigation
    pub current_section: Section,
    pub menu_open: bool,

    // Appearance
    pub theme: Theme,

    // Sections
    pub process: ProcessStepper,
    pub services: ServiceCatalog,
    pub testimonials: TestimonialCarousel,
    pub resources: ResourceTabs,

    // Forms
    pub booking: BookingForm,
    pub contact: ContactForm,
}

impl AppState {
    pub fn new(theme: Theme, contact_dismiss: Duration, menu_open: bool) -> Self {
        Self {
            current_section: Section::default(),
            menu_open,
            theme,
            process: ProcessStepper::default(),
            services: ServiceCatalog::default(),
            testimonials: TestimonialCarousel::default(),
            resources: ResourceTabs::default(),
            booking: BookingForm::new(),
            contact: ContactForm::new(contact_dismiss),
        }
    }

    /// Switch section; overlays belonging to the old section are closed
    pub fn go_to(&mut self, section: Section) {
        if section != self.current_section {
            tracing::debug!(anchor = section.anchor(), "section changed");
            self.services.close_detail();
            self.current_section = section;
        }
    }

    /// Follow an anchor link such as `#booking`. Returns false if unknown.
    pub fn follow_anchor(&mut self, anchor: &str) -> bool {
        match Section::from_anchor(anchor) {
            Some(section) => {
                self.go_to(section);
                true
            }
            None => {
                tracing::warn!(anchor, "unknown section anchor");
                false
            }
        }
    }

    pub fn toggle_theme(&mut self) -> Theme {
        self.theme = self.theme.toggle();
        self.theme
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Advance time-based state: contact auto-dismiss and carousel slide
    pub fn tick(&mut self, now: Instant, slide_width: u16) {
        if self.contact.submission.tick(now) {
            tracing::debug!("contact confirmation dismissed");
        }
        self.testimonials.slide.update(now, slide_width);
    }

    /// True while something is moving on screen
    pub fn is_animating(&self) -> bool {
        self.testimonials.slide.is_animating()
    }

    pub fn is_submitting(&self) -> bool {
        self.booking.submission.is_submitting() || self.contact.submission.is_submitting()
    }

    /// True while a deadline is pending and the loop should poll quickly
    pub fn has_pending_timer(&self) -> bool {
        self.is_submitting() || self.contact.submission.is_submitted()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Theme::default(), Duration::from_secs(5), true)
    }
}
