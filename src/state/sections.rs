//! Per-section view state built on [`Selector`]
//!
//! Each interactive section owns one selector configured for its behavior:
//! the testimonial carousel filters loosely and wraps, the resource tabs
//! filter exactly and clamp, and the process stepper and service list are
//! unfiltered and clamp.

use std::time::Instant;

use super::selector::{Category, MatchMode, Navigation, Selector, SelectorConfig};
use super::slide_state::{SlideDirection, SlideState};
use crate::content::{
    self, ResourceEntry, ResourceKind, Service, Testimonial, TreatmentStep, BIOGEOMETRY_TAB,
    FAQ_TAB, RESOURCE_TABS,
};

/// Testimonials carousel: keyword filter, wrapping navigation
#[derive(Debug, Clone)]
pub struct TestimonialCarousel {
    pub selector: Selector<Testimonial>,
    pub slide: SlideState,
}

impl TestimonialCarousel {
    pub fn new(items: Vec<Testimonial>) -> Self {
        let categories = std::iter::once(Category::All)
            .chain(content::CONDITION_FILTERS.iter().map(|c| Category::Named(*c)))
            .collect();
        let config = SelectorConfig {
            categories,
            match_mode: MatchMode::Contains,
            navigation: Navigation::Circular,
        };
        Self {
            selector: Selector::new(items, config),
            slide: SlideState::default(),
        }
    }

    pub fn current(&self) -> Option<&Testimonial> {
        self.selector.current()
    }

    pub fn set_filter(&mut self, category: Category, now: Instant) {
        self.selector.set_filter(category);
        self.slide.start(SlideDirection::Forward, now);
    }

    pub fn next_filter(&mut self, now: Instant) {
        self.selector.next_filter();
        self.slide.start(SlideDirection::Forward, now);
    }

    pub fn prev_filter(&mut self, now: Instant) {
        self.selector.prev_filter();
        self.slide.start(SlideDirection::Backward, now);
    }

    pub fn next(&mut self, now: Instant) {
        if self.show_controls() {
            self.selector.next();
            self.slide.start(SlideDirection::Forward, now);
        }
    }

    pub fn prev(&mut self, now: Instant) {
        if self.show_controls() {
            self.selector.prev();
            self.slide.start(SlideDirection::Backward, now);
        }
    }

    /// Jump to a pagination dot
    pub fn jump_to(&mut self, index: usize, now: Instant) {
        let before = self.selector.cursor();
        let target = isize::try_from(index).unwrap_or(isize::MAX);
        match self.selector.jump_to(target) {
            Ok(cursor) if cursor != before => {
                let direction = if cursor > before {
                    SlideDirection::Forward
                } else {
                    SlideDirection::Backward
                };
                self.slide.start(direction, now);
            }
            Ok(_) => {}
            Err(err) => tracing::error!("testimonial jump rejected: {err}"),
        }
    }

    /// Dots and prev/next are shown only when there is somewhere to go
    pub fn show_controls(&self) -> bool {
        self.selector.visible_len() > 1
    }
}

impl Default for TestimonialCarousel {
    fn default() -> Self {
        Self::new(content::testimonials())
    }
}

/// Resources panel: one tab per category, FAQ accordion on the FAQ tab
#[derive(Debug, Clone)]
pub struct ResourceTabs {
    pub selector: Selector<ResourceEntry>,
    /// Cursor of the expanded FAQ entry, if any
    pub open_faq: Option<usize>,
}

impl ResourceTabs {
    pub fn new(items: Vec<ResourceEntry>) -> Self {
        let config = SelectorConfig {
            categories: RESOURCE_TABS.to_vec(),
            match_mode: MatchMode::Exact,
            navigation: Navigation::Clamped,
        };
        let mut selector = Selector::new(items, config);
        selector.set_filter(BIOGEOMETRY_TAB);
        Self {
            selector,
            open_faq: None,
        }
    }

    pub fn active_tab(&self) -> Category {
        self.selector.active_category()
    }

    pub fn is_faq_tab(&self) -> bool {
        self.active_tab() == FAQ_TAB
    }

    pub fn select_tab(&mut self, index: usize) {
        if let Some(tab) = self.selector.categories().get(index).copied() {
            self.selector.set_filter(tab);
            self.open_faq = None;
        }
    }

    pub fn next_tab(&mut self) {
        self.selector.next_filter();
        self.open_faq = None;
    }

    pub fn prev_tab(&mut self) {
        self.selector.prev_filter();
        self.open_faq = None;
    }

    pub fn next_entry(&mut self) {
        self.selector.next();
    }

    pub fn prev_entry(&mut self) {
        self.selector.prev();
    }

    /// Expand the focused FAQ entry, or collapse it if already open
    pub fn toggle_faq(&mut self) {
        let Some(entry) = self.selector.current() else {
            return;
        };
        if entry.kind != ResourceKind::Faq {
            return;
        }
        let cursor = self.selector.cursor();
        self.open_faq = if self.open_faq == Some(cursor) {
            None
        } else {
            Some(cursor)
        };
    }
}

impl Default for ResourceTabs {
    fn default() -> Self {
        Self::new(content::resources())
    }
}

/// Treatment process stepper
#[derive(Debug, Clone)]
pub struct ProcessStepper {
    pub selector: Selector<TreatmentStep>,
}

impl ProcessStepper {
    pub fn new(steps: Vec<TreatmentStep>) -> Self {
        Self {
            selector: Selector::new(steps, SelectorConfig::unfiltered(Navigation::Clamped)),
        }
    }

    pub fn current(&self) -> Option<&TreatmentStep> {
        self.selector.current()
    }

    /// 1-based step number under the cursor
    pub fn step_number(&self) -> usize {
        self.selector.cursor() + 1
    }

    pub fn next(&mut self) {
        self.selector.next();
    }

    pub fn prev(&mut self) {
        self.selector.prev();
    }

    /// Jump to a 1-based step number, clamped into range
    pub fn jump_to_step(&mut self, number: usize) {
        let index = isize::try_from(number).unwrap_or(isize::MAX) - 1;
        if let Err(err) = self.selector.jump_to(index) {
            tracing::error!("step jump rejected: {err}");
        }
    }

    pub fn can_go_back(&self) -> bool {
        self.selector.cursor() > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.selector.cursor() + 1 < self.selector.visible_len()
    }
}

impl Default for ProcessStepper {
    fn default() -> Self {
        Self::new(content::treatment_steps())
    }
}

/// Service list with a detail overlay
#[derive(Debug, Clone)]
pub struct ServiceCatalog {
    pub selector: Selector<Service>,
    pub detail_open: bool,
}

impl ServiceCatalog {
    pub fn new(services: Vec<Service>) -> Self {
        Self {
            selector: Selector::new(services, SelectorConfig::unfiltered(Navigation::Clamped)),
            detail_open: false,
        }
    }

    pub fn selected(&self) -> Option<&Service> {
        self.selector.current()
    }

    pub fn next(&mut self) {
        if !self.detail_open {
            self.selector.next();
        }
    }

    pub fn prev(&mut self) {
        if !self.detail_open {
            self.selector.prev();
        }
    }

    pub fn open_detail(&mut self) {
        self.detail_open = self.selected().is_some();
    }

    pub fn close_detail(&mut self) {
        self.detail_open = false;
    }
}

impl Default for ServiceCatalog {
    fn default() -> Self {
        Self::new(content::services())
    }
}
