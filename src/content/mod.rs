//! Static site content
//!
//! Everything here is created once and never mutated. Collections are handed
//! to selectors by value at startup.

mod process;
mod resources;
mod services;
pub mod site;
mod testimonials;

pub use process::{treatment_steps, TreatmentStep};
pub use resources::{
    resources, tab_title, ResourceEntry, ResourceKind, BIOGEOMETRY_TAB, FAQ_TAB, RESOURCE_TABS,
};
#[cfg(test)]
pub use resources::ARTICLES_TAB;
pub use services::{services, Service};
pub use testimonials::{filter_label, testimonials, Testimonial, CONDITION_FILTERS};
