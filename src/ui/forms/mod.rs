//! Form rendering module
//!
//! This module contains UI components for rendering forms:
//! - `field_renderer`: Field, submit button and help text rendering
//! - `booking`: Consultation booking form and success screen
//! - `contact`: Contact details and message form

mod booking;
mod contact;
mod field_renderer;

pub use booking::draw as draw_booking;
pub use contact::draw as draw_contact;
