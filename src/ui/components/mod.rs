//! Reusable UI components

mod button;
mod overlay;

pub use button::{render_button, render_menu_button, BUTTON_HEIGHT};
pub use overlay::render_overlay;
