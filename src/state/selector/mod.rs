//! Filtered rotating selection
//!
//! A [`Selector`] owns a static item collection, narrows it by a [`Category`]
//! and keeps a cursor into the narrowed list. Carousel, tab and stepper views
//! are all configurations of the same selector.

mod controller;
mod cursor;
mod filter;

pub use controller::{Selector, SelectorConfig};
pub use cursor::Navigation;
pub use filter::{Category, MatchMode, SelectorItem};
