//! Application state module

mod app_state;
mod forms;
mod sections;
mod selector;
mod slide_state;

pub use app_state::*;
pub use forms::*;
pub use sections::*;
pub use selector::*;
