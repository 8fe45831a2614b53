//! Form submission transport
//!
//! Forms hand their payload to a [`Submitter`]. The [`Dispatcher`] runs each
//! submission as a background task and reports results back to the UI loop.

mod dispatch;
mod simulated;
mod traits;

pub use dispatch::{Dispatcher, FormKind, SubmissionEvent};
pub use simulated::SimulatedSubmitter;
pub use traits::Submitter;

#[cfg(test)]
pub use traits::MockSubmitter;
