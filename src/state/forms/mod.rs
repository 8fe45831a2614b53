//! Form domain layer
//!
//! Field values and validation, the booking and contact forms, and the
//! submission state machine they share.

mod field;
mod form_state;
mod submission;

pub use field::{FormField, Rule};
pub use form_state::{
    BookingForm, BookingRequest, ContactForm, ContactRequest, Form, SubmitAttempt, Submittable,
};
#[cfg(test)]
pub use form_state::ConsultationType;
pub use submission::{Receipt, SubmissionPhase, SubmissionState, SubmitError};
#[cfg(test)]
pub use submission::AfterSubmit;
