//! Trait abstraction for form submission to enable mocking in tests

use async_trait::async_trait;

use crate::state::{BookingRequest, ContactRequest, Receipt, SubmitError};

/// Sends completed forms somewhere and acknowledges them
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Submitter: Send + Sync {
    /// Send a booking request
    async fn submit_booking(&self, request: BookingRequest) -> Result<Receipt, SubmitError>;

    /// Send a contact message
    async fn submit_contact(&self, request: ContactRequest) -> Result<Receipt, SubmitError>;
}
