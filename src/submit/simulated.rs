//! Local submitter that waits and then accepts everything

use std::time::Duration;

use async_trait::async_trait;

use super::traits::Submitter;
use crate::state::{BookingRequest, ContactRequest, Receipt, SubmitError};

/// Accepts every request after a fixed delay. Nothing leaves the process.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Duration::from_secs(2))
    }
}

#[async_trait]
impl Submitter for SimulatedSubmitter {
    async fn submit_booking(&self, request: BookingRequest) -> Result<Receipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        let receipt = Receipt::issue();
        tracing::info!(
            reference = %receipt.reference,
            consultation = ?request.consultation_type,
            "booking request accepted"
        );
        tracing::debug!(
            payload = %serde_json::to_string(&request).unwrap_or_default(),
            "booking payload"
        );
        Ok(receipt)
    }

    async fn submit_contact(&self, request: ContactRequest) -> Result<Receipt, SubmitError> {
        tokio::time::sleep(self.delay).await;
        let receipt = Receipt::issue();
        tracing::info!(
            reference = %receipt.reference,
            subject = %request.subject,
            "contact message accepted"
        );
        Ok(receipt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ConsultationType;
    use tokio::time::Instant;

    fn contact() -> ContactRequest {
        ContactRequest {
            name: "Michael Chen".into(),
            email: "michael@example.ca".into(),
            subject: "Follow-up".into(),
            message: "Booking a second session".into(),
        }
    }

    #[test]
    fn test_default_delay_is_two_seconds() {
        assert_eq!(SimulatedSubmitter::default().delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_zero_delay_completes_immediately() {
        let submitter = SimulatedSubmitter::new(Duration::ZERO);
        let result = tokio_test::block_on(submitter.submit_contact(contact()));
        assert!(result.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_waits_for_delay() {
        let submitter = SimulatedSubmitter::default();
        let start = Instant::now();
        let receipt = submitter.submit_contact(contact()).await.unwrap();
        assert!(start.elapsed() >= Duration::from_secs(2));
        assert!(!receipt.short_reference().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_booking_always_succeeds() {
        let submitter = SimulatedSubmitter::new(Duration::from_millis(500));
        let request = BookingRequest {
            name: "Fatima Khan".into(),
            email: "fatima@example.pk".into(),
            phone: "+92 321 0000000".into(),
            consultation_type: ConsultationType::InPerson,
            preferred_date: None,
            preferred_time: Some("10:00".into()),
            health_concerns: "Allergic reactions".into(),
            message: None,
        };
        let first = submitter.submit_booking(request.clone()).await.unwrap();
        let second = submitter.submit_booking(request).await.unwrap();
        assert_ne!(first.reference, second.reference);
    }
}
