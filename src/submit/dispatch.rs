//! Background submission tasks and their results

use std::sync::Arc;

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;

use super::traits::Submitter;
use crate::state::{BookingRequest, ContactRequest, Receipt, SubmitError};

/// Which form a result belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Booking,
    Contact,
}

/// A finished submission, delivered back to the UI loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionEvent {
    pub form: FormKind,
    pub result: Result<Receipt, SubmitError>,
}

/// Spawns submissions on the runtime and collects their results.
///
/// Tasks still running when the dispatcher is dropped are aborted, so a
/// result never arrives for state that no longer exists.
pub struct Dispatcher {
    submitter: Arc<dyn Submitter>,
    tx: UnboundedSender<SubmissionEvent>,
    rx: UnboundedReceiver<SubmissionEvent>,
    tasks: Vec<JoinHandle<()>>,
}

impl Dispatcher {
    pub fn new(submitter: Arc<dyn Submitter>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            submitter,
            tx,
            rx,
            tasks: Vec::new(),
        }
    }

    /// Start sending a booking request
    pub fn send_booking(&mut self, request: BookingRequest) {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.tx.clone();
        tracing::info!("submitting booking request");
        self.spawn(async move {
            let result = submitter.submit_booking(request).await;
            Self::deliver(&tx, FormKind::Booking, result);
        });
    }

    /// Start sending a contact message
    pub fn send_contact(&mut self, request: ContactRequest) {
        let submitter = Arc::clone(&self.submitter);
        let tx = self.tx.clone();
        tracing::info!("submitting contact message");
        self.spawn(async move {
            let result = submitter.submit_contact(request).await;
            Self::deliver(&tx, FormKind::Contact, result);
        });
    }

    fn spawn<F>(&mut self, task: F)
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        self.tasks.retain(|handle| !handle.is_finished());
        self.tasks.push(tokio::spawn(task));
    }

    fn deliver(
        tx: &UnboundedSender<SubmissionEvent>,
        form: FormKind,
        result: Result<Receipt, SubmitError>,
    ) {
        if let Err(err) = &result {
            tracing::warn!(?form, "submission failed: {err}");
        }
        if tx.send(SubmissionEvent { form, result }).is_err() {
            tracing::debug!(?form, "submission result dropped, receiver gone");
        }
    }

    /// Next finished submission, if one is waiting
    pub fn try_recv(&mut self) -> Option<SubmissionEvent> {
        self.rx.try_recv().ok()
    }

    /// Wait for the next finished submission
    #[cfg(test)]
    pub async fn recv(&mut self) -> Option<SubmissionEvent> {
        self.rx.recv().await
    }

    /// Number of submissions still running
    #[cfg(test)]
    pub fn pending(&mut self) -> usize {
        self.tasks.retain(|handle| !handle.is_finished());
        self.tasks.len()
    }

    /// Abort every running submission
    pub fn cancel_all(&mut self) {
        if !self.tasks.is_empty() {
            tracing::debug!(count = self.tasks.len(), "cancelling submissions");
        }
        for handle in self.tasks.drain(..) {
            handle.abort();
        }
    }
}

impl Drop for Dispatcher {
    fn drop(&mut self) {
        self.cancel_all();
    }
}
