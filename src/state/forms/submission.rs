//! Submission lifecycle shared by the booking and contact forms

use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Acknowledgement of an accepted submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Receipt {
    pub reference: Uuid,
    pub submitted_at: DateTime<Utc>,
}

impl Receipt {
    /// A fresh receipt stamped with the current time
    pub fn issue() -> Self {
        Self {
            reference: Uuid::new_v4(),
            submitted_at: Utc::now(),
        }
    }

    /// First block of the reference, for display
    pub fn short_reference(&self) -> String {
        self.reference.simple().to_string()[..8].to_uppercase()
    }
}

/// Why a submission did not go through
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("submission rejected: {0}")]
    Rejected(String),
    #[error("submission service unavailable: {0}")]
    Unavailable(String),
}

/// Where a form is in its submit cycle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    Submitting,
    Submitted,
    /// Last attempt failed; the form can be submitted again
    Failed(String),
}

/// What happens once a submission succeeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AfterSubmit {
    /// Stay on the success screen until reset
    Stay,
    /// Return to idle after the given delay
    RevertAfter(Duration),
}

/// Submission state machine: `Idle -> Submitting -> Submitted`, plus `Failed`.
///
/// The revert deadline is checked by [`SubmissionState::tick`], so nothing
/// outlives the state itself.
#[derive(Debug, Clone)]
pub struct SubmissionState {
    phase: SubmissionPhase,
    after_submit: AfterSubmit,
    receipt: Option<Receipt>,
    revert_at: Option<Instant>,
}

impl SubmissionState {
    pub fn new(after_submit: AfterSubmit) -> Self {
        Self {
            phase: SubmissionPhase::Idle,
            after_submit,
            receipt: None,
            revert_at: None,
        }
    }

    pub fn phase(&self) -> &SubmissionPhase {
        &self.phase
    }

    pub fn receipt(&self) -> Option<&Receipt> {
        self.receipt.as_ref()
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == SubmissionPhase::Submitting
    }

    pub fn is_submitted(&self) -> bool {
        self.phase == SubmissionPhase::Submitted
    }

    /// Submit control is enabled only from `Idle` or `Failed`
    pub fn can_submit(&self) -> bool {
        matches!(
            self.phase,
            SubmissionPhase::Idle | SubmissionPhase::Failed(_)
        )
    }

    /// Enter `Submitting`. Returns false if a submit is not allowed now.
    pub fn begin(&mut self) -> bool {
        if !self.can_submit() {
            return false;
        }
        self.phase = SubmissionPhase::Submitting;
        self.receipt = None;
        self.revert_at = None;
        true
    }

    /// Apply the submitter's result. Ignored unless `Submitting`.
    ///
    /// Returns true when the result was applied.
    pub fn complete(&mut self, result: Result<Receipt, SubmitError>, now: Instant) -> bool {
        if !self.is_submitting() {
            return false;
        }
        match result {
            Ok(receipt) => {
                self.phase = SubmissionPhase::Submitted;
                self.receipt = Some(receipt);
                self.revert_at = match self.after_submit {
                    AfterSubmit::Stay => None,
                    // An unrepresentable deadline never fires
                    AfterSubmit::RevertAfter(delay) => now.checked_add(delay),
                };
            }
            Err(err) => {
                self.phase = SubmissionPhase::Failed(err.to_string());
            }
        }
        true
    }

    /// Advance timers. Returns true if the phase changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.revert_at {
            Some(deadline) if self.is_submitted() && now >= deadline => {
                self.reset();
                true
            }
            _ => false,
        }
    }

    /// Back to `Idle`, dropping any receipt and deadline
    pub fn reset(&mut self) {
        self.phase = SubmissionPhase::Idle;
        self.receipt = None;
        self.revert_at = None;
    }
}
