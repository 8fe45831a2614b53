//! Form state management and form structs

use std::time::{Duration, Instant};

use chrono::NaiveDate;
use serde::Serialize;

use super::field::{FormField, Rule};
use super::submission::{AfterSubmit, Receipt, SubmissionState, SubmitError};
use crate::content::site::TIME_SLOTS;

/// Trait for common form operations
///
/// Field indices run from 0 to `field_count() - 1`. The last index is the
/// submit button row, which has no [`FormField`].
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }

    fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(|f| f.is_multiline)
    }

    /// Returns true if the submit button row is currently active
    fn is_submit_row_active(&self) -> bool {
        self.active_field() + 1 == self.field_count()
    }

    /// Validate every field, recording errors. Returns true when all pass.
    fn validate_all(&mut self) -> bool {
        let mut valid = true;
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field_mut(index) {
                valid &= field.validate();
            }
        }
        valid
    }

    fn first_invalid_field(&self) -> Option<usize> {
        (0..self.field_count()).find(|i| self.get_field(*i).is_some_and(|f| f.error.is_some()))
    }

    fn clear_all(&mut self) {
        for index in 0..self.field_count() {
            if let Some(field) = self.get_field_mut(index) {
                field.clear();
            }
        }
        self.set_active_field(0);
    }
}

/// Result of pressing submit
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAttempt<R> {
    /// Validation passed; the request should be sent
    Started(R),
    /// At least one field failed validation
    Invalid,
    /// A submission is already in flight or showing its result
    Blocked,
}

/// A form that can be sent through the submission state machine
pub trait Submittable: Form {
    type Request;

    fn submission(&self) -> &SubmissionState;
    fn submission_mut(&mut self) -> &mut SubmissionState;

    /// Build the payload from the current field values, if they are complete
    fn request(&self) -> Option<Self::Request>;

    /// Validate and, if valid, move to `Submitting`
    fn submit(&mut self) -> SubmitAttempt<Self::Request> {
        if !self.submission().can_submit() {
            return SubmitAttempt::Blocked;
        }
        if !self.validate_all() {
            if let Some(index) = self.first_invalid_field() {
                self.set_active_field(index);
            }
            return SubmitAttempt::Invalid;
        }
        match self.request() {
            Some(request) => {
                self.submission_mut().begin();
                SubmitAttempt::Started(request)
            }
            None => SubmitAttempt::Invalid,
        }
    }

    /// Apply the submitter's result; a success clears the fields
    fn finish(&mut self, result: Result<Receipt, SubmitError>, now: Instant) {
        let succeeded = result.is_ok();
        if self.submission_mut().complete(result, now) && succeeded {
            self.clear_all();
        }
    }
}

/// Booking consultation type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ConsultationType {
    #[serde(rename = "virtual")]
    Virtual,
    #[serde(rename = "in-person")]
    InPerson,
}

impl ConsultationType {
    pub const OPTIONS: &'static [&'static str] = &["virtual", "in-person"];

    pub fn from_option(option: &str) -> Option<Self> {
        match option {
            "virtual" => Some(Self::Virtual),
            "in-person" => Some(Self::InPerson),
            _ => None,
        }
    }
}

/// Payload of a booking request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub consultation_type: ConsultationType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preferred_time: Option<String>,
    pub health_concerns: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Payload of a contact message
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

fn name_field() -> FormField {
    FormField::text("name", "Full Name", false).with_rule(Rule::Required("Name is required"))
}

fn email_field() -> FormField {
    FormField::text("email", "Email Address", false)
        .with_rule(Rule::Required("Email is required"))
        .with_rule(Rule::Email("Invalid email address"))
}

// Booking Form
#[derive(Debug, Clone)]
pub struct BookingForm {
    pub name: FormField,
    pub email: FormField,
    pub phone: FormField,
    pub consultation_type: FormField,
    pub preferred_date: FormField,
    pub preferred_time: FormField,
    pub health_concerns: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub submission: SubmissionState,
}

impl BookingForm {
    pub const SUBMIT_ROW: usize = 8;

    pub fn new() -> Self {
        Self {
            name: name_field(),
            email: email_field(),
            phone: FormField::text("phone", "Phone Number", false)
                .with_rule(Rule::Required("Phone number is required")),
            consultation_type: FormField::choice(
                "consultation_type",
                "Consultation Type",
                ConsultationType::OPTIONS,
            )
            .with_rule(Rule::Required("Please select consultation type")),
            preferred_date: FormField::text("preferred_date", "Preferred Date (YYYY-MM-DD)", false)
                .with_rule(Rule::Date("Enter the date as YYYY-MM-DD")),
            preferred_time: FormField::choice("preferred_time", "Preferred Time", &TIME_SLOTS),
            health_concerns: FormField::text("health_concerns", "Health Concerns", true)
                .with_rule(Rule::Required("Please describe your health concerns")),
            message: FormField::text("message", "Additional Message", true),
            active_field_index: 0,
            submission: SubmissionState::new(AfterSubmit::Stay),
        }
    }

    /// Leave the success screen with an empty form
    pub fn book_another(&mut self) {
        self.submission.reset();
        self.clear_all();
    }
}

impl Default for BookingForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for BookingForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.phone),
            3 => Some(&self.consultation_type),
            4 => Some(&self.preferred_date),
            5 => Some(&self.preferred_time),
            6 => Some(&self.health_concerns),
            7 => Some(&self.message),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.phone),
            3 => Some(&mut self.consultation_type),
            4 => Some(&mut self.preferred_date),
            5 => Some(&mut self.preferred_time),
            6 => Some(&mut self.health_concerns),
            7 => Some(&mut self.message),
            _ => None,
        }
    }
}

impl Submittable for BookingForm {
    type Request = BookingRequest;

    fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut SubmissionState {
        &mut self.submission
    }

    fn request(&self) -> Option<BookingRequest> {
        let preferred_date = match self.preferred_date.optional_text() {
            Some(date) => Some(NaiveDate::parse_from_str(&date, "%Y-%m-%d").ok()?),
            None => None,
        };
        Some(BookingRequest {
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            phone: self.phone.as_text().trim().to_string(),
            consultation_type: ConsultationType::from_option(self.consultation_type.as_text())?,
            preferred_date,
            preferred_time: self.preferred_time.optional_text(),
            health_concerns: self.health_concerns.as_text().trim().to_string(),
            message: self.message.optional_text(),
        })
    }
}

// Contact Form
#[derive(Debug, Clone)]
pub struct ContactForm {
    pub name: FormField,
    pub email: FormField,
    pub subject: FormField,
    pub message: FormField,
    pub active_field_index: usize,
    pub submission: SubmissionState,
}

impl ContactForm {
    pub const SUBMIT_ROW: usize = 4;

    /// A contact form whose success message clears after `dismiss_after`
    pub fn new(dismiss_after: Duration) -> Self {
        Self {
            name: name_field(),
            email: email_field(),
            subject: FormField::text("subject", "Subject", false)
                .with_rule(Rule::Required("Subject is required")),
            message: FormField::text("message", "Message", true)
                .with_rule(Rule::Required("Message is required")),
            active_field_index: 0,
            submission: SubmissionState::new(AfterSubmit::RevertAfter(dismiss_after)),
        }
    }
}

impl Form for ContactForm {
    fn field_count(&self) -> usize {
        Self::SUBMIT_ROW + 1
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::SUBMIT_ROW);
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.name),
            1 => Some(&self.email),
            2 => Some(&self.subject),
            3 => Some(&self.message),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.name),
            1 => Some(&mut self.email),
            2 => Some(&mut self.subject),
            3 => Some(&mut self.message),
            _ => None,
        }
    }
}

impl Submittable for ContactForm {
    type Request = ContactRequest;

    fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    fn submission_mut(&mut self) -> &mut SubmissionState {
        &mut self.submission
    }

    fn request(&self) -> Option<ContactRequest> {
        Some(ContactRequest {
            name: self.name.as_text().trim().to_string(),
            email: self.email.as_text().trim().to_string(),
            subject: self.subject.as_text().trim().to_string(),
            message: self.message.as_text().trim().to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::SubmissionPhase;

    const DISMISS: Duration = Duration::from_secs(5);

    fn type_into(field: &mut FormField, text: &str) {
        for c in text.chars() {
            field.push_char(c);
        }
    }

    fn filled_booking() -> BookingForm {
        let mut form = BookingForm::new();
        type_into(&mut form.name, "Sarah Ahmed");
        type_into(&mut form.email, "sarah@example.com");
        type_into(&mut form.phone, "+92 300 0000000");
        form.consultation_type.next_choice();
        type_into(&mut form.health_concerns, "Eczema");
        form
    }

    fn filled_contact() -> ContactForm {
        let mut form = ContactForm::new(DISMISS);
        type_into(&mut form.name, "David Wilson");
        type_into(&mut form.email, "david@example.co.uk");
        type_into(&mut form.subject, "Virtual sessions");
        type_into(&mut form.message, "Do you work with UK time zones?");
        form
    }

    mod form_trait {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_next_field_cycles() {
            let mut form = ContactForm::new(DISMISS);
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_submit_row() {
            let mut form = BookingForm::new();
            form.prev_field();
            assert_eq!(form.active_field_index, BookingForm::SUBMIT_ROW);
            assert!(form.is_submit_row_active());
            assert!(form.get_active_field_mut().is_none());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = ContactForm::new(DISMISS);
            form.set_active_field(100);
            assert_eq!(form.active_field_index, ContactForm::SUBMIT_ROW);
        }

        #[test]
        fn test_multiline_fields() {
            let mut form = BookingForm::new();
            form.set_active_field(6);
            assert!(form.is_active_field_multiline());
            form.set_active_field(0);
            assert!(!form.is_active_field_multiline());
        }

        #[test]
        fn test_get_field_returns_correct_fields() {
            let form = ContactForm::new(DISMISS);
            let names: Vec<_> = (0..5)
                .map(|i| form.get_field(i).map(|f| f.name))
                .collect();
            assert_eq!(
                names,
                vec![
                    Some("name"),
                    Some("email"),
                    Some("subject"),
                    Some("message"),
                    None
                ]
            );
        }
    }

    mod booking_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_name_never_submits() {
            let mut form = filled_booking();
            form.name.clear();
            assert_eq!(form.submit(), SubmitAttempt::Invalid);
            assert_eq!(form.submission.phase(), &SubmissionPhase::Idle);
            assert_eq!(form.name.error, Some("Name is required"));
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_blank_form_reports_every_required_field() {
            let mut form = BookingForm::new();
            assert_eq!(form.submit(), SubmitAttempt::Invalid);
            assert_eq!(form.email.error, Some("Email is required"));
            assert_eq!(form.phone.error, Some("Phone number is required"));
            assert_eq!(
                form.consultation_type.error,
                Some("Please select consultation type")
            );
            assert_eq!(
                form.health_concerns.error,
                Some("Please describe your health concerns")
            );
            assert_eq!(form.message.error, None);
            assert_eq!(form.preferred_time.error, None);
        }

        #[test]
        fn test_bad_email_focuses_email() {
            let mut form = filled_booking();
            form.email.clear();
            type_into(&mut form.email, "sarah");
            assert_eq!(form.submit(), SubmitAttempt::Invalid);
            assert_eq!(form.email.error, Some("Invalid email address"));
            assert_eq!(form.active_field_index, 1);
        }

        #[test]
        fn test_bad_date_is_rejected() {
            let mut form = filled_booking();
            type_into(&mut form.preferred_date, "next week");
            assert_eq!(form.submit(), SubmitAttempt::Invalid);
            assert_eq!(form.active_field_index, 4);
        }

        #[test]
        fn test_valid_submit_builds_request() {
            let mut form = filled_booking();
            type_into(&mut form.preferred_date, "2024-03-01");
            form.preferred_time.next_choice();
            let SubmitAttempt::Started(request) = form.submit() else {
                panic!("expected submission to start");
            };
            assert_eq!(request.name, "Sarah Ahmed");
            assert_eq!(request.consultation_type, ConsultationType::Virtual);
            assert_eq!(request.preferred_date, NaiveDate::from_ymd_opt(2024, 3, 1));
            assert_eq!(request.preferred_time.as_deref(), Some("09:00"));
            assert_eq!(request.message, None);
            assert!(form.submission.is_submitting());
        }

        #[test]
        fn test_request_serializes_camel_case() {
            let mut form = filled_booking();
            form.consultation_type.next_choice();
            let request = form.request().unwrap();
            let json = serde_json::to_value(&request).unwrap();
            assert_eq!(json["consultationType"], "in-person");
            assert_eq!(json["healthConcerns"], "Eczema");
            assert!(json.get("message").is_none());
            assert!(json.get("preferredDate").is_none());
        }

        #[test]
        fn test_submit_blocked_while_submitting() {
            let mut form = filled_booking();
            assert!(matches!(form.submit(), SubmitAttempt::Started(_)));
            assert_eq!(form.submit(), SubmitAttempt::Blocked);
        }

        #[test]
        fn test_success_clears_and_stays() {
            let now = Instant::now();
            let mut form = filled_booking();
            form.submit();
            form.finish(Ok(Receipt::issue()), now);
            assert!(form.submission.is_submitted());
            assert_eq!(form.name.as_text(), "");
            assert_eq!(form.consultation_type.as_text(), "");
            assert!(!form.submission.tick(now + Duration::from_secs(60)));
            assert_eq!(form.submit(), SubmitAttempt::Blocked);
        }

        #[test]
        fn test_book_another_returns_to_idle() {
            let now = Instant::now();
            let mut form = filled_booking();
            form.submit();
            form.finish(Ok(Receipt::issue()), now);
            form.book_another();
            assert_eq!(form.submission.phase(), &SubmissionPhase::Idle);
            assert!(form.submission.can_submit());
        }

        #[test]
        fn test_failure_keeps_values() {
            let now = Instant::now();
            let mut form = filled_booking();
            form.submit();
            form.finish(Err(SubmitError::Rejected("slot taken".into())), now);
            assert!(matches!(
                form.submission.phase(),
                SubmissionPhase::Failed(_)
            ));
            assert_eq!(form.name.as_text(), "Sarah Ahmed");
            assert!(matches!(form.submit(), SubmitAttempt::Started(_)));
        }
    }

    mod contact_form {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_full_cycle_reverts_after_timeout() {
            let now = Instant::now();
            let mut form = filled_contact();
            assert!(form.submission.can_submit());

            let SubmitAttempt::Started(request) = form.submit() else {
                panic!("expected submission to start");
            };
            assert_eq!(request.subject, "Virtual sessions");
            assert_eq!(form.submission.phase(), &SubmissionPhase::Submitting);
            assert!(!form.submission.can_submit());
            assert_eq!(form.submit(), SubmitAttempt::Blocked);

            let done = now + Duration::from_secs(2);
            form.finish(Ok(Receipt::issue()), done);
            assert_eq!(form.submission.phase(), &SubmissionPhase::Submitted);

            form.submission.tick(done + Duration::from_secs(4));
            assert_eq!(form.submission.phase(), &SubmissionPhase::Submitted);

            form.submission.tick(done + DISMISS);
            assert_eq!(form.submission.phase(), &SubmissionPhase::Idle);
            assert!(form.submission.can_submit());
        }

        #[test]
        fn test_missing_message() {
            let mut form = filled_contact();
            form.message.clear();
            assert_eq!(form.submit(), SubmitAttempt::Invalid);
            assert_eq!(form.message.error, Some("Message is required"));
            assert_eq!(form.active_field_index, 3);
        }

        #[test]
        fn test_editing_clears_error() {
            let mut form = ContactForm::new(DISMISS);
            form.submit();
            assert_eq!(form.subject.error, Some("Subject is required"));
            form.subject.push_char('H');
            assert_eq!(form.subject.error, None);
        }
    }
}
