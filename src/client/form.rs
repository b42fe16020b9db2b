//! # Booking form state machine
//!
//! The form moves through four named states:
//!
//! ```text
//! Idle -> Submitting -> Succeeded
//!                    -> Failed -> (editable again, resubmission allowed)
//! ```
//!
//! The transition out of `Idle` is guarded by a local required-field check;
//! a guard failure sets an inline error without any network call.

use super::gateway::BookingGateway;
use crate::api::booking::BookingSubmission;

/// Inline error shown when the required-field guard rejects a submit
pub const REQUIRED_FIELDS_ERROR: &str = "Please fill in all required fields";

/// Generic error shown when the submission fails on the wire
pub const SUBMIT_FAILED_ERROR: &str = "Failed to submit booking. Please try again.";

/// Confirmation copy rendered in place of the form after success
pub const CONFIRMATION_MESSAGE: &str =
    "Your booking has been successfully submitted. We'll send you a confirmation email shortly.";

// Placeholder stay parameters. These would come from a date picker and a
// guest selector in a real app; the upstream flow hardcodes them and the
// booking endpoint does not care.
const PLACEHOLDER_CHECK_IN: &str = "2024-08-24";
const PLACEHOLDER_CHECK_OUT: &str = "2024-08-27";
const PLACEHOLDER_GUESTS: i32 = 2;

/// Editable field values, one per input of the form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: String,
    pub card_number: String,
    pub expiration_date: String,
    pub cvv: String,
    pub billing_address: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

/// The four states of the form machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormStatus {
    /// Editable, nothing in flight
    Idle,
    /// Submission in flight, form locked
    Submitting,
    /// Submission acknowledged, confirmation replaces the form
    Succeeded,
    /// Last submission failed, field values retained, editable again
    Failed,
}

/// Client-local booking form state
///
/// Created on mount, mutated on every keystroke through [`fields_mut`],
/// discarded on navigation away.
///
/// [`fields_mut`]: BookingForm::fields_mut
#[derive(Debug)]
pub struct BookingForm {
    property_id: Option<i32>,
    fields: FormFields,
    status: FormStatus,
    error: Option<String>,
}

impl BookingForm {
    /// Creates an idle form for a property; `None` falls back to property 1
    /// when the payload is built, matching the upstream default
    pub fn new(property_id: Option<i32>) -> Self {
        BookingForm {
            property_id,
            fields: FormFields::default(),
            status: FormStatus::Idle,
            error: None,
        }
    }

    pub fn status(&self) -> FormStatus {
        self.status
    }

    /// Inline error message, if any
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    /// Mutable access for keystroke updates; only meaningful while editable
    pub fn fields_mut(&mut self) -> &mut FormFields {
        &mut self.fields
    }

    /// Whether the form currently accepts edits and submissions
    pub fn is_editable(&self) -> bool {
        matches!(self.status, FormStatus::Idle | FormStatus::Failed)
    }

    fn required_fields_present(&self) -> bool {
        !self.fields.first_name.is_empty()
            && !self.fields.last_name.is_empty()
            && !self.fields.email.is_empty()
            && !self.fields.phone_number.is_empty()
    }

    /// Builds the wire payload from the current field values
    ///
    /// Check-in, check-out and guest count are fixed placeholders, and the
    /// billing address fields are folded into the free-text special requests.
    /// Reproduced as-is from the upstream flow.
    pub fn payload(&self) -> BookingSubmission {
        BookingSubmission {
            property_id: Some(self.property_id.unwrap_or(1)),
            check_in: Some(PLACEHOLDER_CHECK_IN.to_string()),
            check_out: Some(PLACEHOLDER_CHECK_OUT.to_string()),
            guests: Some(PLACEHOLDER_GUESTS),
            first_name: Some(self.fields.first_name.clone()),
            last_name: Some(self.fields.last_name.clone()),
            email: Some(self.fields.email.clone()),
            phone: Some(self.fields.phone_number.clone()),
            special_requests: Some(format!(
                "{}, {}, {}, {}, {}",
                self.fields.billing_address,
                self.fields.city,
                self.fields.state,
                self.fields.zip_code,
                self.fields.country
            )),
        }
    }

    /// Attempts a submission
    ///
    /// - No-op while `Submitting` or after `Succeeded`
    /// - Guard failure: inline error, no network call, form stays editable
    /// - Success: fields cleared, state `Succeeded`
    /// - Failure: generic error, fields retained, state `Failed`
    pub async fn submit(&mut self, gateway: &dyn BookingGateway) {
        if !self.is_editable() {
            return;
        }

        if !self.required_fields_present() {
            self.error = Some(REQUIRED_FIELDS_ERROR.to_string());
            return;
        }

        self.status = FormStatus::Submitting;
        self.error = None;

        match gateway.submit_booking(&self.payload()).await {
            Ok(ack) => {
                tracing::info!(message = %ack.message, "Booking submitted");
                self.fields = FormFields::default();
                self.status = FormStatus::Succeeded;
            }
            Err(error) => {
                tracing::error!(error = %error, "Error submitting booking");
                self.error = Some(SUBMIT_FAILED_ERROR.to_string());
                self.status = FormStatus::Failed;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::gateway::BookingAck;
    use anyhow::{anyhow, Result};
    use async_trait::async_trait;
    use crate::db::{Property, Review};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Stub gateway recording submissions; fails when `fail` is set
    #[derive(Default)]
    struct StubGateway {
        fail: bool,
        submissions: AtomicUsize,
    }

    #[async_trait]
    impl BookingGateway for StubGateway {
        async fn fetch_property(&self, _id: i32) -> Result<Property> {
            Err(anyhow!("not used"))
        }

        async fn fetch_reviews(&self, _property_id: i32) -> Result<Vec<Review>> {
            Err(anyhow!("not used"))
        }

        async fn submit_booking(&self, payload: &BookingSubmission) -> Result<BookingAck> {
            self.submissions.fetch_add(1, Ordering::SeqCst);
            assert!(payload.has_required_fields());
            if self.fail {
                Err(anyhow!("connection refused"))
            } else {
                Ok(BookingAck {
                    message: "Booking submitted successfully".to_string(),
                })
            }
        }
    }

    fn filled_form() -> BookingForm {
        let mut form = BookingForm::new(Some(4));
        let fields = form.fields_mut();
        fields.first_name = "Ada".to_string();
        fields.last_name = "Lovelace".to_string();
        fields.email = "ada@example.com".to_string();
        fields.phone_number = "+44 20 7946 0000".to_string();
        fields.billing_address = "12 St James's Square".to_string();
        fields.city = "London".to_string();
        fields.state = "Greater London".to_string();
        fields.zip_code = "SW1Y 4JH".to_string();
        fields.country = "UK".to_string();
        form
    }

    #[tokio::test]
    async fn guard_failure_sets_error_without_network_call() {
        let gateway = StubGateway::default();
        let mut form = filled_form();
        form.fields_mut().first_name.clear();

        form.submit(&gateway).await;

        assert_eq!(form.status(), FormStatus::Idle);
        assert_eq!(form.error(), Some(REQUIRED_FIELDS_ERROR));
        assert_eq!(gateway.submissions.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_submit_clears_fields() {
        let gateway = StubGateway::default();
        let mut form = filled_form();

        form.submit(&gateway).await;

        assert_eq!(form.status(), FormStatus::Succeeded);
        assert_eq!(form.error(), None);
        assert_eq!(*form.fields(), FormFields::default());
        assert!(!form.is_editable());
        assert_eq!(gateway.submissions.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn failed_submit_retains_fields_and_allows_resubmission() {
        let failing = StubGateway {
            fail: true,
            ..StubGateway::default()
        };
        let mut form = filled_form();

        form.submit(&failing).await;

        assert_eq!(form.status(), FormStatus::Failed);
        assert_eq!(form.error(), Some(SUBMIT_FAILED_ERROR));
        assert_eq!(form.fields().first_name, "Ada");
        assert!(form.is_editable());

        // Same form, working transport: resubmission succeeds
        let working = StubGateway::default();
        form.submit(&working).await;
        assert_eq!(form.status(), FormStatus::Succeeded);
    }

    #[tokio::test]
    async fn submit_is_a_no_op_after_success() {
        let gateway = StubGateway::default();
        let mut form = filled_form();

        form.submit(&gateway).await;
        form.submit(&gateway).await;

        assert_eq!(gateway.submissions.load(Ordering::SeqCst), 1);
        assert_eq!(form.status(), FormStatus::Succeeded);
    }

    #[test]
    fn payload_synthesizes_placeholder_stay_and_folds_billing_address() {
        let form = filled_form();
        let payload = form.payload();

        assert_eq!(payload.property_id, Some(4));
        assert_eq!(payload.check_in.as_deref(), Some("2024-08-24"));
        assert_eq!(payload.check_out.as_deref(), Some("2024-08-27"));
        assert_eq!(payload.guests, Some(2));
        assert_eq!(
            payload.special_requests.as_deref(),
            Some("12 St James's Square, London, Greater London, SW1Y 4JH, UK")
        );
    }

    #[test]
    fn payload_defaults_to_property_one() {
        let form = BookingForm::new(None);
        assert_eq!(form.payload().property_id, Some(1));
    }
}
