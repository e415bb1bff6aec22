//! Reservation form controller and booking submission
//!
//! Owns the form state machine: the selected date drives the offered slot
//! list, and a single in-flight submission gates the submit control. The
//! submitting flag is released on every exit path, so the form is always
//! interactable again after an attempt settles.

use chrono::NaiveDate;
use shared::{ReservationConfirmation, schedule};

use crate::error::{ClientError, FALLBACK_FAILURE_MESSAGE};
use crate::http::HttpClient;
use crate::validate::{self, ReservationDraft, ValidationFailure};

/// Lifecycle of one reservation form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Succeeded,
    Failed,
}

/// Outcome of one submit attempt
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// The service confirmed the booking
    Confirmed(ReservationConfirmation),
    /// The draft failed client-side validation; nothing was sent
    Invalid(ValidationFailure),
    /// The service (or the transport) reported a failure
    Rejected { message: String },
    /// A submission is already in flight; this attempt was dropped
    NotReady,
}

impl SubmitOutcome {
    /// Alert-style text for the user
    pub fn user_message(&self) -> String {
        match self {
            Self::Confirmed(conf) => format!(
                "Reservation confirmed! Table {} (ID {})",
                conf.table_number, conf.id
            ),
            Self::Invalid(_) => "Please check your inputs.".to_string(),
            Self::Rejected { message } => message.clone(),
            Self::NotReady => "A booking is already in progress.".to_string(),
        }
    }
}

/// Reservation form controller
///
/// Single owner of the draft values, the selected date, and the submitting
/// flag; everything else reads through accessors.
#[derive(Debug, Clone, Default)]
pub struct ReservationForm {
    draft: ReservationDraft,
    phase: FormPhase,
}

impl ReservationForm {
    pub fn new() -> Self {
        Self::default()
    }

    // ========== Field setters ==========

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.draft.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.draft.email = email.into();
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.draft.phone = phone.into();
    }

    pub fn set_party_size(&mut self, party_size: impl Into<String>) {
        self.draft.party_size = party_size.into();
    }

    pub fn set_special_requests(&mut self, text: impl Into<String>) {
        self.draft.special_requests = text.into();
    }

    /// Change the selected date.
    ///
    /// Any previously chosen time is cleared: it belonged to the old date's
    /// slot set and must be re-picked from the new one.
    pub fn set_date(&mut self, date: impl Into<String>) {
        self.draft.date = date.into();
        self.draft.time.clear();
    }

    // ========== Availability ==========

    /// Selected date, if the current date text parses as a calendar date
    pub fn selected_date(&self) -> Option<NaiveDate> {
        schedule::parse_date(&self.draft.date).ok()
    }

    /// Slots offered for the selected date; empty when no date is selected
    pub fn available_slots(&self) -> Vec<String> {
        self.selected_date()
            .map(schedule::slots_for_date)
            .unwrap_or_default()
    }

    /// Whether the time control is enabled (a date has been selected)
    pub fn time_enabled(&self) -> bool {
        self.selected_date().is_some()
    }

    /// Choose a time slot for the selected date.
    ///
    /// Returns false (and leaves the selection unchanged) when no date is
    /// selected or the slot is not offered for it.
    pub fn select_time(&mut self, time: &str) -> bool {
        if self.available_slots().iter().any(|s| s == time) {
            self.draft.time = time.to_string();
            true
        } else {
            false
        }
    }

    // ========== State ==========

    pub fn draft(&self) -> &ReservationDraft {
        &self.draft
    }

    pub fn time(&self) -> &str {
        &self.draft.time
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == FormPhase::Submitting
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_submitting() && self.selected_date().is_some()
    }

    // ========== Submission ==========

    /// Submit the form.
    ///
    /// Validates the draft, sends it to the booking service, and interprets
    /// the outcome. No retry is attempted. Fields are cleared only on a
    /// confirmed booking; every other path keeps them for the user to fix
    /// and resubmit.
    pub async fn submit(&mut self, client: &HttpClient) -> SubmitOutcome {
        if self.is_submitting() {
            return SubmitOutcome::NotReady;
        }

        self.phase = FormPhase::Validating;
        let payload = match validate::validate(&self.draft) {
            Ok(payload) => payload,
            Err(failure) => {
                tracing::debug!(%failure, "reservation draft failed validation");
                self.phase = FormPhase::Failed;
                return SubmitOutcome::Invalid(failure);
            }
        };

        self.phase = FormPhase::Submitting;
        let result = client.create_reservation(&payload).await;

        // every arm leaves Submitting before the outcome is reported
        match result {
            Ok(confirmation) => {
                self.draft = ReservationDraft::default();
                self.phase = FormPhase::Succeeded;
                SubmitOutcome::Confirmed(confirmation)
            }
            Err(ClientError::Service { message }) => {
                self.phase = FormPhase::Failed;
                SubmitOutcome::Rejected { message }
            }
            Err(err) => {
                tracing::warn!(error = %err, "reservation submission failed in transport");
                self.phase = FormPhase::Failed;
                SubmitOutcome::Rejected {
                    message: FALLBACK_FAILURE_MESSAGE.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_date_means_no_slots() {
        let form = ReservationForm::new();
        assert!(form.available_slots().is_empty());
        assert!(!form.time_enabled());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_sunday_slot_list() {
        let mut form = ReservationForm::new();
        form.set_date("2025-03-09");
        let slots = form.available_slots();
        assert_eq!(slots.len(), 9);
        assert_eq!(slots.first().map(String::as_str), Some("17:00"));
        assert_eq!(slots.last().map(String::as_str), Some("21:00"));
    }

    #[test]
    fn test_date_change_clears_chosen_time() {
        let mut form = ReservationForm::new();
        form.set_date("2025-03-12");
        assert!(form.select_time("22:30"));
        assert_eq!(form.time(), "22:30");

        // 22:30 does not exist on a Sunday; it must not survive the change
        form.set_date("2025-03-09");
        assert_eq!(form.time(), "");
        assert!(!form.select_time("22:30"));
        assert!(form.select_time("20:30"));
    }

    #[test]
    fn test_select_time_requires_date() {
        let mut form = ReservationForm::new();
        assert!(!form.select_time("19:00"));
        assert_eq!(form.time(), "");
    }

    #[test]
    fn test_unparseable_date_disables_time_control() {
        let mut form = ReservationForm::new();
        form.set_date("soonish");
        assert!(!form.time_enabled());
        assert!(form.available_slots().is_empty());
        assert!(!form.can_submit());
    }

    #[test]
    fn test_select_time_rejects_off_grid_values() {
        let mut form = ReservationForm::new();
        form.set_date("2025-03-12");
        assert!(!form.select_time("19:15"));
        assert!(!form.select_time("16:00"));
        assert!(form.select_time("23:00"));
    }

    #[test]
    fn test_user_messages() {
        let confirmed = SubmitOutcome::Confirmed(ReservationConfirmation {
            id: 42,
            table_number: 7,
            status: None,
            message: None,
        });
        assert_eq!(
            confirmed.user_message(),
            "Reservation confirmed! Table 7 (ID 42)"
        );

        let invalid = SubmitOutcome::Invalid(ValidationFailure::default());
        assert_eq!(invalid.user_message(), "Please check your inputs.");

        let rejected = SubmitOutcome::Rejected {
            message: "Fully booked".to_string(),
        };
        assert_eq!(rejected.user_message(), "Fully booked");
    }
}
