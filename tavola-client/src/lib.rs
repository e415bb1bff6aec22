//! Tavola Client - reservation client for the booking service
//!
//! Hosts the reservation form flow: slot availability for a chosen date,
//! client-side validation of the reservation payload, and submission to the
//! booking API with alert-style outcome reporting.

pub mod config;
pub mod error;
pub mod form;
pub mod http;
pub mod validate;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult, FALLBACK_FAILURE_MESSAGE};
pub use form::{FormPhase, ReservationForm, SubmitOutcome};
pub use http::HttpClient;
pub use validate::{FieldIssue, ReservationDraft, ValidationFailure};

// Re-export shared types for convenience
pub use shared::{NewsletterSignup, Reservation, ReservationConfirmation, ReservationCreate};
