//! Reservation Model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Status assigned to every stored reservation
pub const STATUS_CONFIRMED: &str = "confirmed";

/// Reservation entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Reservation {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub party_size: i64,
    /// Calendar date, YYYY-MM-DD
    pub date: String,
    /// Slot start, HH:MM (24h)
    pub time: String,
    pub special_requests: Option<String>,
    pub table_number: i64,
    pub status: String,
    pub created_at: i64,
}

/// Create reservation payload
///
/// Field constraints mirror what the booking form promises: short
/// non-empty name, well-formed email, party of 1–12, and a date/time pair.
/// The slot itself (grid, business hours) is checked separately against
/// [`crate::schedule`].
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 2, max = 80))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(range(min = 1, max = 12))]
    pub party_size: i64,
    #[validate(length(min = 1))]
    pub date: String,
    #[validate(length(min = 1))]
    pub time: String,
    pub special_requests: Option<String>,
}

/// Confirmation returned when a reservation is created
///
/// `id` and `table_number` are the contract; `status` and `message` are
/// extra context the service includes but clients must not depend on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationConfirmation {
    pub id: i64,
    pub table_number: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}
