//! Shared types for the Tavola reservation system
//!
//! Common types used across the booking service and the reservation client:
//! data models, the business-hours schedule, error types, and utilities.

pub mod error;
pub mod models;
pub mod schedule;
pub mod util;

// Re-exports
pub use serde::{Deserialize, Serialize};

pub use error::{AppError, AppResult, ErrorBody, ErrorCode};
pub use models::{
    NewsletterSignup, Reservation, ReservationConfirmation, ReservationCreate, SignupReceipt,
};
pub use schedule::DaySchedule;
