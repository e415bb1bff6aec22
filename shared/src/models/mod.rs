//! Data models
//!
//! Shared between the booking service and its clients (via API).
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod reservation;
pub mod subscriber;

// Re-exports
pub use reservation::*;
pub use subscriber::*;
