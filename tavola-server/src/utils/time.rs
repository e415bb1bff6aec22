//! Time helpers for the booking API
//!
//! Handlers work with strings off the wire; parsing is strict so malformed
//! input fails loudly instead of booking a surprising slot.

use chrono::{NaiveDateTime, NaiveTime, Utc};
use shared::error::{AppError, AppResult};

/// Parse a slot time string (HH:MM, 24h)
pub fn parse_slot_time(time: &str) -> AppResult<NaiveTime> {
    NaiveTime::parse_from_str(time, "%H:%M")
        .map_err(|_| AppError::validation(format!("Invalid time format: {time}")))
}

/// Current wall-clock instant used for the past-slot check.
///
/// Naive UTC. A viewer far from UTC can be off by up to a day around
/// midnight, so the check is deliberately coarse; the slot grid and
/// business hours are the authoritative constraints.
pub fn now_naive() -> NaiveDateTime {
    Utc::now().naive_utc()
}
