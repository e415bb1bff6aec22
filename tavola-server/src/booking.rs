//! Slot rules and table allocation
//!
//! What the service enforces on top of payload shape validation: strict
//! date/time formats, the 30-minute booking grid, no slots in the past,
//! day-of-week business hours, and one party per table per slot.

use chrono::{NaiveDateTime, Timelike};
use rand::seq::SliceRandom;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::schedule::{self, DaySchedule};

use crate::utils::time;

/// Validate a requested (date, time) pair against the booking rules.
///
/// Returns the slot as a naive datetime on success. `now` is passed in so
/// the past-check stays testable.
pub fn validate_slot(date: &str, time_str: &str, now: NaiveDateTime) -> AppResult<NaiveDateTime> {
    let date = schedule::parse_date(date)?;
    let slot_time = time::parse_slot_time(time_str)?;

    if slot_time.minute() % schedule::SLOT_MINUTES != 0 {
        return Err(AppError::new(ErrorCode::SlotNotOnGrid));
    }

    let slot = date.and_time(slot_time);
    if slot < now {
        return Err(AppError::new(ErrorCode::SlotInPast));
    }

    let hours = DaySchedule::for_date(date);
    if !hours.is_bookable(slot_time) {
        return Err(AppError::with_message(
            ErrorCode::OutsideBusinessHours,
            format!(
                "Outside business hours ({:02}:00-{:02}:00).",
                hours.open_hour, hours.close_hour
            ),
        ));
    }

    Ok(slot)
}

/// Pick a table for a slot.
///
/// `taken` holds the table numbers already booked for the slot; tables are
/// numbered 1..=total. A random free table spreads parties across the room
/// instead of always filling from table 1.
pub fn allocate_table(taken: &[i64], total: u32) -> AppResult<i64> {
    let free: Vec<i64> = (1..=i64::from(total))
        .filter(|t| !taken.contains(t))
        .collect();
    free.choose(&mut rand::thread_rng())
        .copied()
        .ok_or_else(|| AppError::new(ErrorCode::SlotFullyBooked))
}
