//! Business-hours schedule and bookable time slots.
//!
//! Dinner service opens at 17:00 every day. Closing is 21:00 on Sundays and
//! 23:00 the rest of the week. Bookings are taken on a 30-minute grid; the
//! closing hour itself is the last bookable slot (there is no half-past-
//! closing slot).

use chrono::{Datelike, NaiveDate, NaiveTime, Timelike, Weekday};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

/// Opening hour, every day (24h clock).
pub const OPEN_HOUR: u32 = 17;
/// Closing hour on Sundays.
pub const SUNDAY_CLOSE_HOUR: u32 = 21;
/// Closing hour Monday through Saturday.
pub const WEEKDAY_CLOSE_HOUR: u32 = 23;
/// Slot granularity in minutes.
pub const SLOT_MINUTES: u32 = 30;

/// Parse a calendar date string (YYYY-MM-DD).
pub fn parse_date(date: &str) -> AppResult<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("Invalid date format: {date}")))
}

/// Day of week for a calendar date, as 0 = Sunday … 6 = Saturday.
///
/// Operates on the plain calendar date under Gregorian rules; no time zone
/// is consulted. A date-only string therefore maps to the same weekday for
/// every viewer, unlike local-midnight parsing which can shift the apparent
/// day near UTC boundaries.
pub fn day_of_week(date: NaiveDate) -> u32 {
    date.weekday().num_days_from_sunday()
}

/// Business hours for a single day.
///
/// Derived per date, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DaySchedule {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl DaySchedule {
    /// Schedule for a day of the week.
    pub fn for_day(day: Weekday) -> Self {
        let close_hour = if day == Weekday::Sun {
            SUNDAY_CLOSE_HOUR
        } else {
            WEEKDAY_CLOSE_HOUR
        };
        Self {
            open_hour: OPEN_HOUR,
            close_hour,
        }
    }

    /// Schedule for a calendar date.
    pub fn for_date(date: NaiveDate) -> Self {
        Self::for_day(date.weekday())
    }

    /// Ordered half-hour slots from opening up to and including the closing
    /// hour, formatted as zero-padded `HH:MM`.
    pub fn slots(&self) -> Vec<String> {
        let mut slots = Vec::new();
        for hour in self.open_hour..=self.close_hour {
            for minute in (0..60).step_by(SLOT_MINUTES as usize) {
                // the closing hour only offers the :00 slot
                if hour == self.close_hour && minute > 0 {
                    break;
                }
                slots.push(format!("{hour:02}:{minute:02}"));
            }
        }
        slots
    }

    /// Whether `time` is a bookable slot under this schedule.
    pub fn is_bookable(&self, time: NaiveTime) -> bool {
        if time.second() != 0 || time.minute() % SLOT_MINUTES != 0 {
            return false;
        }
        if time.hour() < self.open_hour {
            return false;
        }
        time.hour() < self.close_hour || (time.hour() == self.close_hour && time.minute() == 0)
    }
}

/// Bookable slots for a calendar date.
pub fn slots_for_date(date: NaiveDate) -> Vec<String> {
    DaySchedule::for_date(date).slots()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(s: &str) -> NaiveDate {
        parse_date(s).unwrap()
    }

    #[test]
    fn test_day_of_week_mapping() {
        // 2025-03-09 is a Sunday, 2025-03-12 a Wednesday
        assert_eq!(day_of_week(date("2025-03-09")), 0);
        assert_eq!(day_of_week(date("2025-03-10")), 1);
        assert_eq!(day_of_week(date("2025-03-12")), 3);
        assert_eq!(day_of_week(date("2025-03-15")), 6);
    }

    #[test]
    fn test_parse_date_rejects_garbage() {
        assert!(parse_date("2025-13-01").is_err());
        assert!(parse_date("03/12/2025").is_err());
        assert!(parse_date("").is_err());
    }

    #[test]
    fn test_sunday_slots_exact() {
        let slots = slots_for_date(date("2025-03-09"));
        assert_eq!(
            slots,
            vec![
                "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30", "21:00"
            ]
        );
    }

    #[test]
    fn test_wednesday_slots_shape() {
        let slots = slots_for_date(date("2025-03-12"));
        assert_eq!(slots.len(), 13);
        assert_eq!(slots.first().map(String::as_str), Some("17:00"));
        assert_eq!(slots.last().map(String::as_str), Some("23:00"));
        // no half-past-closing slot
        assert!(!slots.contains(&"23:30".to_string()));
    }

    #[test]
    fn test_slots_strictly_increase_by_thirty_minutes() {
        for day in [
            Weekday::Sun,
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
        ] {
            let slots = DaySchedule::for_day(day).slots();
            assert_eq!(slots[0], "17:00");
            let mut prev = NaiveTime::parse_from_str(&slots[0], "%H:%M").unwrap();
            for slot in &slots[1..] {
                let t = NaiveTime::parse_from_str(slot, "%H:%M").unwrap();
                assert_eq!(
                    t - prev,
                    chrono::Duration::minutes(SLOT_MINUTES as i64),
                    "gap before {slot} on {day:?}"
                );
                prev = t;
            }
        }
    }

    #[test]
    fn test_is_bookable_boundaries() {
        let sunday = DaySchedule::for_date(date("2025-03-09"));
        assert!(sunday.is_bookable(NaiveTime::from_hms_opt(17, 0, 0).unwrap()));
        assert!(sunday.is_bookable(NaiveTime::from_hms_opt(21, 0, 0).unwrap()));
        assert!(!sunday.is_bookable(NaiveTime::from_hms_opt(21, 30, 0).unwrap()));
        assert!(!sunday.is_bookable(NaiveTime::from_hms_opt(16, 30, 0).unwrap()));
        assert!(!sunday.is_bookable(NaiveTime::from_hms_opt(19, 15, 0).unwrap()));

        let wednesday = DaySchedule::for_date(date("2025-03-12"));
        assert!(wednesday.is_bookable(NaiveTime::from_hms_opt(23, 0, 0).unwrap()));
        assert!(!wednesday.is_bookable(NaiveTime::from_hms_opt(23, 30, 0).unwrap()));
    }
}
