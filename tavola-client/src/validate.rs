//! Reservation form validation
//!
//! Turns the raw text collected from form controls into a normalized
//! [`ReservationCreate`], or a structured list of field failures. The
//! structured failures are for logging and tests; the UI only ever shows a
//! generic prompt.

use std::fmt;

use shared::{ReservationCreate, schedule};
use validator::Validate;

/// Raw reservation form values, exactly as collected from form controls.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationDraft {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub party_size: String,
    pub date: String,
    pub time: String,
    pub special_requests: String,
}

/// One failed field and the constraint it violated
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub constraint: String,
}

/// All failing fields of one validation pass, in a stable order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationFailure {
    pub issues: Vec<FieldIssue>,
}

impl ValidationFailure {
    fn push(&mut self, field: &str, constraint: impl Into<String>) {
        self.issues.push(FieldIssue {
            field: field.to_string(),
            constraint: constraint.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Names of the failing fields
    pub fn fields(&self) -> Vec<&str> {
        self.issues.iter().map(|i| i.field.as_str()).collect()
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .issues
            .iter()
            .map(|i| format!("{}: {}", i.field, i.constraint))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

/// Validate raw form values.
///
/// Pure and deterministic: the same draft always yields the same result,
/// and every failing field is reported. `party_size` is coerced from text
/// before range-checking; empty optional fields (`phone`,
/// `special_requests`) normalize to absent. The chosen `time` must be a
/// member of the slot set derived from the chosen `date`.
pub fn validate(draft: &ReservationDraft) -> Result<ReservationCreate, ValidationFailure> {
    let mut failure = ValidationFailure::default();

    let party_size = match draft.party_size.trim().parse::<i64>() {
        Ok(n) => n,
        Err(_) => {
            failure.push("party_size", "must be a whole number");
            0
        }
    };

    let payload = ReservationCreate {
        name: draft.name.clone(),
        email: draft.email.clone(),
        phone: optional(&draft.phone),
        party_size,
        date: draft.date.clone(),
        time: draft.time.clone(),
        special_requests: optional(&draft.special_requests),
    };

    if let Err(errors) = payload.validate() {
        // HashMap order is arbitrary; sort so the report is deterministic
        let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
        fields.sort_by(|a, b| a.0.cmp(&b.0));
        for (field, issues) in fields {
            for issue in issues {
                failure.push(field.as_ref(), issue.code.as_ref());
            }
        }
    }

    match schedule::parse_date(&draft.date) {
        Ok(date) => {
            if !draft.time.is_empty()
                && !schedule::slots_for_date(date).iter().any(|s| s == &draft.time)
            {
                failure.push("time", "not offered on the selected date");
            }
        }
        Err(_) if !draft.date.is_empty() => {
            failure.push("date", "must be a calendar date (YYYY-MM-DD)");
        }
        Err(_) => {}
    }

    if failure.is_empty() {
        Ok(payload)
    } else {
        Err(failure)
    }
}

fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_draft() -> ReservationDraft {
        ReservationDraft {
            name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            phone: String::new(),
            party_size: "4".to_string(),
            date: "2025-03-12".to_string(),
            time: "19:00".to_string(),
            special_requests: "  ".to_string(),
        }
    }

    #[test]
    fn test_valid_draft_normalizes_optionals() {
        let payload = validate(&filled_draft()).unwrap();
        assert_eq!(payload.name, "Ada Lovelace");
        assert_eq!(payload.party_size, 4);
        assert!(payload.phone.is_none());
        assert!(payload.special_requests.is_none());
    }

    #[test]
    fn test_phone_kept_when_present() {
        let mut draft = filled_draft();
        draft.phone = "+34 600 000 000".to_string();
        let payload = validate(&draft).unwrap();
        assert_eq!(payload.phone.as_deref(), Some("+34 600 000 000"));
    }

    #[test]
    fn test_party_size_bounds() {
        for (raw, ok) in [("0", false), ("13", false), ("1", true), ("12", true)] {
            let mut draft = filled_draft();
            draft.party_size = raw.to_string();
            assert_eq!(validate(&draft).is_ok(), ok, "party_size = {raw}");
        }
    }

    #[test]
    fn test_party_size_must_be_numeric() {
        let mut draft = filled_draft();
        draft.party_size = "a few".to_string();
        let failure = validate(&draft).unwrap_err();
        assert!(failure.fields().contains(&"party_size"));
    }

    #[test]
    fn test_bad_email_fails_alone() {
        let mut draft = filled_draft();
        draft.email = "not-an-email".to_string();
        let failure = validate(&draft).unwrap_err();
        assert_eq!(failure.fields(), vec!["email"]);
    }

    #[test]
    fn test_all_failures_reported() {
        let draft = ReservationDraft::default();
        let failure = validate(&draft).unwrap_err();
        let fields = failure.fields();
        for expected in ["name", "email", "party_size", "date", "time"] {
            assert!(fields.contains(&expected), "missing issue for {expected}");
        }
    }

    #[test]
    fn test_time_must_belong_to_dates_slot_set() {
        // 2025-03-09 is a Sunday: last slot is 21:00
        let mut draft = filled_draft();
        draft.date = "2025-03-09".to_string();
        draft.time = "21:30".to_string();
        let failure = validate(&draft).unwrap_err();
        assert_eq!(failure.fields(), vec!["time"]);

        draft.time = "21:00".to_string();
        assert!(validate(&draft).is_ok());
    }

    #[test]
    fn test_unparseable_date_flagged() {
        let mut draft = filled_draft();
        draft.date = "next friday".to_string();
        let failure = validate(&draft).unwrap_err();
        assert!(failure.fields().contains(&"date"));
    }

    #[test]
    fn test_deterministic_for_same_input() {
        let mut draft = filled_draft();
        draft.email = "broken".to_string();
        draft.party_size = "0".to_string();
        let first = validate(&draft).unwrap_err();
        let second = validate(&draft).unwrap_err();
        assert_eq!(first, second);
    }
}
