//! Small shared helpers.

/// Current UTC timestamp in milliseconds.
///
/// All persisted timestamps (`created_at`) are Unix millis as `i64`.
pub fn now_millis() -> i64 {
    chrono::Utc::now().timestamp_millis()
}
