use chrono::Utc;

/// Get current Unix timestamp in milliseconds
pub fn now_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}
