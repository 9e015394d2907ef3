//! Coarse "time since" labels for link cards and folder rows.
//!
//! Every function here is pure in `(now, timestamp)`, both in milliseconds
//! since the epoch. Labels drift as time passes, so they are computed at
//! render time and never stored.

use chrono::{DateTime, Local, Utc};

const MINUTE_MS: i64 = 60 * 1000;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Current wall-clock time in milliseconds since the epoch.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Label for a link's age: "Just now", "{n}m ago", "{n}h ago", "{n}d ago",
/// then the calendar date once it is 30 days old.
pub fn time_ago(now: i64, timestamp: i64) -> String {
    let diff = now.saturating_sub(timestamp);
    let minutes = diff / MINUTE_MS;
    let hours = diff / HOUR_MS;
    let days = diff / DAY_MS;

    if minutes < 1 {
        "Just now".to_string()
    } else if minutes < 60 {
        format!("{}m ago", minutes)
    } else if hours < 24 {
        format!("{}h ago", hours)
    } else if days < 30 {
        format!("{}d ago", days)
    } else {
        calendar_date(timestamp)
    }
}

/// Day-granularity label used for folders: "Today", "Yesterday",
/// "{n} days ago", then the calendar date.
pub fn folder_age(now: i64, created_at: i64) -> String {
    let days = now.saturating_sub(created_at) / DAY_MS;

    if days < 1 {
        "Today".to_string()
    } else if days == 1 {
        "Yesterday".to_string()
    } else if days < 30 {
        format!("{} days ago", days)
    } else {
        calendar_date(created_at)
    }
}

/// Local calendar date as `M/D/YYYY`.
pub fn calendar_date(timestamp: i64) -> String {
    DateTime::<Utc>::from_timestamp_millis(timestamp)
        .unwrap_or_default()
        .with_timezone(&Local)
        .format("%-m/%-d/%Y")
        .to_string()
}
