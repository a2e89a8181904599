//! Timestamp formatting helpers for display.

use chrono::{DateTime, Utc};

/// Human-relative distance from `timestamp` to now: "just now", "5m", "3h",
/// "2d", or a short date once it is a week old.
pub fn format_distance_to_now(timestamp: DateTime<Utc>) -> String {
    format_distance(timestamp, Utc::now())
}

fn format_distance(timestamp: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let minutes = (now - timestamp).num_minutes();
    let hours = minutes / 60;
    let days = hours / 24;

    if minutes < 1 {
        // covers timestamps slightly in the future (clock skew)
        "just now".to_string()
    } else if minutes < 60 {
        format!("{}m", minutes)
    } else if hours < 24 {
        format!("{}h", hours)
    } else if days < 7 {
        format!("{}d", days)
    } else {
        timestamp.format("%-m/%-d/%Y").to_string()
    }
}

/// Clock time of `timestamp`, 24-hour "HH:MM".
pub fn format_time(timestamp: DateTime<Utc>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn now() -> DateTime<Utc> {
        "2026-08-30T12:00:00Z".parse().unwrap()
    }

    #[test]
    fn test_just_now() {
        assert_eq!(format_distance(now(), now()), "just now");
        assert_eq!(format_distance(now() - Duration::seconds(30), now()), "just now");
    }

    #[test]
    fn test_future_timestamp_is_just_now() {
        assert_eq!(format_distance(now() + Duration::minutes(5), now()), "just now");
    }

    #[test]
    fn test_minutes() {
        assert_eq!(format_distance(now() - Duration::minutes(1), now()), "1m");
        assert_eq!(format_distance(now() - Duration::minutes(59), now()), "59m");
    }

    #[test]
    fn test_hours() {
        assert_eq!(format_distance(now() - Duration::minutes(60), now()), "1h");
        assert_eq!(format_distance(now() - Duration::hours(23), now()), "23h");
    }

    #[test]
    fn test_days() {
        assert_eq!(format_distance(now() - Duration::hours(24), now()), "1d");
        assert_eq!(format_distance(now() - Duration::days(6), now()), "6d");
    }

    #[test]
    fn test_week_old_falls_back_to_date() {
        assert_eq!(
            format_distance(now() - Duration::days(7), now()),
            "8/23/2026"
        );
    }

    #[test]
    fn test_format_time() {
        let timestamp: DateTime<Utc> = "2026-08-30T09:05:00Z".parse().unwrap();
        assert_eq!(format_time(timestamp), "09:05");
    }
}
