//! Display-level formatting helpers.

use chrono::{DateTime, TimeZone, Utc};
use std::fmt::Display;

/// Title-case a snake_case wire value (`pending_review` → `Pending Review`).
#[must_use]
pub fn format_status(raw: &str) -> String {
    raw.split('_')
        .filter(|word| !word.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            chars
                .next()
                .map(|first| first.to_uppercase().chain(chars).collect::<String>())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Relative age of a post: `Just now`, `5h ago`, `3d ago`.
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn time_ago(hours: f64) -> String {
    if hours < 1.0 {
        return String::from("Just now");
    }
    if hours < 24.0 {
        return format!("{}h ago", hours.round() as i64);
    }
    format!("{}d ago", (hours / 24.0).floor() as i64)
}

/// When a scheduled post goes out, relative to `now`, rendered in `tz`.
///
/// Past times read `Ready to post`; anything under a day reads `In 5h`;
/// later times use a short calendar form such as `Mar 4, 3:07 PM`.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub fn scheduled_label<Tz>(at: DateTime<Utc>, now: DateTime<Utc>, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let diff_hours = ((at - now).num_milliseconds() as f64 / 3_600_000.0).round() as i64;
    if diff_hours < 0 {
        String::from("Ready to post")
    } else if diff_hours < 24 {
        format!("In {diff_hours}h")
    } else {
        at.with_timezone(tz).format("%b %-d, %-I:%M %p").to_string()
    }
}

/// Cut `text` to `max_chars` characters, appending `...` when shortened.
#[must_use]
pub fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut out: String = text.chars().take(max_chars).collect();
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case("pending_review", "Pending Review")]
    #[case("posted", "Posted")]
    #[case("", "")]
    fn format_status_title_cases(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(format_status(raw), expected);
    }

    #[rstest]
    #[case(0.4, "Just now")]
    #[case(5.6, "6h ago")]
    #[case(23.2, "23h ago")]
    #[case(49.0, "2d ago")]
    fn time_ago_buckets(#[case] hours: f64, #[case] expected: &str) {
        assert_eq!(time_ago(hours), expected);
    }

    #[test]
    fn scheduled_label_past_is_ready() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let at = now - Duration::hours(2);
        assert_eq!(scheduled_label(at, now, &Utc), "Ready to post");
    }

    #[test]
    fn scheduled_label_within_a_day_is_relative() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let at = now + Duration::minutes(5 * 60 + 10);
        assert_eq!(scheduled_label(at, now, &Utc), "In 5h");
    }

    #[test]
    fn scheduled_label_far_future_is_calendar() {
        let now = Utc.with_ymd_and_hms(2026, 3, 4, 12, 0, 0).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 9, 15, 7, 0).unwrap();
        assert_eq!(scheduled_label(at, now, &Utc), "Mar 9, 3:07 PM");
    }

    #[test]
    fn truncate_counts_characters() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("héllo wörld", 5), "héllo...");
    }
}
