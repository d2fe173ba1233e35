//! Calendar-day arithmetic for event countdowns.
//!
//! All comparisons happen on UTC calendar dates, so the time of day of
//! either instant never changes the outcome.

use chrono::{DateTime, Datelike, Utc};

pub const UNKNOWN_DATE_LABEL: &str = "Date unknown";

/// Where a date sits relative to today.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RelativeDay {
    Today,
    Future(i64),
    Past(i64),
}

impl RelativeDay {
    pub fn between(target: DateTime<Utc>, now: DateTime<Utc>) -> Self {
        let target_day = target.date_naive();
        let today = now.date_naive();
        let days = days_between(target, now);

        if days == 0 {
            Self::Today
        } else if target_day < today {
            Self::Past(days)
        } else {
            Self::Future(days)
        }
    }

    fn label_with(&self, future_suffix: &str) -> String {
        match *self {
            Self::Today => "Today".to_string(),
            Self::Future(1) => "Tomorrow".to_string(),
            Self::Past(1) => "Yesterday".to_string(),
            Self::Future(days) => format!("{} {}", days, future_suffix),
            Self::Past(days) => format!("{} days ago", days),
        }
    }
}

/// Absolute number of calendar days between the UTC dates of `a` and `b`.
pub fn days_between(a: DateTime<Utc>, b: DateTime<Utc>) -> i64 {
    (a.date_naive() - b.date_naive()).num_days().abs()
}

/// Short countdown used on listings: "Today", "Tomorrow", "5 days away",
/// "Yesterday", "12 days ago".
pub fn relative_label(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match target {
        Some(target) => RelativeDay::between(target, now).label_with("days away"),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}

/// Countdown wording used on the event detail page.
pub fn event_countdown_label(target: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match target {
        Some(target) => RelativeDay::between(target, now).label_with("days until event"),
        None => UNKNOWN_DATE_LABEL.to_string(),
    }
}

/// Distinct event years, newest first. The current year is always offered
/// even when no event is stored for it yet.
pub fn available_years<I>(dates: I, current_year: i32) -> Vec<i32>
where
    I: IntoIterator<Item = Option<DateTime<Utc>>>,
{
    let mut years: Vec<i32> = dates.into_iter().flatten().map(|d| d.year()).collect();
    years.push(current_year);
    years.sort_unstable_by(|a, b| b.cmp(a));
    years.dedup();
    years
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, min, 0).unwrap()
    }

    #[test]
    fn test_today() {
        let now = at(2025, 1, 1, 9, 0);
        assert_eq!(relative_label(Some(now), now), "Today");
    }

    #[test]
    fn test_tomorrow_and_yesterday() {
        let now = at(2025, 1, 1, 9, 0);
        assert_eq!(relative_label(Some(now + Duration::days(1)), now), "Tomorrow");
        assert_eq!(relative_label(Some(now - Duration::days(1)), now), "Yesterday");
    }

    #[test]
    fn test_days_away_and_ago() {
        let now = at(2025, 1, 1, 9, 0);
        let future = relative_label(Some(now + Duration::days(5)), now);
        assert!(future.contains('5'));
        assert!(future.contains("away"));

        assert_eq!(relative_label(Some(now - Duration::days(12)), now), "12 days ago");
    }

    #[test]
    fn test_event_countdown_wording() {
        let now = at(2025, 1, 1, 9, 0);
        assert_eq!(
            event_countdown_label(Some(now + Duration::days(5)), now),
            "5 days until event"
        );
        assert_eq!(event_countdown_label(Some(now + Duration::days(1)), now), "Tomorrow");
        assert_eq!(event_countdown_label(None, now), UNKNOWN_DATE_LABEL);
    }

    #[test]
    fn test_time_of_day_is_ignored() {
        let now = at(2025, 3, 10, 0, 5);
        assert_eq!(relative_label(Some(at(2025, 3, 10, 23, 59)), now), "Today");

        let late = at(2025, 3, 10, 23, 59);
        assert_eq!(relative_label(Some(at(2025, 3, 10, 0, 0)), late), "Today");

        // 12 hours ahead but past midnight is the next calendar day.
        let evening = at(2025, 3, 10, 20, 0);
        assert_eq!(relative_label(Some(at(2025, 3, 11, 8, 0)), evening), "Tomorrow");
    }

    #[test]
    fn test_days_between_is_symmetric() {
        let a = at(2024, 4, 13, 22, 0);
        let b = at(2025, 1, 1, 1, 0);
        assert_eq!(days_between(a, b), 263);
        assert_eq!(days_between(b, a), 263);
    }

    #[test]
    fn test_missing_or_malformed_date() {
        let now = at(2025, 1, 1, 0, 0);
        assert_eq!(relative_label(None, now), UNKNOWN_DATE_LABEL);
    }

    #[test]
    fn test_events_relative_to_fixed_now() {
        let now = at(2025, 1, 1, 0, 0);
        let completed = at(2024, 4, 13, 0, 0);
        let scheduled = at(2030, 1, 1, 0, 0);

        assert_eq!(RelativeDay::between(completed, now), RelativeDay::Past(263));
        assert!(relative_label(Some(completed), now).ends_with("days ago"));
        assert!(relative_label(Some(scheduled), now).ends_with("days away"));
    }

    #[test]
    fn test_available_years_dedup_and_order() {
        let dates = vec![
            Some(at(2023, 7, 8, 22, 0)),
            Some(at(2024, 4, 13, 22, 0)),
            None,
            Some(at(2024, 5, 4, 22, 0)),
            Some(at(2023, 11, 11, 22, 0)),
        ];
        assert_eq!(available_years(dates, 2026), vec![2026, 2024, 2023]);
    }

    #[test]
    fn test_available_years_current_year_already_present() {
        let dates = vec![Some(at(2025, 2, 1, 0, 0)), Some(at(2025, 6, 1, 0, 0))];
        assert_eq!(available_years(dates, 2025), vec![2025]);
    }
}
