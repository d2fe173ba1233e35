use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use super::common::{DEFAULT_LIMIT, DEFAULT_OFFSET, PaginationParams, lenient_int};
use super::fight::CardFight;
use crate::models::{Event, EventStatus};
use crate::services::date_math;

pub const DEFAULT_UPCOMING_LIMIT: i64 = 4;

/// Query of the events-by-year listing. Values that do not parse fall back
/// to their defaults instead of failing the request.
#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct EventsByYearQuery {
    /// Calendar year; missing or unparsable values mean the current year.
    pub year: Option<String>,
    /// Rows to skip (default 0).
    #[serde(default, deserialize_with = "lenient_int")]
    #[validate(range(min = 0, message = "offset must be >= 0"))]
    pub offset: Option<i64>,
    /// Page size, 1 to 100 (default 10).
    #[serde(default, deserialize_with = "lenient_int")]
    #[validate(range(min = 1, max = 100, message = "limit must be between 1 and 100"))]
    pub limit: Option<i64>,
}

impl EventsByYearQuery {
    pub fn resolve_year(&self, current_year: i32) -> i32 {
        self.year
            .as_deref()
            .and_then(|y| y.trim().parse::<i32>().ok())
            .filter(|y| (1..=9999).contains(y))
            .unwrap_or(current_year)
    }

    pub fn pagination(&self) -> PaginationParams {
        PaginationParams {
            offset: self.offset.unwrap_or(DEFAULT_OFFSET),
            limit: self.limit.unwrap_or(DEFAULT_LIMIT),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams, Validate)]
#[into_params(parameter_in = Query)]
pub struct UpcomingEventsQuery {
    /// Number of events, 1 to 20 (default 4).
    #[serde(default, deserialize_with = "lenient_int")]
    #[validate(range(min = 1, max = 20, message = "limit must be between 1 and 20"))]
    pub limit: Option<i64>,
}

impl UpcomingEventsQuery {
    pub fn limit(&self) -> i64 {
        self.limit.unwrap_or(DEFAULT_UPCOMING_LIMIT)
    }
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct EventSummary {
    pub id: Uuid,
    pub name: String,
    pub event_date: Option<DateTime<Utc>>,
    pub venue: Option<String>,
    pub city: Option<String>,
    pub country: Option<String>,
    pub status: EventStatus,
    pub attendance: Option<i32>,
    pub ufc_url: Option<String>,
    /// "Today", "Tomorrow", "5 days away", "3 days ago" or "Date unknown".
    pub countdown: String,
}

impl EventSummary {
    pub fn from_event(event: Event, now: DateTime<Utc>) -> Self {
        let status = event.status();
        Self {
            countdown: date_math::relative_label(event.event_date, now),
            id: event.id,
            name: event.name,
            event_date: event.event_date,
            venue: event.venue,
            city: event.city,
            country: event.country,
            status,
            attendance: event.attendance.filter(|a| *a > 0),
            ufc_url: event.ufc_url,
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventListResponse {
    pub events: Vec<EventSummary>,
    pub has_more: bool,
    pub next_offset: i64,
}

impl EventListResponse {
    pub fn new(events: Vec<EventSummary>, pagination: &PaginationParams, total_items: i64) -> Self {
        Self {
            events,
            has_more: pagination.has_more(total_items),
            next_offset: pagination.next_offset(),
        }
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct EventDetailResponse {
    pub event: EventSummary,
    /// Countdown in event-page wording ("12 days until event").
    pub countdown: String,
    pub fights: Vec<CardFight>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct AvailableYearsResponse {
    /// Newest first, always including the current year.
    pub years: Vec<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn query(year: Option<&str>) -> EventsByYearQuery {
        EventsByYearQuery {
            year: year.map(String::from),
            ..Default::default()
        }
    }

    fn event(date: DateTime<Utc>, status: &str) -> Event {
        Event {
            id: Uuid::new_v4(),
            name: "UFC 300".to_string(),
            event_date: Some(date),
            venue: Some("T-Mobile Arena".to_string()),
            city: Some("Las Vegas".to_string()),
            country: Some("USA".to_string()),
            status: Some(status.to_string()),
            attendance: Some(0),
            ufc_url: None,
        }
    }

    #[test]
    fn test_resolve_year() {
        assert_eq!(query(Some("2023")).resolve_year(2026), 2023);
        assert_eq!(query(Some("abc")).resolve_year(2026), 2026);
        assert_eq!(query(Some("0")).resolve_year(2026), 2026);
        assert_eq!(query(None).resolve_year(2026), 2026);
    }

    #[test]
    fn test_unparsable_paging_uses_defaults() {
        let query: EventsByYearQuery =
            serde_json::from_str(r#"{"year": "abc", "offset": "x", "limit": "ten"}"#).unwrap();
        assert!(query.validate().is_ok());
        assert_eq!(query.resolve_year(2026), 2026);
        assert_eq!(query.pagination(), PaginationParams::default());

        let upcoming: UpcomingEventsQuery = serde_json::from_str(r#"{"limit": "x"}"#).unwrap();
        assert_eq!(upcoming.limit(), DEFAULT_UPCOMING_LIMIT);
    }

    #[test]
    fn test_out_of_range_paging_is_rejected() {
        let query = EventsByYearQuery {
            limit: Some(101),
            ..Default::default()
        };
        assert!(query.validate().is_err());

        let upcoming = UpcomingEventsQuery { limit: Some(50) };
        assert!(upcoming.validate().is_err());
    }

    #[test]
    fn test_events_labelled_relative_to_now() {
        let now = Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap();

        let completed_on = Utc.with_ymd_and_hms(2024, 4, 13, 0, 0, 0).unwrap();
        let scheduled_on = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).unwrap();

        let completed = EventSummary::from_event(event(completed_on, "Completed"), now);
        let scheduled = EventSummary::from_event(event(scheduled_on, "Scheduled"), now);

        assert_eq!(completed.status, EventStatus::Completed);
        assert!(completed.countdown.ends_with("days ago"));
        assert_eq!(scheduled.status, EventStatus::Scheduled);
        assert!(scheduled.countdown.ends_with("days away"));
        assert_eq!(completed.attendance, None);
    }

    #[test]
    fn test_list_response_paging() {
        let pagination = PaginationParams {
            offset: 0,
            limit: 10,
        };
        let response = EventListResponse::new(Vec::new(), &pagination, 25);
        assert!(response.has_more);
        assert_eq!(response.next_offset, 10);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["hasMore"], true);
        assert_eq!(json["nextOffset"], 10);
    }
}
