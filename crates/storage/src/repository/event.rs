use chrono::{DateTime, NaiveDate, Utc};
use sqlx::{PgPool, Postgres, QueryBuilder};
use uuid::Uuid;

use crate::dto::common::PaginationParams;
use crate::error::{Result, StorageError};
use crate::models::Event;

const EVENT_COLUMNS: &str =
    "id, name, event_date, venue, city, country, status, attendance, ufc_url";

pub struct EventRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> EventRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Events dated within `year` (UTC), oldest first, with the total count
    /// for that year.
    pub async fn list_by_year(
        &self,
        year: i32,
        pagination: &PaginationParams,
    ) -> Result<(Vec<Event>, i64)> {
        let (start, end) = year_bounds(year);

        let mut count_query =
            QueryBuilder::<Postgres>::new("SELECT COUNT(*) FROM events WHERE event_date >= ");
        count_query.push_bind(start);
        count_query.push(" AND event_date < ");
        count_query.push_bind(end);

        let total_items = count_query
            .build_query_scalar::<i64>()
            .fetch_one(self.pool)
            .await?;

        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(EVENT_COLUMNS);
        query.push(" FROM events WHERE event_date >= ");
        query.push_bind(start);
        query.push(" AND event_date < ");
        query.push_bind(end);
        query.push(" ORDER BY event_date ASC LIMIT ");
        query.push_bind(pagination.limit);
        query.push(" OFFSET ");
        query.push_bind(pagination.offset);

        let events = query.build_query_as().fetch_all(self.pool).await?;

        Ok((events, total_items))
    }

    /// Next events on or after `now`, soonest first.
    pub async fn upcoming(&self, now: DateTime<Utc>, limit: i64) -> Result<Vec<Event>> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(EVENT_COLUMNS);
        query.push(" FROM events WHERE event_date >= ");
        query.push_bind(now);
        query.push(" ORDER BY event_date ASC LIMIT ");
        query.push_bind(limit);

        let events = query.build_query_as().fetch_all(self.pool).await?;

        Ok(events)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Event> {
        let mut query = QueryBuilder::<Postgres>::new("SELECT ");
        query.push(EVENT_COLUMNS);
        query.push(" FROM events WHERE id = ");
        query.push_bind(id);

        query
            .build_query_as::<Event>()
            .fetch_optional(self.pool)
            .await?
            .ok_or(StorageError::NotFound)
    }

    /// Every stored event date, including NULLs.
    pub async fn list_event_dates(&self) -> Result<Vec<Option<DateTime<Utc>>>> {
        let dates = sqlx::query_scalar::<_, Option<DateTime<Utc>>>("SELECT event_date FROM events")
            .fetch_all(self.pool)
            .await?;

        Ok(dates)
    }
}

/// Half-open UTC range `[Jan 1 of year, Jan 1 of year + 1)`.
fn year_bounds(year: i32) -> (DateTime<Utc>, DateTime<Utc>) {
    let start_of = |y: i32| {
        NaiveDate::from_ymd_opt(y, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|d| d.and_utc())
            .unwrap_or(DateTime::<Utc>::MAX_UTC)
    };
    (start_of(year), start_of(year + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_year_bounds() {
        let (start, end) = year_bounds(2024);
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap());
    }
}
