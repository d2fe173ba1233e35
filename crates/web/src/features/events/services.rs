use chrono::{DateTime, Datelike, Utc};
use sqlx::PgPool;
use storage::{
    dto::event::{
        AvailableYearsResponse, EventDetailResponse, EventListResponse, EventSummary,
        EventsByYearQuery,
    },
    error::Result,
    repository::{event::EventRepository, fight::FightRepository},
    services::{date_math, fight_record},
};
use uuid::Uuid;

/// Events of one calendar year, oldest first
pub async fn list_events_by_year(
    pool: &PgPool,
    query: &EventsByYearQuery,
    now: DateTime<Utc>,
) -> Result<EventListResponse> {
    let repo = EventRepository::new(pool);
    let year = query.resolve_year(now.year());
    let pagination = query.pagination();

    let (events, total_items) = repo.list_by_year(year, &pagination).await?;
    let events = events
        .into_iter()
        .map(|event| EventSummary::from_event(event, now))
        .collect();

    Ok(EventListResponse::new(events, &pagination, total_items))
}

/// Years that have at least one event, plus the current year
pub async fn available_years(pool: &PgPool, now: DateTime<Utc>) -> Result<AvailableYearsResponse> {
    let repo = EventRepository::new(pool);
    let dates = repo.list_event_dates().await?;

    Ok(AvailableYearsResponse {
        years: date_math::available_years(dates, now.year()),
    })
}

/// Next scheduled events, soonest first
pub async fn upcoming_events(
    pool: &PgPool,
    limit: i64,
    now: DateTime<Utc>,
) -> Result<Vec<EventSummary>> {
    let repo = EventRepository::new(pool);
    let events = repo.upcoming(now, limit).await?;

    Ok(events
        .into_iter()
        .map(|event| EventSummary::from_event(event, now))
        .collect())
}

/// Event with its fight card in running order
pub async fn event_detail(
    pool: &PgPool,
    event_id: Uuid,
    now: DateTime<Utc>,
) -> Result<EventDetailResponse> {
    let event_repo = EventRepository::new(pool);
    let fight_repo = FightRepository::new(pool);

    let (event, fights) = tokio::try_join!(
        event_repo.find_by_id(event_id),
        fight_repo.list_for_event(event_id)
    )?;

    let fights = fight_record::event_card(fights, event.is_completed());
    let countdown = date_math::event_countdown_label(event.event_date, now);

    Ok(EventDetailResponse {
        event: EventSummary::from_event(event, now),
        countdown,
        fights,
    })
}
