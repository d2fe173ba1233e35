use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{PathRejection, QueryRejection},
    },
    http::header,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::event::{
        AvailableYearsResponse, EventDetailResponse, EventListResponse, EventSummary,
        EventsByYearQuery, UpcomingEventsQuery,
    },
    models::EventStatus,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

const SHORT_CACHE: &str = "public, max-age=3600";
const LONG_CACHE: &str = "public, max-age=86400";

#[utoipa::path(
    get,
    path = "/api/events",
    params(EventsByYearQuery),
    responses(
        (status = 200, description = "Events retrieved successfully", body = EventListResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn list_events(
    State(db): State<Database>,
    query: Result<Query<EventsByYearQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    query.validate()?;

    let response = services::list_events_by_year(db.pool(), &query, Utc::now()).await?;

    Ok(([(header::CACHE_CONTROL, SHORT_CACHE)], Json(response)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/years",
    responses(
        (status = 200, description = "Available years retrieved successfully", body = AvailableYearsResponse)
    ),
    tag = "events"
)]
pub async fn list_event_years(State(db): State<Database>) -> Result<Response, WebError> {
    let response = services::available_years(db.pool(), Utc::now()).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/upcoming",
    params(UpcomingEventsQuery),
    responses(
        (status = 200, description = "Upcoming events retrieved successfully", body = [EventSummary]),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "events"
)]
pub async fn list_upcoming_events(
    State(db): State<Database>,
    query: Result<Query<UpcomingEventsQuery>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(query) = query?;
    query.validate()?;

    let events = services::upcoming_events(db.pool(), query.limit(), Utc::now()).await?;

    Ok(Json(events).into_response())
}

#[utoipa::path(
    get,
    path = "/api/events/{id}",
    params(
        ("id" = Uuid, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "Event retrieved successfully", body = EventDetailResponse),
        (status = 404, description = "Event not found")
    ),
    tag = "events"
)]
pub async fn get_event(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let detail = services::event_detail(db.pool(), id, Utc::now()).await?;
    let cache = if detail.event.status == EventStatus::Completed {
        LONG_CACHE
    } else {
        SHORT_CACHE
    };

    Ok(([(header::CACHE_CONTROL, cache)], Json(detail)).into_response())
}
