use axum::{
    Json,
    extract::{Path, Query, State, rejection::PathRejection},
    http::Uri,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use storage::{
    Database,
    dto::{
        fight::FightRecordResponse,
        fighter::{FighterFilter, FighterListResponse, FighterProfileResponse, FilterOptionsResponse},
    },
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    get,
    path = "/api/fighters",
    params(
        ("offset" = Option<i64>, Query, description = "Rows to skip (default 0)"),
        ("limit" = Option<i64>, Query, description = "Page size, 1 to 100 (default 10)"),
        ("search" = Option<String>, Query, description = "Case-insensitive name substring"),
        ("status" = Option<String>, Query, description = "Active, Retired or Not Fighting; Retired also matches Not Fighting"),
        ("champion" = Option<bool>, Query, description = "Only current champions"),
        ("weightClass" = Option<Vec<String>>, Query, description = "Repeatable; matches any"),
        ("nationality" = Option<Vec<String>>, Query, description = "Repeatable; matches any")
    ),
    responses(
        (status = 200, description = "Fighters retrieved successfully", body = FighterListResponse),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "fighters"
)]
pub async fn list_fighters(
    State(db): State<Database>,
    uri: Uri,
) -> Result<Response, WebError> {
    // Read as raw pairs so repeated `weightClass` and `nationality` keys survive.
    let Query(pairs) = Query::<Vec<(String, String)>>::try_from_uri(&uri)?;
    let filter = FighterFilter::from_query_pairs(pairs);
    filter.validate()?;

    let response = services::list_fighters(db.pool(), &filter).await?;

    Ok(Json(response).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fighters/{id}",
    params(
        ("id" = Uuid, Path, description = "Fighter ID")
    ),
    responses(
        (status = 200, description = "Fighter profile retrieved successfully", body = FighterProfileResponse),
        (status = 404, description = "Fighter not found")
    ),
    tag = "fighters"
)]
pub async fn get_fighter(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let profile = services::fighter_profile(db.pool(), id, Utc::now()).await?;

    Ok(Json(profile).into_response())
}

#[utoipa::path(
    get,
    path = "/api/fighters/{id}/fights",
    params(
        ("id" = Uuid, Path, description = "Fighter ID")
    ),
    responses(
        (status = 200, description = "Fight record retrieved successfully", body = FightRecordResponse),
        (status = 404, description = "Fighter not found")
    ),
    tag = "fighters"
)]
pub async fn get_fighter_fights(
    State(db): State<Database>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Response, WebError> {
    let Path(id) = id?;
    let fights = services::fighter_fights(db.pool(), id, Utc::now()).await?;
    let total = fights.len();

    Ok(Json(FightRecordResponse { fights, total }).into_response())
}

#[utoipa::path(
    get,
    path = "/api/filter-options",
    responses(
        (status = 200, description = "Filter options retrieved successfully", body = FilterOptionsResponse)
    ),
    tag = "fighters"
)]
pub async fn get_filter_options(State(db): State<Database>) -> Result<Response, WebError> {
    let options = services::filter_options(db.pool()).await?;

    Ok(Json(options).into_response())
}
