use axum::{
    Json,
    extract::State,
    response::{IntoResponse, Response},
};
use storage::{Database, dto::ranking::RosterResponse};

use super::services;

#[utoipa::path(
    get,
    path = "/api/rankings",
    responses(
        (status = 200, description = "Divisional rankings retrieved successfully", body = RosterResponse)
    ),
    tag = "rankings"
)]
pub async fn get_rankings(State(db): State<Database>) -> Response {
    let roster = services::get_roster(db.pool()).await;

    Json(roster).into_response()
}
