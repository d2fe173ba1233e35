use axum::{Json, Router, routing::get};
use serde_json::{Value, json};
use storage::Database;

use crate::features::{events, fighters, rankings};

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Service is up")
    ),
    tag = "health"
)]
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn router(db: Database) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route(
            "/api/filter-options",
            get(fighters::handlers::get_filter_options),
        )
        .nest("/api/fighters", fighters::routes::routes())
        .nest("/api/events", events::routes::routes())
        .nest("/api/rankings", rankings::routes::routes())
        .with_state(db)
}
