use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_event, list_event_years, list_events, list_upcoming_events};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_events))
        .route("/years", get(list_event_years))
        .route("/upcoming", get(list_upcoming_events))
        .route("/:id", get(get_event))
}
