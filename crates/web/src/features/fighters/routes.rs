use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{get_fighter, get_fighter_fights, list_fighters};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_fighters))
        .route("/:id", get(get_fighter))
        .route("/:id/fights", get(get_fighter_fights))
}
