use axum::{Router, routing::get};
use storage::Database;

use super::handlers::get_rankings;

pub fn routes() -> Router<Database> {
    Router::new().route("/", get(get_rankings))
}
