use axum::{Router, routing::post};
use storage::Database;

use super::handlers::calculate_rankings;

pub fn routes() -> Router<Database> {
    Router::new().route("/:event_id/calculate", post(calculate_rankings))
}
