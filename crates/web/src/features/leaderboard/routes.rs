use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{
    get_global_top, get_leaderboard, publish_leaderboard, unpublish_leaderboard,
};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/global", get(get_global_top))
        .route("/:event_id", get(get_leaderboard))
        .route("/:event_id/publish", post(publish_leaderboard))
        .route("/:event_id/unpublish", post(unpublish_leaderboard))
}
