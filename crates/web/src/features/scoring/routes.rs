use axum::{
    Router,
    routing::{get, post},
};
use storage::Database;

use super::handlers::{get_judge_scores, get_submission_scores, submit_score};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", post(submit_score))
        .route("/submission/:submission_id", get(get_submission_scores))
        .route("/judge", get(get_judge_scores))
}
