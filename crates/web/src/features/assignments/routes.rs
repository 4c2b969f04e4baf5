use axum::{Router, routing::get};
use storage::Database;

use super::handlers::{assign_submissions, get_assignment_detail, list_assignments};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(list_assignments).post(assign_submissions))
        .route("/detail", get(get_assignment_detail))
}
