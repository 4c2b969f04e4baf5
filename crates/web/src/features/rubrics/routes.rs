use axum::{
    Router,
    routing::{get, put},
};
use storage::Database;

use super::handlers::{create_rubric, get_rubric, update_rubric};

pub fn routes() -> Router<Database> {
    Router::new()
        .route("/", get(get_rubric).post(create_rubric))
        .route("/:rubric_id", put(update_rubric))
}
