use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Judging-relevant view of a project submission. The full submission record
/// is owned by the platform's submission CRUD; this core only reads it and
/// writes back the denormalized ranking outputs (`average_score`,
/// `total_judges`, `rank`) plus the `submitted -> judged` status transition.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Submission {
    pub submission_id: Uuid,
    pub event_id: Uuid,
    pub team_id: Uuid,
    pub track_id: Option<String>,
    pub project_name: String,
    pub tagline: String,
    pub status: String,
    pub submitted_at: Option<chrono::NaiveDateTime>,
    pub average_score: Option<f64>,
    pub total_judges: Option<i32>,
    pub rank: Option<i32>,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
