use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// The set of submissions a judge is responsible for scoring in an event.
/// One row per (event, judge); `completed_count` tracks how many of the
/// assigned submissions the judge has fully scored.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Assignment {
    pub assignment_id: Uuid,
    pub event_id: Uuid,
    pub judge_id: Uuid,
    pub submission_ids: Vec<Uuid>,
    pub track_id: Option<String>,
    pub completed_count: i32,
    pub total_count: i32,
    pub created_at: chrono::NaiveDateTime,
}
