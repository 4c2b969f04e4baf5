use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One judge's raw score for one rubric criterion. Embedded inside a `Score`,
/// never a standalone row.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntry {
    pub criteria_id: String,
    pub score: f64,
    pub comment: Option<String>,
}

/// A judge's evaluation of a submission. At most one row exists per
/// (submission, judge) pair; resubmission patches it in place. The weighted
/// total is computed against the rubric at submission time and frozen, so
/// later rubric edits do not change it.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Score {
    pub score_id: Uuid,
    pub submission_id: Uuid,
    pub judge_id: Uuid,
    pub rubric_id: Uuid,
    #[sqlx(json)]
    pub scores: Vec<ScoreEntry>,
    pub total_score: f64,
    pub weighted_score: f64,
    pub overall_comment: Option<String>,
    pub compared_with: Vec<Uuid>,
    pub status: String,
    pub created_at: chrono::NaiveDateTime,
    pub updated_at: chrono::NaiveDateTime,
}
