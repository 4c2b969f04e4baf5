use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::{Score, ScoreEntry};

/// Request payload for a judge submitting (or resubmitting) a score.
///
/// Score values are persisted as-is; there is no bounds check against the
/// criterion's max score.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct SubmitScoreRequest {
    pub submission_id: Uuid,
    pub judge_id: Uuid,
    pub rubric_id: Uuid,

    pub scores: Vec<ScoreEntryInput>,

    #[validate(length(max = 5000))]
    pub overall_comment: Option<String>,

    #[serde(default)]
    pub compared_with: Vec<Uuid>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ScoreEntryInput {
    pub criteria_id: String,
    pub score: f64,
    pub comment: Option<String>,
}

impl From<ScoreEntryInput> for ScoreEntry {
    fn from(input: ScoreEntryInput) -> Self {
        Self {
            criteria_id: input.criteria_id,
            score: input.score,
            comment: input.comment,
        }
    }
}

/// Judge display identity attached to score reads.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct JudgeInfo {
    pub user_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}

/// One judge's score for a submission, enriched with the judge's identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct SubmissionScore {
    #[serde(flatten)]
    pub score: Score,
    pub judge: Option<JudgeInfo>,
}

/// Query parameters for listing a judge's scores within an event.
#[derive(Debug, Deserialize, IntoParams)]
pub struct JudgeScoresQuery {
    pub event_id: Uuid,
    pub judge_id: Uuid,
}

/// Response for a score submission.
#[derive(Debug, Serialize, ToSchema)]
pub struct SubmitScoreResponse {
    pub score_id: Uuid,
}
