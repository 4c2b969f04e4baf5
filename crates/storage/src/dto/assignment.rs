use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;
use validator::Validate;

use crate::models::Assignment;

use super::scoring::JudgeInfo;

/// Request payload for assigning submissions to a judge. Upserts on
/// (event, judge): an existing assignment gets its submission list replaced
/// and its counts reconciled.
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct AssignSubmissionsRequest {
    pub event_id: Uuid,
    pub judge_id: Uuid,
    pub submission_ids: Vec<Uuid>,

    #[validate(length(max = 255))]
    pub track_id: Option<String>,
}

/// Administrative progress view: one judge's assignment with identity.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentWithJudge {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub judge: Option<JudgeInfo>,
}

/// Team summary shown next to an assigned submission.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct TeamInfo {
    pub team_id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
}

/// An assigned submission enriched for the judge's worklist: team summary and
/// whether this judge has already completed a score for it.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignedSubmission {
    pub submission_id: Uuid,
    pub team_id: Uuid,
    pub track_id: Option<String>,
    pub project_name: String,
    pub tagline: String,
    pub status: String,
    pub team: Option<TeamInfo>,
    pub is_scored: bool,
    pub score_id: Option<Uuid>,
}

/// A judge's assignment with per-submission enrichment. Assigned submissions
/// that no longer resolve are dropped from the list.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct AssignmentDetail {
    #[serde(flatten)]
    pub assignment: Assignment,
    pub submissions: Vec<AssignedSubmission>,
}

/// Query parameters for the event-wide assignment list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AssignmentListQuery {
    pub event_id: Uuid,
}

/// Query parameters for a single judge's enriched assignment.
#[derive(Debug, Deserialize, IntoParams)]
pub struct AssignmentDetailQuery {
    pub event_id: Uuid,
    pub judge_id: Uuid,
}
