use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::scoring::{JudgeScoresQuery, SubmissionScore, SubmitScoreRequest, SubmitScoreResponse},
    models::Score,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;

use super::services;

#[utoipa::path(
    post,
    path = "/api/scores",
    request_body = SubmitScoreRequest,
    responses(
        (status = 201, description = "Score recorded; resubmission overwrites the existing record", body = SubmitScoreResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "Rubric not found")
    ),
    tag = "scoring"
)]
pub async fn submit_score(
    State(db): State<Database>,
    Json(req): Json<SubmitScoreRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let score_id = services::submit_score(db.pool(), req).await?;

    Ok((StatusCode::CREATED, Json(SubmitScoreResponse { score_id })).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/submission/{submission_id}",
    params(
        ("submission_id" = Uuid, Path, description = "Submission id")
    ),
    responses(
        (status = 200, description = "All judges' scores for the submission", body = Vec<SubmissionScore>)
    ),
    tag = "scoring"
)]
pub async fn get_submission_scores(
    State(db): State<Database>,
    Path(submission_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let scores = services::get_submission_scores(db.pool(), submission_id).await?;

    Ok(Json(scores).into_response())
}

#[utoipa::path(
    get,
    path = "/api/scores/judge",
    params(JudgeScoresQuery),
    responses(
        (status = 200, description = "The judge's scores within the event", body = Vec<Score>)
    ),
    tag = "scoring"
)]
pub async fn get_judge_scores(
    State(db): State<Database>,
    Query(query): Query<JudgeScoresQuery>,
) -> Result<Response, WebError> {
    let scores = services::get_judge_scores(db.pool(), query.event_id, query.judge_id).await?;

    Ok(Json(scores).into_response())
}
