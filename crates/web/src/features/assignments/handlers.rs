use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::assignment::{
        AssignSubmissionsRequest, AssignmentDetail, AssignmentDetailQuery, AssignmentListQuery,
        AssignmentWithJudge,
    },
    models::Assignment,
};
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::ApiKeyAuth;

use super::services;

#[utoipa::path(
    post,
    path = "/api/assignments",
    request_body = AssignSubmissionsRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Assignment created or replaced", body = Assignment),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "assignments"
)]
pub async fn assign_submissions(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Json(req): Json<AssignSubmissionsRequest>,
) -> Result<Response, WebError> {
    req.validate()?;

    let assignment = services::assign_submissions(db.pool(), &req).await?;

    Ok((StatusCode::CREATED, Json(assignment)).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assignments",
    params(AssignmentListQuery),
    responses(
        (status = 200, description = "All assignments for the event with judge identity", body = Vec<AssignmentWithJudge>)
    ),
    tag = "assignments"
)]
pub async fn list_assignments(
    State(db): State<Database>,
    Query(query): Query<AssignmentListQuery>,
) -> Result<Response, WebError> {
    let assignments = services::list_assignments(db.pool(), query.event_id).await?;

    Ok(Json(assignments).into_response())
}

#[utoipa::path(
    get,
    path = "/api/assignments/detail",
    params(AssignmentDetailQuery),
    responses(
        (status = 200, description = "One judge's assignment with per-submission enrichment", body = AssignmentDetail),
        (status = 404, description = "Assignment not found")
    ),
    tag = "assignments"
)]
pub async fn get_assignment_detail(
    State(db): State<Database>,
    Query(query): Query<AssignmentDetailQuery>,
) -> Result<Response, WebError> {
    let detail =
        services::get_assignment_detail(db.pool(), query.event_id, query.judge_id).await?;

    Ok(Json(detail).into_response())
}
