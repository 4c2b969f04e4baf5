use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::rubric::{CreateRubricRequest, RubricQuery, UpdateRubricRequest},
    models::Rubric,
};
use uuid::Uuid;
use validator::Validate;

use crate::error::WebError;
use crate::middleware::auth::ApiKeyAuth;

use super::services;

#[utoipa::path(
    post,
    path = "/api/rubrics",
    request_body = CreateRubricRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 201, description = "Rubric created successfully", body = Rubric),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 409, description = "A rubric already exists for this event and track")
    ),
    tag = "rubrics"
)]
pub async fn create_rubric(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Json(req): Json<CreateRubricRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_criteria().map_err(WebError::BadRequest)?;

    let rubric = services::create_rubric(db.pool(), req).await?;

    Ok((StatusCode::CREATED, Json(rubric)).into_response())
}

#[utoipa::path(
    put,
    path = "/api/rubrics/{rubric_id}",
    params(
        ("rubric_id" = Uuid, Path, description = "Rubric id")
    ),
    request_body = UpdateRubricRequest,
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Rubric criteria replaced", body = Rubric),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Unauthorized"),
        (status = 404, description = "Rubric not found")
    ),
    tag = "rubrics"
)]
pub async fn update_rubric(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Path(rubric_id): Path<Uuid>,
    Json(req): Json<UpdateRubricRequest>,
) -> Result<Response, WebError> {
    req.validate()?;
    req.validate_criteria().map_err(WebError::BadRequest)?;

    let rubric = services::update_rubric(db.pool(), rubric_id, req).await?;

    Ok(Json(rubric).into_response())
}

#[utoipa::path(
    get,
    path = "/api/rubrics",
    params(RubricQuery),
    responses(
        (status = 200, description = "Rubric for the event (or event/track pair)", body = Rubric),
        (status = 404, description = "Rubric not found")
    ),
    tag = "rubrics"
)]
pub async fn get_rubric(
    State(db): State<Database>,
    Query(query): Query<RubricQuery>,
) -> Result<Response, WebError> {
    let rubric =
        services::get_rubric(db.pool(), query.event_id, query.track_id.as_deref()).await?;

    Ok(Json(rubric).into_response())
}
