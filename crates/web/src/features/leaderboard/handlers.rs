use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::leaderboard::{GlobalTopEntry, GlobalTopQuery, LeaderboardView, TrackQuery},
    models::Leaderboard,
};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::ApiKeyAuth;

use super::services;

#[utoipa::path(
    get,
    path = "/api/leaderboards/{event_id}",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        TrackQuery
    ),
    responses(
        (status = 200, description = "Published snapshot when one exists, otherwise a live view", body = LeaderboardView)
    ),
    tag = "leaderboards"
)]
pub async fn get_leaderboard(
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<TrackQuery>,
) -> Result<Response, WebError> {
    let view =
        services::get_by_event(db.pool(), event_id, query.track_id.as_deref()).await?;

    Ok(Json(view).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboards/{event_id}/publish",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        TrackQuery
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Leaderboard snapshot published", body = Leaderboard),
        (status = 401, description = "Unauthorized")
    ),
    tag = "leaderboards"
)]
pub async fn publish_leaderboard(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<TrackQuery>,
) -> Result<Response, WebError> {
    let leaderboard =
        services::publish(db.pool(), event_id, query.track_id.as_deref()).await?;

    tracing::info!(%event_id, entries = leaderboard.entries.len(), "leaderboard published");

    Ok(Json(leaderboard).into_response())
}

#[utoipa::path(
    post,
    path = "/api/leaderboards/{event_id}/unpublish",
    params(
        ("event_id" = Uuid, Path, description = "Event id"),
        TrackQuery
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 204, description = "Leaderboard unpublished; reads fall back to live computation"),
        (status = 401, description = "Unauthorized")
    ),
    tag = "leaderboards"
)]
pub async fn unpublish_leaderboard(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
    Query(query): Query<TrackQuery>,
) -> Result<Response, WebError> {
    services::unpublish(db.pool(), event_id, query.track_id.as_deref()).await?;

    Ok(StatusCode::NO_CONTENT.into_response())
}

#[utoipa::path(
    get,
    path = "/api/leaderboards/global",
    params(GlobalTopQuery),
    responses(
        (status = 200, description = "Podium finishers across recent completed events", body = Vec<GlobalTopEntry>)
    ),
    tag = "leaderboards"
)]
pub async fn get_global_top(
    State(db): State<Database>,
    Query(query): Query<GlobalTopQuery>,
) -> Result<Response, WebError> {
    let entries = services::global_top(db.pool(), query.limit).await?;

    Ok(Json(entries).into_response())
}
