use axum::{
    Json,
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use storage::{Database, dto::ranking::RankingRunResponse};
use uuid::Uuid;

use crate::error::WebError;
use crate::middleware::auth::ApiKeyAuth;

use super::services;

#[utoipa::path(
    post,
    path = "/api/rankings/{event_id}/calculate",
    params(
        ("event_id" = Uuid, Path, description = "Event id")
    ),
    security(
        ("bearer_auth" = [])
    ),
    responses(
        (status = 200, description = "Rankings recomputed for the event", body = RankingRunResponse),
        (status = 401, description = "Unauthorized")
    ),
    tag = "rankings"
)]
pub async fn calculate_rankings(
    _auth: ApiKeyAuth,
    State(db): State<Database>,
    Path(event_id): Path<Uuid>,
) -> Result<Response, WebError> {
    let ranked = services::calculate_rankings(db.pool(), event_id).await?;

    tracing::info!(%event_id, ranked, "ranking run completed");

    Ok(Json(RankingRunResponse { ranked }).into_response())
}
