use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Display summary of a team, read-only from the judging core's perspective.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Team {
    pub team_id: Uuid,
    pub event_id: Uuid,
    pub name: String,
    pub avatar_url: Option<String>,
}
