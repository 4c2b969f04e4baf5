use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// One row of a materialized leaderboard: a denormalized snapshot of a team's
/// standing, not a live join.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LeaderboardEntry {
    pub rank: i32,
    pub team_id: Uuid,
    pub team_name: String,
    pub project_name: String,
    pub score: f64,
    pub avatar_url: Option<String>,
}

/// Materialized leaderboard for an event (or event/track pair). Published
/// rows are frozen snapshots served verbatim; unpublished rows are ignored in
/// favor of live recomputation.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Leaderboard {
    pub leaderboard_id: Uuid,
    pub event_id: Uuid,
    pub track_id: Option<String>,
    #[sqlx(json)]
    pub entries: Vec<LeaderboardEntry>,
    pub last_updated_at: chrono::NaiveDateTime,
    pub is_published: bool,
}
