use sqlx::PgPool;
use storage::{
    dto::leaderboard::{GlobalTopEntry, LeaderboardView},
    error::Result,
    models::Leaderboard,
    services::leaderboard,
};
use uuid::Uuid;

/// Published snapshot when one exists, live view otherwise.
pub async fn get_by_event(
    pool: &PgPool,
    event_id: Uuid,
    track_id: Option<&str>,
) -> Result<LeaderboardView> {
    leaderboard::get_by_event(pool, event_id, track_id).await
}

pub async fn publish(pool: &PgPool, event_id: Uuid, track_id: Option<&str>) -> Result<Leaderboard> {
    leaderboard::publish(pool, event_id, track_id).await
}

pub async fn unpublish(pool: &PgPool, event_id: Uuid, track_id: Option<&str>) -> Result<()> {
    leaderboard::unpublish(pool, event_id, track_id).await
}

pub async fn global_top(pool: &PgPool, limit: Option<i64>) -> Result<Vec<GlobalTopEntry>> {
    leaderboard::global_top(pool, limit).await
}
