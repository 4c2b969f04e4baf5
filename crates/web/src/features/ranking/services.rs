use sqlx::PgPool;
use storage::{error::Result, services::ranking};
use uuid::Uuid;

/// Recompute rankings for an event; returns the number of submissions ranked.
pub async fn calculate_rankings(pool: &PgPool, event_id: Uuid) -> Result<u64> {
    ranking::calculate_rankings(pool, event_id).await
}
