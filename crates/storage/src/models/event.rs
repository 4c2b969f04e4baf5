use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Minimal event view consumed by the judging core. Event lifecycle is owned
/// by the platform; only `status = 'completed'` events feed the global
/// leaderboard.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct Event {
    pub event_id: Uuid,
    pub title: String,
    pub status: String,
    pub end_date: Option<chrono::NaiveDateTime>,
    pub created_at: chrono::NaiveDateTime,
}
