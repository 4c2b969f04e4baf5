use chrono::{NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use crate::models::{Leaderboard, LeaderboardEntry};

/// Leaderboard returned to callers: either a frozen published snapshot
/// (`leaderboard_id` set, `is_published` true) or a live, non-persisted view.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardView {
    pub leaderboard_id: Option<Uuid>,
    pub event_id: Uuid,
    pub track_id: Option<String>,
    pub entries: Vec<LeaderboardEntry>,
    pub last_updated_at: NaiveDateTime,
    pub is_published: bool,
}

impl From<Leaderboard> for LeaderboardView {
    fn from(row: Leaderboard) -> Self {
        Self {
            leaderboard_id: Some(row.leaderboard_id),
            event_id: row.event_id,
            track_id: row.track_id,
            entries: row.entries,
            last_updated_at: row.last_updated_at,
            is_published: row.is_published,
        }
    }
}

impl LeaderboardView {
    /// A live view computed on the fly, never written to the store.
    pub fn live(event_id: Uuid, track_id: Option<String>, entries: Vec<LeaderboardEntry>) -> Self {
        Self {
            leaderboard_id: None,
            event_id,
            track_id,
            entries,
            last_updated_at: Utc::now().naive_utc(),
            is_published: false,
        }
    }
}

/// Optional track filter shared by the leaderboard endpoints.
#[derive(Debug, Deserialize, IntoParams)]
pub struct TrackQuery {
    pub track_id: Option<String>,
}

/// Query parameters for the cross-event top list.
#[derive(Debug, Deserialize, IntoParams)]
pub struct GlobalTopQuery {
    pub limit: Option<i64>,
}

/// One row of the cross-event top list: a podium finisher of a completed
/// event.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GlobalTopEntry {
    pub team_id: Uuid,
    pub team_name: String,
    pub project_name: String,
    pub event_title: String,
    pub rank: i32,
    pub score: f64,
    pub event_date: Option<NaiveDateTime>,
}
