use serde::Serialize;
use utoipa::ToSchema;

/// Result of a ranking run: the number of submissions ranked.
#[derive(Debug, Serialize, ToSchema)]
pub struct RankingRunResponse {
    pub ranked: u64,
}
