use serde::Serialize;
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

/// Resolved identity from the platform's auth layer. Used only as a foreign
/// key and for display enrichment; no role checks happen in this core.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct User {
    pub user_id: Uuid,
    pub display_name: String,
    pub avatar_url: Option<String>,
}
