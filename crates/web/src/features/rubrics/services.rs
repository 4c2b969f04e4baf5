use sqlx::PgPool;
use storage::{
    dto::rubric::{CreateRubricRequest, UpdateRubricRequest},
    error::Result,
    models::{Rubric, RubricCriterion},
    repository::rubric::RubricRepository,
};
use uuid::Uuid;

/// Create the rubric for an event (or event/track pair).
pub async fn create_rubric(pool: &PgPool, req: CreateRubricRequest) -> Result<Rubric> {
    let criteria: Vec<RubricCriterion> =
        req.criteria.into_iter().map(RubricCriterion::from).collect();

    RubricRepository::new(pool)
        .create(req.event_id, req.track_id.as_deref(), criteria)
        .await
}

/// Replace a rubric's criteria wholesale.
pub async fn update_rubric(
    pool: &PgPool,
    rubric_id: Uuid,
    req: UpdateRubricRequest,
) -> Result<Rubric> {
    let criteria: Vec<RubricCriterion> =
        req.criteria.into_iter().map(RubricCriterion::from).collect();

    RubricRepository::new(pool).update(rubric_id, criteria).await
}

pub async fn get_rubric(pool: &PgPool, event_id: Uuid, track_id: Option<&str>) -> Result<Rubric> {
    RubricRepository::new(pool)
        .find_by_event_track(event_id, track_id)
        .await
}
