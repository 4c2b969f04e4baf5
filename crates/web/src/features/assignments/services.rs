use sqlx::PgPool;
use storage::{
    dto::assignment::{AssignSubmissionsRequest, AssignmentDetail, AssignmentWithJudge},
    error::Result,
    models::Assignment,
    repository::assignment::AssignmentRepository,
};
use uuid::Uuid;

/// Assign submissions to a judge, replacing any previous list and
/// reconciling the completion counter against it.
pub async fn assign_submissions(
    pool: &PgPool,
    req: &AssignSubmissionsRequest,
) -> Result<Assignment> {
    AssignmentRepository::new(pool)
        .upsert(
            req.event_id,
            req.judge_id,
            &req.submission_ids,
            req.track_id.as_deref(),
        )
        .await
}

pub async fn list_assignments(pool: &PgPool, event_id: Uuid) -> Result<Vec<AssignmentWithJudge>> {
    AssignmentRepository::new(pool).list_by_event(event_id).await
}

pub async fn get_assignment_detail(
    pool: &PgPool,
    event_id: Uuid,
    judge_id: Uuid,
) -> Result<AssignmentDetail> {
    AssignmentRepository::new(pool)
        .find_detail(event_id, judge_id)
        .await
}
