use sqlx::PgPool;
use storage::{
    dto::scoring::{SubmissionScore, SubmitScoreRequest},
    error::Result,
    models::Score,
    repository::score::ScoreRepository,
    services::scoring,
};
use uuid::Uuid;

/// Record a judge's score, upserting on the (submission, judge) pair.
pub async fn submit_score(pool: &PgPool, req: SubmitScoreRequest) -> Result<Uuid> {
    scoring::submit_score(pool, req).await
}

pub async fn get_submission_scores(
    pool: &PgPool,
    submission_id: Uuid,
) -> Result<Vec<SubmissionScore>> {
    ScoreRepository::new(pool).list_by_submission(submission_id).await
}

pub async fn get_judge_scores(pool: &PgPool, event_id: Uuid, judge_id: Uuid) -> Result<Vec<Score>> {
    ScoreRepository::new(pool)
        .list_by_judge_and_event(event_id, judge_id)
        .await
}
