use anyhow::Context;
use axum::{Extension, Router};
use storage::Database;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod config;
mod error;
mod features;
mod middleware;

use config::Config;
use middleware::auth::ApiKeys;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::rubrics::handlers::create_rubric,
        features::rubrics::handlers::update_rubric,
        features::rubrics::handlers::get_rubric,
        features::scoring::handlers::submit_score,
        features::scoring::handlers::get_submission_scores,
        features::scoring::handlers::get_judge_scores,
        features::assignments::handlers::assign_submissions,
        features::assignments::handlers::list_assignments,
        features::assignments::handlers::get_assignment_detail,
        features::ranking::handlers::calculate_rankings,
        features::leaderboard::handlers::get_leaderboard,
        features::leaderboard::handlers::publish_leaderboard,
        features::leaderboard::handlers::unpublish_leaderboard,
        features::leaderboard::handlers::get_global_top,
    ),
    components(
        schemas(
            storage::dto::rubric::CreateRubricRequest,
            storage::dto::rubric::UpdateRubricRequest,
            storage::dto::rubric::CriterionInput,
            storage::dto::scoring::SubmitScoreRequest,
            storage::dto::scoring::ScoreEntryInput,
            storage::dto::scoring::SubmitScoreResponse,
            storage::dto::scoring::SubmissionScore,
            storage::dto::scoring::JudgeInfo,
            storage::dto::assignment::AssignSubmissionsRequest,
            storage::dto::assignment::AssignmentWithJudge,
            storage::dto::assignment::AssignmentDetail,
            storage::dto::assignment::AssignedSubmission,
            storage::dto::assignment::TeamInfo,
            storage::dto::ranking::RankingRunResponse,
            storage::dto::leaderboard::LeaderboardView,
            storage::dto::leaderboard::GlobalTopEntry,
            storage::models::Rubric,
            storage::models::RubricCriterion,
            storage::models::Score,
            storage::models::ScoreEntry,
            storage::models::Assignment,
            storage::models::Submission,
            storage::models::Leaderboard,
            storage::models::LeaderboardEntry,
            storage::models::Team,
            storage::models::User,
            storage::models::Event,
        )
    ),
    tags(
        (name = "rubrics", description = "Weighted-criteria rubric management"),
        (name = "scoring", description = "Judge score submission and reads"),
        (name = "assignments", description = "Judge-to-submission assignment tracking"),
        (name = "rankings", description = "Ranking computation"),
        (name = "leaderboards", description = "Leaderboard views, publishing and the global top"),
    ),
    modifiers(&SecurityAddon)
)]
struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                utoipa::openapi::security::SecurityScheme::Http(
                    utoipa::openapi::security::HttpBuilder::new()
                        .scheme(utoipa::openapi::security::HttpAuthScheme::Bearer)
                        .bearer_format("API Key")
                        .build(),
                ),
            )
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("Starting Trove judging API");

    let config = Config::from_env().context("Failed to load API configuration")?;
    tracing::info!("Configuration loaded successfully");

    tracing::info!(
        "Connecting to database at: {}",
        config
            .database_url
            .split('@')
            .next_back()
            .unwrap_or("unknown")
    );
    let db = Database::new(&config.database_url)
        .await
        .context("Failed to initialize database")?;
    tracing::info!("Database connection established");

    tracing::info!("Running database migrations");
    db.run_migrations()
        .await
        .context("Failed to run migrations")?;
    tracing::info!("Database migrations completed successfully");

    let api_keys = ApiKeys::from_comma_separated(&config.api_keys);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .nest("/api/rubrics", features::rubrics::routes::routes())
        .nest("/api/scores", features::scoring::routes::routes())
        .nest("/api/assignments", features::assignments::routes::routes())
        .nest("/api/rankings", features::ranking::routes::routes())
        .nest("/api/leaderboards", features::leaderboard::routes::routes())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .layer(Extension(api_keys))
        .layer(cors)
        .with_state(db);

    let bind_address = format!("{}:{}", config.host, config.port);
    tracing::info!("Starting server at http://{}", bind_address);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", bind_address);

    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {}", bind_address))?;

    axum::serve(listener, app).await?;

    Ok(())
}
