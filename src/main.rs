//! PathFinder backend entry point.

use std::sync::Arc;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::EnvFilter;

use pathfinder::adapters::ai::{
    FailoverAnalysisProvider, GroqAnalysisProvider, GroqConfig, HeuristicAnalysisProvider,
};
use pathfinder::adapters::auth::JwtSessionValidator;
use pathfinder::adapters::http::{build_router, decision::DecisionHandlers};
use pathfinder::adapters::postgres::PostgresDecisionRepository;
use pathfinder::application::handlers::decision::{
    AnalyzeDecisionHandler, DeleteDecisionHandler, GetDecisionHandler, ListDecisionsHandler,
    SaveDecisionHandler,
};
use pathfinder::config::AppConfig;
use pathfinder::ports::{AnalysisProvider, DecisionRepository, SessionValidator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    init_tracing(&config.server.log_level);
    config.validate()?;

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    let provider = build_provider(&config);
    let repository: Arc<dyn DecisionRepository> =
        Arc::new(PostgresDecisionRepository::new(pool));
    let validator: Arc<dyn SessionValidator> = Arc::new(
        JwtSessionValidator::new(config.auth.jwt_secret.clone())
            .with_leeway(config.auth.leeway_secs),
    );

    let handlers = DecisionHandlers::new(
        Arc::new(AnalyzeDecisionHandler::new(provider)),
        Arc::new(SaveDecisionHandler::new(repository.clone())),
        Arc::new(ListDecisionsHandler::new(repository.clone())),
        Arc::new(GetDecisionHandler::new(repository.clone())),
        Arc::new(DeleteDecisionHandler::new(repository)),
    );

    let app = build_router(handlers, validator, &config.server);

    let addr = config.server.socket_addr();
    tracing::info!(%addr, "starting PathFinder backend");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Selects the analysis provider from configuration.
///
/// With an API key the hosted provider runs first and the heuristic
/// generator covers its failures; without one the heuristic generator is
/// the whole provider.
fn build_provider(config: &AppConfig) -> Arc<dyn AnalysisProvider> {
    match &config.ai.groq_api_key {
        Some(key) => {
            let models = config.ai.model_candidates();
            let groq_config = GroqConfig::new(key.expose_secret().clone())
                .with_base_url(config.ai.base_url.clone())
                .with_models(models.clone())
                .with_timeout(config.ai.timeout())
                .with_max_tokens(config.ai.max_tokens)
                .with_temperature(config.ai.temperature);
            tracing::info!(?models, "using Groq analysis provider with heuristic fallback");
            Arc::new(FailoverAnalysisProvider::new(
                GroqAnalysisProvider::new(groq_config),
                HeuristicAnalysisProvider::new(),
            ))
        }
        None => {
            tracing::info!("no provider API key configured; using heuristic analysis");
            Arc::new(HeuristicAnalysisProvider::new())
        }
    }
}

fn init_tracing(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}
