// src/bin/api_server.rs

use review_sentiment::infra::config::ServerConfig;
use review_sentiment::transport;
use review_sentiment::{JsonStore, ReviewService, SentimentModel};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = ServerConfig::from_env()?;

    // --- Model ---
    info!(
        model = %config.model_path.display(),
        vectorizer = %config.vectorizer_path.display(),
        "loading model and vectorizer"
    );
    let model = Arc::new(SentimentModel::load(&config.model_path, &config.vectorizer_path)?);
    info!(
        fingerprint = model.fingerprint(),
        vocabulary = model.vocabulary_size(),
        "model loaded"
    );

    // --- Datastore ---
    let store = JsonStore::open(&config.data_path).await?;
    info!(path = %store.path().display(), "review datastore ready");

    let app_state = transport::http::AppState::new(ReviewService::new(store, model));

    // --- API Server ---
    let app = transport::http::create_router(app_state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()));
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    info!("API server listening on http://{}", config.bind_addr);
    info!("Swagger UI available at http://{}/swagger-ui", config.bind_addr);

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            info!("shutdown signal received (Ctrl+C)");
        }
    }

    Ok(())
}
