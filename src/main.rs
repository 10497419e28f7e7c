use anyhow::Result;
use axum::Router;
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use docsight::services::llm::LlmClient;
use docsight::{modules, AppState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let state = AppState {
        llm: LlmClient::new(),
    };

    let app = Router::new()
        .merge(modules::health::routes::routes())
        .merge(modules::chat::routes::routes())
        .merge(modules::insight::routes::routes())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port = std::env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("docsight listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await?;

    Ok(())
}
