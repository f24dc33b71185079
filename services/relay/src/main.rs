mod config;
mod error;
mod provider;
mod provider_hf;
mod routes_chat;
mod routes_meta;
mod state;
mod store;

use anyhow::{Context, Result};
use axum::http::{header, Method};
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tracing::info;

use config::AppConfig;
use provider::ChatProvider;
use provider_hf::HfRouterProvider;
use state::{AppState, SharedState};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cfg = AppConfig::from_env()?;

    let provider = HfRouterProvider::from_config(&cfg);
    let pinfo = provider.info();
    info!(provider = %pinfo.name, model = %pinfo.model, "provider configured");
    let state = Arc::new(AppState::new(cfg.clone(), Box::new(provider)));

    if let Some(dir) = &cfg.data_dir {
        let dataset = store::load_dataset(dir)
            .await
            .context("Failed to load dataset")?;
        info!(collections = dataset.len(), "dataset ready");
        state.replace_dataset(dataset).await;
    }

    let app = app(state);

    info!("GIA relay listening on http://{}", cfg.bind_addr);
    info!(model = %cfg.model, "using Hugging Face router");
    let listener = tokio::net::TcpListener::bind(&cfg.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", cfg.bind_addr))?;
    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}

fn app(state: SharedState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE]);

    Router::new()
        .route("/", get(routes_meta::index))
        .route("/api/health", get(routes_meta::health))
        .route("/api/chat", post(routes_chat::chat_complete))
        .layer(cors)
        .with_state(state)
}
