//! Web UI
//!
//! A single server-rendered page: topic selector, start button, results with
//! an inline audio player and a download link. The audio only lives inside the
//! rendered response.

mod page;
mod routes;

pub use page::{render_page, PageView};
pub use routes::DigestForm;

use crate::config::Config;
use crate::digest::DigestService;
use crate::themes::{load_themes, ThemeFile};
use crate::ConfigError;
use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<DigestService>,
    pub themes: Arc<ThemeFile>,
}

impl AppState {
    pub fn new(service: DigestService, themes: ThemeFile) -> Self {
        Self {
            service: Arc::new(service),
            themes: Arc::new(themes),
        }
    }
}

/// Builds the application router
pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(routes::index_handler))
        .route("/digest", post(routes::digest_handler))
        .route("/api/themes", get(routes::themes_handler))
        .route("/health", get(routes::health_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Binds `addr` and serves the UI until the process stops
pub async fn serve(state: AppState, addr: SocketAddr) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Web UI listening on http://{}", listener.local_addr()?);
    axum::serve(listener, build_app(state)).await
}

/// Loads the themes, builds the digest service and serves on `server.bind`
pub async fn serve_from_config(config: &Config) -> crate::Result<()> {
    let themes = load_themes(Path::new(&config.server.themes_path))?;
    let service = DigestService::from_config(config)?;
    let addr: SocketAddr = config.server.bind.parse().map_err(|_| {
        ConfigError::Validation(format!("invalid bind address: {}", config.server.bind))
    })?;

    serve(AppState::new(service, themes), addr).await?;
    Ok(())
}
