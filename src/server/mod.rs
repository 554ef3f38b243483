//! HTTP surface: an upload form and the endpoint that turns an uploaded
//! spreadsheet into a region report download.

mod config;
mod error;
mod handlers;
mod upload;

use axum::{extract::DefaultBodyLimit, routing::get, Router};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

pub use config::ServerConfig;
pub use error::UploadError;
pub use handlers::{health_check, index, upload_report};
pub use upload::{has_spreadsheet_extension, report_filename, secure_filename, SPREADSHEET_EXTENSIONS};

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes();

    Router::new()
        .route("/", get(index).post(upload_report))
        .route("/health", get(health_check))
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Creates the upload directory and serves until the listener fails.
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    use anyhow::Context;

    tokio::fs::create_dir_all(&config.upload_dir)
        .await
        .with_context(|| {
            format!(
                "Unable to create upload directory: {}",
                config.upload_dir.display()
            )
        })?;

    let addr = config.bind;
    let upload_dir = config.upload_dir.clone();
    let app = build_router(AppState::new(config));

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Unable to bind {}", addr))?;

    tracing::info!("Sales report service listening on http://{}", addr);
    tracing::info!("Uploads stored in {}", upload_dir.display());

    axum::serve(listener, app).await?;

    Ok(())
}
