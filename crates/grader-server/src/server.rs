use axum::extract::DefaultBodyLimit;
use axum::Router;
use grader_core::Composer;
use std::sync::Arc;
use thiserror::Error;
use tower_http::trace::TraceLayer;

use crate::config::{ConfigError, ServerConfig};
use crate::routes;

/// Errors that stop the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Server I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Clone)]
pub struct AppState {
    /// Scorers are stateless, so one composer serves every request.
    pub composer: Arc<Composer>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            composer: Arc::new(Composer::new()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[tracing::instrument(level = "debug", skip_all)]
pub fn router(state: AppState, config: &ServerConfig) -> Router {
    routes::router()
        .layer(DefaultBodyLimit::max(config.max_body_bytes))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind and serve until Ctrl-C.
pub async fn serve(config: ServerConfig) -> Result<(), ServerError> {
    let addr = config.socket_addr()?;
    let app = router(AppState::new(), &config);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        max_body_bytes = config.max_body_bytes,
        "grader listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("grader stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("shutdown signal received");
}
