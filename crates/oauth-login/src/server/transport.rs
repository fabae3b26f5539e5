//! HTTP transport: router, shared state and the static asset fallback.

use std::sync::Arc;

use axum::{Json, Router, response::IntoResponse, routing::get};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use super::oauth::{SessionStore, handlers};
use crate::client::ProviderClient;
use crate::config::Config;

/// Shared state for HTTP handlers.
pub struct AppState {
    pub config: Config,
    pub client: ProviderClient,
    /// Injected session store.
    pub sessions: Arc<dyn SessionStore>,
}

impl AppState {
    /// Build state around an existing session store.
    ///
    /// # Errors
    ///
    /// Returns error if the provider client cannot be initialized.
    pub fn new(config: Config, sessions: Arc<dyn SessionStore>) -> anyhow::Result<Self> {
        let client = ProviderClient::new(&config)?;
        Ok(Self { config, client, sessions })
    }
}

impl std::fmt::Debug for AppState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppState")
            .field("config", &self.config)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}

/// Create the HTTP router.
///
/// Anything not matching an explicit route is served from the static directory.
pub fn create_router(state: AppState) -> Router {
    let assets = ServeDir::new(&state.config.static_dir);

    Router::new()
        .route("/health", get(health_check))
        .route("/login", get(handlers::handle_login))
        .route("/token", get(handlers::handle_token))
        .route("/userinfo", get(handlers::handle_userinfo))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

async fn health_check() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
