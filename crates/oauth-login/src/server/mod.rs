//! HTTP server hosting the login flow and the front-end.

pub mod oauth;
pub mod transport;

use std::net::SocketAddr;
use std::sync::Arc;

use self::oauth::{MemorySessionStore, SessionStore};
use self::transport::AppState;
use crate::config::Config;

/// Login server.
pub struct LoginServer {
    state: AppState,
}

impl LoginServer {
    /// Create a server backed by a fresh in-memory session store.
    ///
    /// # Errors
    ///
    /// Returns error if the provider client cannot be initialized.
    pub fn new(config: Config) -> anyhow::Result<Self> {
        Self::with_store(config, Arc::new(MemorySessionStore::new()))
    }

    /// Create a server around the given session store.
    ///
    /// # Errors
    ///
    /// Returns error if the provider client cannot be initialized.
    pub fn with_store(config: Config, sessions: Arc<dyn SessionStore>) -> anyhow::Result<Self> {
        Ok(Self { state: AppState::new(config, sessions)? })
    }

    /// Run the HTTP server until Ctrl+C.
    ///
    /// # Errors
    ///
    /// Returns error on bind or server failure.
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = SocketAddr::from(([0, 0, 0, 0], self.state.config.port));
        let static_dir = self.state.config.static_dir.clone();
        let router = transport::create_router(self.state);

        tracing::info!(%addr, static_dir = %static_dir.display(), "HTTP server listening");

        let listener = tokio::net::TcpListener::bind(addr).await?;
        axum::serve(listener, router).with_graceful_shutdown(shutdown_signal()).await?;

        tracing::info!("HTTP server shut down");
        Ok(())
    }
}

impl std::fmt::Debug for LoginServer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginServer").field("port", &self.state.config.port).finish()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Received shutdown signal");
}
