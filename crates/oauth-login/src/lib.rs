//! OAuth Login Server
//!
//! Server side of a "Login with GitHub" flow: redirects the browser to the
//! provider, exchanges the returned authorization code for an access token,
//! fetches the user's profile and hands the browser an opaque session cookie
//! mapped to the cached profile.
//!
//! # Endpoints
//!
//! - `GET /login`: 302 to the provider's authorization page
//! - `GET /token`: OAuth callback, sets the session cookie
//! - `GET /userinfo`: cached profile for the session cookie
//! - everything else: static front-end files
//!
//! # Example
//!
//! ```no_run
//! use oauth_login::{config::Config, server::LoginServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env()?;
//!     LoginServer::new(config)?.run().await
//! }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod server;

pub use client::ProviderClient;
pub use config::Config;
pub use error::{FlowError, ProviderError};
pub use server::LoginServer;
pub use server::oauth::{MemorySessionStore, SessionStore};
