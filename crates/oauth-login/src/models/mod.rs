//! Data models for the login flow.
//!
//! Provider payloads use `#[serde(default)]` on every field so that absent
//! or `null` values decode to `None` instead of failing.

mod profile;
mod session;
mod token;

pub use profile::UserProfile;
pub use session::SessionToken;
pub use token::{AccessToken, TokenResponse};
