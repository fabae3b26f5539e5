//! GitHub OAuth 2.0 login flow.
//!
//! Implements the client side of the Authorization Code Grant (RFC 6749 §4.1):
//! redirect to the provider, exchange the returned code, fetch the profile
//! and issue a cookie-backed session. The `state` parameter (RFC 6749 §10.12)
//! is round-tripped through a cookie.

pub mod cookies;
pub mod handlers;
pub mod session;
pub mod store;

pub use store::{MemorySessionStore, SessionStore};
