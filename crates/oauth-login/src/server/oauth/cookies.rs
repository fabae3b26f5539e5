//! Session and anti-forgery cookies.

use std::time::Duration;

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::OffsetDateTime;

/// Name of the cookie carrying the anti-forgery `state` between `/login` and `/token`.
pub const STATE_COOKIE_NAME: &str = "oauth_state";

fn cookie_lifetime(ttl: Duration) -> time::Duration {
    time::Duration::try_from(ttl).unwrap_or(time::Duration::MAX)
}

/// Generate a random `state` value (256 bits, hex).
#[must_use]
pub fn generate_state() -> String {
    format!("{}{}", uuid::Uuid::new_v4().simple(), uuid::Uuid::new_v4().simple())
}

/// Create the session cookie.
///
/// Sets `Max-Age`, and `Expires` (now + ttl) when that date is representable.
/// An empty `domain` makes it a host-only cookie.
pub fn session_cookie(name: &str, token: &str, domain: &str, ttl: Duration) -> Cookie<'static> {
    let lifetime = cookie_lifetime(ttl);
    let mut builder = Cookie::build((name.to_string(), token.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(lifetime);
    if let Some(expires) = OffsetDateTime::now_utc().checked_add(lifetime) {
        builder = builder.expires(expires);
    }
    if !domain.is_empty() {
        builder = builder.domain(domain.to_string());
    }
    builder.build()
}

/// Create the short-lived state cookie.
pub fn state_cookie(state: &str, ttl: Duration) -> Cookie<'static> {
    Cookie::build((STATE_COOKIE_NAME, state.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(cookie_lifetime(ttl))
        .build()
}

/// Cookie that matches [`state_cookie`] for removal.
pub fn clear_state_cookie() -> Cookie<'static> {
    Cookie::build((STATE_COOKIE_NAME, "")).path("/").build()
}
