//! Login flow endpoint handlers.
//!
//! - `GET /login`: redirect to the provider's consent page
//! - `GET /token`: OAuth callback, exchanges the code and issues a session
//! - `GET /userinfo`: cached profile for the session cookie

use std::sync::Arc;

use axum::{
    extract::{RawQuery, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use axum_extra::extract::CookieJar;

use super::cookies::{self, STATE_COOKIE_NAME};
use super::session::issue_session;
use crate::error::{FlowError, FlowResult};
use crate::models::SessionToken;
use crate::server::transport::AppState;

// ─── Login ───────────────────────────────────────────────────────────────────

/// `GET /login`
///
/// Sends the browser to the provider with `client_id`, `redirect_uri` and a
/// fresh `state`, which is also pinned in a short-lived cookie.
pub async fn handle_login(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> FlowResult<Response> {
    let oauth_state = cookies::generate_state();
    let url = state
        .client
        .authorize_url(Some(&oauth_state))
        .map_err(FlowError::Configuration)?;

    let jar = jar.add(cookies::state_cookie(&oauth_state, state.config.state_ttl));

    tracing::debug!("Redirecting to provider authorization page");

    Ok((StatusCode::FOUND, jar, [(header::LOCATION, url.to_string())]).into_response())
}

// ─── Callback ────────────────────────────────────────────────────────────────

/// Parameters the provider sends back to the callback.
///
/// Repeated keys keep their first value.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
    pub error: Option<String>,
    pub error_description: Option<String>,
}

impl CallbackQuery {
    /// Parse a raw `application/x-www-form-urlencoded` query string.
    ///
    /// # Errors
    ///
    /// Returns [`FlowError::MalformedRequest`] for a `;` separator or a `%`
    /// not followed by two hex digits.
    pub fn parse(raw: &str) -> FlowResult<Self> {
        let mut query = Self::default();

        for segment in raw.split('&').filter(|s| !s.is_empty()) {
            if segment.contains(';') {
                return Err(FlowError::MalformedRequest(format!(
                    "invalid semicolon separator in query: {segment}"
                )));
            }
            if !has_valid_escapes(segment) {
                return Err(FlowError::MalformedRequest(format!(
                    "invalid percent-encoding in query: {segment}"
                )));
            }

            let Some((key, value)) = url::form_urlencoded::parse(segment.as_bytes()).next() else {
                continue;
            };
            let slot = match &*key {
                "code" => &mut query.code,
                "state" => &mut query.state,
                "error" => &mut query.error,
                "error_description" => &mut query.error_description,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }

        Ok(query)
    }
}

fn has_valid_escapes(segment: &str) -> bool {
    let bytes = segment.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            match bytes.get(i + 1..i + 3) {
                Some([hi, lo]) if hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit() => i += 3,
                _ => return false,
            }
        } else {
            i += 1;
        }
    }
    true
}

/// `GET /token`
///
/// Exchanges the authorization code, caches the profile under a new session
/// token, sets the session cookie and redirects to the landing page.
pub async fn handle_token(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
    RawQuery(query): RawQuery,
) -> FlowResult<Response> {
    let params = CallbackQuery::parse(query.as_deref().unwrap_or_default())?;

    if let Some(error) = params.error {
        return Err(FlowError::AuthorizationDenied {
            error,
            description: params.error_description,
        });
    }

    // Absent code goes to the provider as "" and fails there.
    let code = params.code.unwrap_or_default();

    verify_state(&jar, params.state.as_deref())?;

    let access_token = state
        .client
        .exchange_code(&code)
        .await
        .map_err(FlowError::ProviderExchange)?;

    let session = issue_session(&state.client, state.sessions.as_ref(), access_token)
        .await
        .map_err(FlowError::ProviderProfile)?;

    let jar = jar.remove(cookies::clear_state_cookie()).add(cookies::session_cookie(
        &state.config.session_cookie_name,
        session.as_str(),
        &state.config.cookie_domain,
        state.config.session_ttl,
    ));

    Ok((StatusCode::FOUND, jar, [(header::LOCATION, state.config.landing_page.clone())])
        .into_response())
}

/// The callback's `state` must be present and equal to the state cookie.
fn verify_state(jar: &CookieJar, received: Option<&str>) -> FlowResult<()> {
    let expected = jar.get(STATE_COOKIE_NAME).map(|c| c.value().to_owned());
    match (received, expected.as_deref()) {
        (Some(got), Some(want)) if !want.is_empty() && got == want => Ok(()),
        _ => Err(FlowError::StateMismatch),
    }
}

// ─── User Info ───────────────────────────────────────────────────────────────

/// `GET /userinfo`
///
/// Unknown session tokens are not an error: they render as an empty profile.
pub async fn handle_userinfo(
    State(state): State<Arc<AppState>>,
    jar: CookieJar,
) -> FlowResult<Response> {
    let cookie = jar
        .get(&state.config.session_cookie_name)
        .ok_or(FlowError::SessionCookieMissing)?;

    let token = SessionToken::from(cookie.value());
    let profile = state.sessions.get(&token).await;
    let body = serde_json::to_vec(&profile)?;

    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

#[cfg(test)]
mod tests {
    use axum_extra::extract::cookie::Cookie;

    use super::*;

    #[test]
    fn test_callback_query_takes_first_value() {
        let query = CallbackQuery::parse("code=a&code=b&state=s&state=t").unwrap();
        assert_eq!(query.code.as_deref(), Some("a"));
        assert_eq!(query.state.as_deref(), Some("s"));
    }

    #[test]
    fn test_callback_query_decodes_values() {
        let query =
            CallbackQuery::parse("error=access_denied&error_description=The+user+said%20no&x=1")
                .unwrap();
        assert_eq!(query.error.as_deref(), Some("access_denied"));
        assert_eq!(query.error_description.as_deref(), Some("The user said no"));
        assert_eq!(query.code, None);
    }

    #[test]
    fn test_callback_query_empty() {
        assert_eq!(CallbackQuery::parse("").unwrap(), CallbackQuery::default());
        assert_eq!(CallbackQuery::parse("code=").unwrap().code.as_deref(), Some(""));
    }

    #[test]
    fn test_callback_query_rejects_bad_escapes() {
        for raw in ["code=%zz", "code=abc%", "code=%4", "st%xte=s"] {
            assert!(
                matches!(CallbackQuery::parse(raw), Err(FlowError::MalformedRequest(_))),
                "{raw}"
            );
        }
        assert!(CallbackQuery::parse("code=%41%2f").is_ok());
    }

    #[test]
    fn test_callback_query_rejects_semicolons() {
        assert!(matches!(
            CallbackQuery::parse("code=a;state=s"),
            Err(FlowError::MalformedRequest(_))
        ));
    }

    #[test]
    fn test_verify_state_matches_cookie() {
        let jar = CookieJar::new().add(Cookie::new(STATE_COOKIE_NAME, "abc"));
        assert!(verify_state(&jar, Some("abc")).is_ok());
    }

    #[test]
    fn test_verify_state_rejects_mismatch() {
        let jar = CookieJar::new().add(Cookie::new(STATE_COOKIE_NAME, "abc"));
        assert!(matches!(verify_state(&jar, Some("abd")), Err(FlowError::StateMismatch)));
        assert!(matches!(verify_state(&jar, None), Err(FlowError::StateMismatch)));
    }

    #[test]
    fn test_verify_state_rejects_missing_cookie() {
        let jar = CookieJar::new();
        assert!(matches!(verify_state(&jar, Some("abc")), Err(FlowError::StateMismatch)));
    }

    #[test]
    fn test_verify_state_rejects_empty_values() {
        let jar = CookieJar::new().add(Cookie::new(STATE_COOKIE_NAME, ""));
        assert!(matches!(verify_state(&jar, Some("")), Err(FlowError::StateMismatch)));
    }
}
