//! Error types for the OAuth login server.
//!
//! Uses `thiserror` for structured error handling with automatic `From` implementations.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Errors from the identity provider client.
#[derive(thiserror::Error, Debug)]
pub enum ProviderError {
    /// The outbound request could not be constructed.
    #[error("Invalid provider request: {0}")]
    Request(String),

    /// HTTP transport error (connection, DNS, TLS, body read, etc.)
    #[error("HTTP error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Provider answered with a non-success status.
    #[error("Unexpected status {status}: {body}")]
    Status {
        /// HTTP status code
        status: u16,
        /// Response body
        body: String,
    },

    /// JSON parsing error
    #[error("Failed to parse response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Token endpoint answered without an access token.
    #[error("No access token in response: {}", .error.as_deref().unwrap_or("unknown error"))]
    MissingAccessToken {
        /// Provider error code, e.g. `bad_verification_code`
        error: Option<String>,
        /// Provider error description
        description: Option<String>,
    },
}

impl ProviderError {
    /// Create a request construction error.
    #[must_use]
    pub fn request(message: impl Into<String>) -> Self {
        Self::Request(message.into())
    }

    /// Returns true if the failure happened on the wire rather than in the response.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        match self {
            Self::Transport(e) => !e.is_builder(),
            _ => false,
        }
    }
}

/// Errors terminating a login-flow request.
///
/// Every variant maps to a bare status code; no detail reaches the client.
#[derive(thiserror::Error, Debug)]
pub enum FlowError {
    /// Query or form data could not be parsed.
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// The `state` parameter is missing or does not match the state cookie.
    #[error("OAuth state mismatch")]
    StateMismatch,

    /// The provider redirected back with an error instead of a code.
    #[error("Authorization denied: {error}")]
    AuthorizationDenied {
        /// Provider error code, e.g. `access_denied`
        error: String,
        /// Provider error description
        description: Option<String>,
    },

    /// A configured provider endpoint is unusable.
    #[error("Provider misconfigured: {0}")]
    Configuration(#[source] ProviderError),

    /// Exchanging the authorization code failed.
    #[error("Token exchange failed: {0}")]
    ProviderExchange(#[source] ProviderError),

    /// Fetching the user profile failed.
    #[error("Profile fetch failed: {0}")]
    ProviderProfile(#[source] ProviderError),

    /// No session cookie on a request that needs one.
    #[error("Session cookie missing")]
    SessionCookieMissing,

    /// Profile could not be serialized.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl FlowError {
    /// HTTP status for this failure.
    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::MalformedRequest(_)
            | Self::StateMismatch
            | Self::AuthorizationDenied { .. }
            | Self::SessionCookieMissing => StatusCode::BAD_REQUEST,
            Self::ProviderExchange(e) if e.is_transport() => StatusCode::INTERNAL_SERVER_ERROR,
            Self::ProviderExchange(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::ProviderProfile(_) | Self::Serialization(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for FlowError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, status = status.as_u16(), "Login flow failed");
        } else {
            tracing::warn!(error = %self, status = status.as_u16(), "Login flow rejected");
        }
        status.into_response()
    }
}

/// Result type alias for provider operations.
pub type ProviderResult<T> = Result<T, ProviderError>;

/// Result type alias for flow handlers.
pub type FlowResult<T> = Result<T, FlowError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn decode_error() -> serde_json::Error {
        serde_json::from_str::<serde_json::Value>("{not json").unwrap_err()
    }

    #[test]
    fn test_request_errors_are_bad_request() {
        assert_eq!(FlowError::MalformedRequest("x".into()).status(), StatusCode::BAD_REQUEST);
        assert_eq!(FlowError::StateMismatch.status(), StatusCode::BAD_REQUEST);
        assert_eq!(FlowError::SessionCookieMissing.status(), StatusCode::BAD_REQUEST);
        let denied =
            FlowError::AuthorizationDenied { error: "access_denied".into(), description: None };
        assert_eq!(denied.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_exchange_response_errors_are_bad_request() {
        let missing = ProviderError::MissingAccessToken {
            error: Some("bad_verification_code".into()),
            description: None,
        };
        assert_eq!(FlowError::ProviderExchange(missing).status(), StatusCode::BAD_REQUEST);

        let decode = ProviderError::Decode(decode_error());
        assert_eq!(FlowError::ProviderExchange(decode).status(), StatusCode::BAD_REQUEST);

        let request = ProviderError::request("bad url");
        assert_eq!(FlowError::ProviderExchange(request).status(), StatusCode::BAD_REQUEST);

        let status = ProviderError::Status { status: 404, body: String::new() };
        assert_eq!(FlowError::ProviderExchange(status).status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_profile_errors_are_server_errors() {
        let decode = ProviderError::Decode(decode_error());
        assert_eq!(
            FlowError::ProviderProfile(decode).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            FlowError::Serialization(decode_error()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_missing_token_message_names_provider_error() {
        let err = ProviderError::MissingAccessToken {
            error: Some("bad_verification_code".into()),
            description: Some("The code passed is incorrect or expired.".into()),
        };
        assert!(err.to_string().contains("bad_verification_code"));
        assert!(!err.is_transport());
    }
}
