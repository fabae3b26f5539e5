//! Token endpoint payloads.

use serde::Deserialize;

use crate::error::{ProviderError, ProviderResult};

/// Body returned by the provider's token endpoint.
///
/// GitHub reports a rejected code with status 200 and the `error` fields
/// set, so every field is optional here and presence is checked by
/// [`TokenResponse::into_access_token`].
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,

    #[serde(default)]
    pub token_type: Option<String>,

    /// Comma-separated granted scopes.
    #[serde(default)]
    pub scope: Option<String>,

    #[serde(default)]
    pub error: Option<String>,

    #[serde(default)]
    pub error_description: Option<String>,

    #[serde(default)]
    pub error_uri: Option<String>,
}

impl TokenResponse {
    /// Extract the access token, treating a missing or empty value as a failure.
    ///
    /// The provider's `error` and `error_description` travel with the failure.
    pub fn into_access_token(self) -> ProviderResult<AccessToken> {
        match self.access_token {
            Some(token) if !token.is_empty() => Ok(AccessToken(token)),
            _ => Err(ProviderError::MissingAccessToken {
                error: self.error,
                description: self.error_description,
            }),
        }
    }
}

/// Bearer credential for the provider API.
///
/// Lives only for the duration of one callback request. `Debug` is redacted
/// so the token never reaches a log line.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wrap a raw token string.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Raw token value, for building the `Authorization` header.
    #[must_use]
    pub fn secret(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("AccessToken(***)")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_access_token_extracted() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"access_token":"gho_abc","token_type":"bearer","scope":"read:user"}"#,
        )
        .unwrap();
        let token = response.into_access_token().unwrap();
        assert_eq!(token.secret(), "gho_abc");
    }

    #[test]
    fn test_error_body_is_rejected() {
        let response: TokenResponse = serde_json::from_str(
            r#"{"error":"bad_verification_code","error_description":"The code passed is incorrect or expired."}"#,
        )
        .unwrap();
        match response.into_access_token().unwrap_err() {
            ProviderError::MissingAccessToken { error, description } => {
                assert_eq!(error.as_deref(), Some("bad_verification_code"));
                assert!(description.is_some());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_token_is_rejected() {
        let response: TokenResponse = serde_json::from_str(r#"{"access_token":""}"#).unwrap();
        assert!(response.into_access_token().is_err());
    }

    #[test]
    fn test_debug_redacts_token() {
        let token = AccessToken::new("gho_secret");
        assert!(!format!("{token:?}").contains("gho_secret"));
    }
}
