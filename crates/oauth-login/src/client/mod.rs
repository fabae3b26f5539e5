//! Identity provider client.
//!
//! Performs the two outbound calls of the authorization code flow:
//! - exchange an authorization code for an access token
//! - fetch the authenticated user's profile
//!
//! Requests are bounded by explicit timeouts and are never retried.

use reqwest::Client;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use url::Url;

use crate::config::Config;
use crate::error::{ProviderError, ProviderResult};
use crate::models::{AccessToken, TokenResponse, UserProfile};

/// `User-Agent` sent on every request; the GitHub API rejects anonymous agents.
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Client for the provider's OAuth and user endpoints.
#[derive(Clone)]
pub struct ProviderClient {
    /// HTTP client.
    client: Client,

    client_id: String,
    client_secret: String,
    redirect_uri: String,

    /// Authorization endpoint (browser-facing).
    authorize_url: String,

    /// Token exchange endpoint.
    token_url: String,

    /// Authenticated-user endpoint.
    user_api_url: String,
}

impl ProviderClient {
    /// Create a new client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails.
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .build()?;

        Ok(Self {
            client,
            client_id: config.client_id.clone(),
            client_secret: config.client_secret.clone(),
            redirect_uri: config.redirect_uri.clone(),
            authorize_url: config.authorize_url.clone(),
            token_url: config.token_url.clone(),
            user_api_url: config.user_api_url.clone(),
        })
    }

    /// Build the URL the browser is sent to for consent.
    ///
    /// `state` is appended when given; apart from it the URL is the same on every call.
    ///
    /// # Errors
    ///
    /// Returns error if the configured authorization endpoint is not a valid URL.
    pub fn authorize_url(&self, state: Option<&str>) -> ProviderResult<Url> {
        let mut url = parse_url(&self.authorize_url)?;
        {
            let mut pairs = url.query_pairs_mut();
            pairs
                .append_pair("client_id", &self.client_id)
                .append_pair("redirect_uri", &self.redirect_uri);
            if let Some(state) = state {
                pairs.append_pair("state", state);
            }
        }
        Ok(url)
    }

    /// Exchange an authorization code for an access token.
    ///
    /// An empty `code` is sent as-is and left for the provider to reject.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] on network failure,
    /// [`ProviderError::Status`] on a non-success status,
    /// [`ProviderError::Decode`] on a malformed body, or
    /// [`ProviderError::MissingAccessToken`] if the body carries no token.
    pub async fn exchange_code(&self, code: &str) -> ProviderResult<AccessToken> {
        let mut url = parse_url(&self.token_url)?;
        url.query_pairs_mut()
            .append_pair("client_id", &self.client_id)
            .append_pair("client_secret", &self.client_secret)
            .append_pair("code", code);

        let response = self
            .client
            .post(url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::handle_response(response).await?;
        let token: TokenResponse = serde_json::from_slice(&body)?;

        token.into_access_token().inspect_err(|e| {
            tracing::debug!(error = %e, "Token endpoint returned no access token");
        })
    }

    /// Fetch the profile of the user the access token belongs to.
    ///
    /// # Errors
    ///
    /// Returns [`ProviderError::Transport`] on network failure,
    /// [`ProviderError::Status`] on a non-success status, or
    /// [`ProviderError::Decode`] on a malformed body.
    pub async fn fetch_profile(&self, access_token: &AccessToken) -> ProviderResult<UserProfile> {
        let url = parse_url(&self.user_api_url)?;

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, format!("token {}", access_token.secret()))
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let body = Self::handle_response(response).await?;
        serde_json::from_slice(&body).map_err(ProviderError::from)
    }

    /// Check the status and read the full body.
    async fn handle_response(response: reqwest::Response) -> ProviderResult<Vec<u8>> {
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status { status: status.as_u16(), body });
        }

        Ok(response.bytes().await?.to_vec())
    }
}

fn parse_url(raw: &str) -> ProviderResult<Url> {
    Url::parse(raw).map_err(|e| ProviderError::request(format!("{raw}: {e}")))
}

impl std::fmt::Debug for ProviderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderClient")
            .field("client_id", &self.client_id)
            .field("token_url", &self.token_url)
            .field("user_api_url", &self.user_api_url)
            .finish()
    }
}
