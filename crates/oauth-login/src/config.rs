//! Configuration for the OAuth login server.

use std::path::PathBuf;
use std::time::Duration;

/// Provider and server defaults.
pub mod api {
    use std::time::Duration;

    /// GitHub authorization endpoint (browser-facing).
    pub const AUTHORIZE_URL: &str = "https://github.com/login/oauth/authorize";

    /// GitHub token endpoint.
    pub const TOKEN_URL: &str = "https://github.com/login/oauth/access_token";

    /// GitHub authenticated-user endpoint.
    pub const USER_API_URL: &str = "https://api.github.com/user";

    /// Callback URI; must match the OAuth app registration exactly.
    pub const REDIRECT_URI: &str = "http://localhost:8080/token";

    /// Listening port.
    pub const PORT: u16 = 8080;

    /// Name of the session cookie.
    pub const SESSION_COOKIE_NAME: &str = "test";

    /// Domain attribute of the session cookie.
    pub const COOKIE_DOMAIN: &str = "localhost";

    /// Session cookie lifetime (1 hour).
    pub const SESSION_TTL: Duration = Duration::from_secs(3600);

    /// Lifetime of the anti-forgery state cookie (10 minutes).
    pub const STATE_TTL: Duration = Duration::from_secs(600);

    /// Where the browser lands after a successful login.
    pub const LANDING_PAGE: &str = "/index.html";

    /// Directory holding the prebuilt front-end.
    pub const STATIC_DIR: &str = "static";

    /// Outbound request timeout.
    pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

    /// Outbound connection timeout.
    pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);
}

/// Server configuration.
#[derive(Clone)]
pub struct Config {
    /// OAuth app client ID.
    pub client_id: String,

    /// OAuth app client secret.
    pub client_secret: String,

    /// Registered callback URI.
    pub redirect_uri: String,

    /// Provider authorization endpoint.
    pub authorize_url: String,

    /// Provider token endpoint.
    pub token_url: String,

    /// Provider user-profile endpoint.
    pub user_api_url: String,

    /// HTTP listening port.
    pub port: u16,

    /// Session cookie name.
    pub session_cookie_name: String,

    /// Session cookie domain.
    pub cookie_domain: String,

    /// Session cookie lifetime.
    pub session_ttl: Duration,

    /// State cookie lifetime.
    pub state_ttl: Duration,

    /// Redirect target after login.
    pub landing_page: String,

    /// Static asset directory.
    pub static_dir: PathBuf,

    /// Outbound request timeout.
    pub request_timeout: Duration,

    /// Outbound connection timeout.
    pub connect_timeout: Duration,
}

impl Config {
    /// Create a configuration for the given OAuth app credentials.
    ///
    /// Everything else uses the GitHub endpoints and local defaults.
    #[must_use]
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            redirect_uri: api::REDIRECT_URI.to_string(),
            authorize_url: api::AUTHORIZE_URL.to_string(),
            token_url: api::TOKEN_URL.to_string(),
            user_api_url: api::USER_API_URL.to_string(),
            port: api::PORT,
            session_cookie_name: api::SESSION_COOKIE_NAME.to_string(),
            cookie_domain: api::COOKIE_DOMAIN.to_string(),
            session_ttl: api::SESSION_TTL,
            state_ttl: api::STATE_TTL,
            landing_page: api::LANDING_PAGE.to_string(),
            static_dir: PathBuf::from(api::STATIC_DIR),
            request_timeout: api::REQUEST_TIMEOUT,
            connect_timeout: api::CONNECT_TIMEOUT,
        }
    }

    /// Create a test configuration pointing every provider endpoint at a mock server.
    #[must_use]
    pub fn for_testing(base_url: &str) -> Self {
        Self {
            authorize_url: format!("{}/login/oauth/authorize", base_url),
            token_url: format!("{}/login/oauth/access_token", base_url),
            user_api_url: format!("{}/user", base_url),
            request_timeout: Duration::from_secs(5),
            connect_timeout: Duration::from_secs(2),
            ..Self::new("test-client-id", "test-client-secret")
        }
    }

    /// Create configuration from environment variables.
    ///
    /// `GITHUB_CLIENT_ID` and `GITHUB_CLIENT_SECRET` are required; the rest
    /// fall back to the defaults in [`api`].
    ///
    /// # Errors
    ///
    /// Returns error if a required variable is missing or a value is invalid.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_vars(|name| std::env::var(name).ok())
    }

    /// Create configuration from an arbitrary variable source.
    ///
    /// # Errors
    ///
    /// Same as [`Config::from_env`].
    pub fn from_vars(var: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let required = |name: &str| var(name).ok_or_else(|| anyhow::anyhow!("{name} is required"));

        let client_id = required("GITHUB_CLIENT_ID")?;
        let client_secret = required("GITHUB_CLIENT_SECRET")?;
        let mut config = Self::new(client_id, client_secret);

        if let Some(uri) = var("OAUTH_REDIRECT_URI") {
            config.redirect_uri = uri;
        }
        if let Some(url) = var("GITHUB_AUTHORIZE_URL") {
            config.authorize_url = url;
        }
        if let Some(url) = var("GITHUB_TOKEN_URL") {
            config.token_url = url;
        }
        if let Some(url) = var("GITHUB_USER_API_URL") {
            config.user_api_url = url;
        }
        if let Some(port) = var("PORT") {
            config.port = port
                .parse()
                .map_err(|e| anyhow::anyhow!("PORT must be a valid port number: {e}"))?;
        }
        if let Some(name) = var("SESSION_COOKIE_NAME") {
            config.session_cookie_name = name;
        }
        if let Some(domain) = var("COOKIE_DOMAIN") {
            config.cookie_domain = domain;
        }
        if let Some(dir) = var("STATIC_DIR") {
            config.static_dir = PathBuf::from(dir);
        }

        config.validate()?;
        Ok(config)
    }

    /// Check the values the provider will compare against its app registration.
    ///
    /// # Errors
    ///
    /// Returns error if credentials are empty or an endpoint is not a valid URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.client_id.trim().is_empty() {
            anyhow::bail!("client id must not be empty");
        }
        if self.client_secret.trim().is_empty() {
            anyhow::bail!("client secret must not be empty");
        }
        if self.session_cookie_name.trim().is_empty() {
            anyhow::bail!("session cookie name must not be empty");
        }
        for (name, value) in [
            ("redirect_uri", &self.redirect_uri),
            ("authorize_url", &self.authorize_url),
            ("token_url", &self.token_url),
            ("user_api_url", &self.user_api_url),
        ] {
            url::Url::parse(value).map_err(|e| anyhow::anyhow!("{name} is not a valid URL: {e}"))?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("client_id", &self.client_id)
            .field("redirect_uri", &self.redirect_uri)
            .field("authorize_url", &self.authorize_url)
            .field("token_url", &self.token_url)
            .field("user_api_url", &self.user_api_url)
            .field("port", &self.port)
            .field("session_cookie_name", &self.session_cookie_name)
            .field("cookie_domain", &self.cookie_domain)
            .field("static_dir", &self.static_dir)
            .finish()
    }
}
