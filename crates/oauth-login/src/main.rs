//! OAuth Login Server - Entry Point

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use oauth_login::{config::Config, server::LoginServer};

#[derive(Parser, Debug)]
#[command(name = "oauth-login")]
#[command(about = "Login-with-GitHub server with cookie-backed sessions")]
#[command(version)]
struct Cli {
    /// OAuth app client ID
    #[arg(long, env = "GITHUB_CLIENT_ID")]
    client_id: String,

    /// OAuth app client secret
    #[arg(long, env = "GITHUB_CLIENT_SECRET", hide_env_values = true)]
    client_secret: String,

    /// Callback URI registered with the OAuth app
    #[arg(long, env = "OAUTH_REDIRECT_URI", default_value = "http://localhost:8080/token")]
    redirect_uri: String,

    /// Provider authorization endpoint
    #[arg(
        long,
        env = "GITHUB_AUTHORIZE_URL",
        default_value = "https://github.com/login/oauth/authorize"
    )]
    authorize_url: String,

    /// Provider token endpoint
    #[arg(
        long,
        env = "GITHUB_TOKEN_URL",
        default_value = "https://github.com/login/oauth/access_token"
    )]
    token_url: String,

    /// Provider user endpoint
    #[arg(long, env = "GITHUB_USER_API_URL", default_value = "https://api.github.com/user")]
    user_api_url: String,

    /// HTTP server port
    #[arg(long, default_value = "8080", env = "PORT")]
    port: u16,

    /// Session cookie name
    #[arg(long, default_value = "test", env = "SESSION_COOKIE_NAME")]
    session_cookie_name: String,

    /// Session cookie domain (empty for a host-only cookie)
    #[arg(long, default_value = "localhost", env = "COOKIE_DOMAIN")]
    cookie_domain: String,

    /// Directory with the prebuilt front-end
    #[arg(long, default_value = "static", env = "STATIC_DIR")]
    static_dir: PathBuf,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

impl Cli {
    fn into_config(self) -> Config {
        let mut config = Config::new(self.client_id, self.client_secret);
        config.redirect_uri = self.redirect_uri;
        config.authorize_url = self.authorize_url;
        config.token_url = self.token_url;
        config.user_api_url = self.user_api_url;
        config.port = self.port;
        config.session_cookie_name = self.session_cookie_name;
        config.cookie_domain = self.cookie_domain;
        config.static_dir = self.static_dir;
        config
    }
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact())
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    dotenv::dotenv().ok();

    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = cli.into_config();
    config.validate()?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        port = config.port,
        redirect_uri = %config.redirect_uri,
        "Starting OAuth login server"
    );

    LoginServer::new(config)?.run().await
}
