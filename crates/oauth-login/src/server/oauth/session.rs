//! Session issuance after a successful code exchange.

use crate::client::ProviderClient;
use crate::error::ProviderResult;
use crate::models::{AccessToken, SessionToken};

use super::store::SessionStore;

/// Fetch the profile for `access_token`, store it under a fresh session token and return the token.
///
/// Nothing is stored if the profile fetch fails. The access token is dropped here.
pub async fn issue_session(
    client: &ProviderClient,
    store: &dyn SessionStore,
    access_token: AccessToken,
) -> ProviderResult<SessionToken> {
    let profile = client.fetch_profile(&access_token).await?;
    let token = SessionToken::generate();

    // The session token is a bearer credential and stays out of the logs.
    tracing::info!(login = profile.login.as_deref().unwrap_or("-"), "Issued session");

    store.put(token.clone(), profile).await;
    Ok(token)
}
