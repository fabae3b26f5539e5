//! User profile model matching the GitHub `/user` schema.

use serde::{Deserialize, Serialize};

/// Cached profile of an authenticated user.
///
/// A pass-through copy of the provider's response: nothing is validated
/// beyond JSON shape, and absent fields are omitted when serialized, so the
/// default profile renders as `{}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Account handle.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub login: Option<String>,

    /// Numeric account ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// GraphQL node ID.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub node_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gravatar_id: Option<String>,

    /// API URL of this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,

    /// Browser URL of this user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gists_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub starred_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscriptions_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organizations_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repos_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub events_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub received_events_url: Option<String>,

    /// Account type ("User", "Organization", "Bot").
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Whether the user is a site administrator.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_admin: Option<bool>,

    /// Display name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub blog: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    /// Public email, if the user exposes one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Biography.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter_username: Option<String>,

    /// Number of public repositories.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_repos: Option<i64>,

    /// Number of public gists.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_gists: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub followers: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub following: Option<i64>,

    /// Account creation timestamp (ISO 8601, kept verbatim).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,

    /// Last update timestamp (ISO 8601, kept verbatim).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

impl UserProfile {
    /// Returns true if no field was populated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Best name to show for this user: display name, then handle.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        self.name.as_deref().or(self.login.as_deref())
    }
}
