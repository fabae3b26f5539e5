//! Property-based tests for the provider payload models.

use oauth_login::models::{SessionToken, TokenResponse, UserProfile};
use proptest::prelude::*;

fn arb_profile() -> impl Strategy<Value = UserProfile> {
    (
        proptest::option::of("[a-zA-Z0-9-]{1,39}"),
        proptest::option::of(any::<i64>()),
        proptest::option::of("\\PC{0,40}"),
        proptest::option::of(prop_oneof![Just("User"), Just("Organization"), Just("Bot")]),
        proptest::option::of(any::<bool>()),
        proptest::option::of(0i64..100_000),
    )
        .prop_map(|(login, id, name, account_type, site_admin, public_repos)| UserProfile {
            login,
            id,
            name,
            account_type: account_type.map(str::to_string),
            site_admin,
            public_repos,
            ..UserProfile::default()
        })
}

proptest! {
    /// Serializing a cached profile and reading it back loses nothing.
    #[test]
    fn profile_survives_json(profile in arb_profile()) {
        let json = serde_json::to_string(&profile).unwrap();
        let back: UserProfile = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, profile);
    }

    /// Absent fields never appear as `null`.
    #[test]
    fn profile_omits_absent_fields(profile in arb_profile()) {
        let value = serde_json::to_value(&profile).unwrap();
        let object = value.as_object().unwrap();
        prop_assert!(object.values().all(|v| !v.is_null()));
        prop_assert_eq!(object.is_empty(), profile.is_empty());
    }

    /// Unknown provider fields are tolerated.
    #[test]
    fn profile_ignores_unknown_fields(key in "x_[a-z]{1,10}", value in any::<i64>()) {
        let json = format!(r#"{{"login":"octocat","{key}":{value}}}"#);
        let profile: UserProfile = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(profile.login.as_deref(), Some("octocat"));
    }

    /// A non-empty `access_token` is always extracted verbatim.
    #[test]
    fn token_response_yields_present_token(token in "[a-zA-Z0-9_]{1,64}") {
        let json = serde_json::json!({ "access_token": token, "token_type": "bearer" });
        let response: TokenResponse = serde_json::from_value(json).unwrap();
        let access = response.into_access_token().unwrap();
        prop_assert_eq!(access.secret(), token.as_str());
    }

    /// Without a token the provider's error code is carried along.
    #[test]
    fn token_response_error_without_token(code in "[a-z_]{1,30}") {
        let json = serde_json::json!({ "error": code });
        let response: TokenResponse = serde_json::from_value(json).unwrap();
        let err = response.into_access_token().unwrap_err();
        prop_assert!(err.to_string().contains(&code));
    }

    /// Session tokens are usable as cookie values.
    #[test]
    fn session_tokens_are_cookie_safe(_seed in any::<u8>()) {
        let token = SessionToken::generate();
        prop_assert!(token.as_str().chars().all(|c| c.is_ascii_hexdigit() || c == '-'));
        prop_assert_eq!(token.as_str().len(), 36);
    }
}
