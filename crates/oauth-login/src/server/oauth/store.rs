//! Session store: session token → cached user profile.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::{SessionToken, UserProfile};

/// Storage for issued sessions.
///
/// Implementations must tolerate concurrent calls from independent request
/// tasks. Entries are never removed by the login flow.
#[async_trait::async_trait]
pub trait SessionStore: Send + Sync {
    /// Insert or overwrite the profile for `token`.
    async fn put(&self, token: SessionToken, profile: UserProfile);

    /// Look up the profile for `token`; unknown tokens yield an empty profile.
    async fn get(&self, token: &SessionToken) -> UserProfile;

    /// Number of stored sessions.
    async fn len(&self) -> usize;

    async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

/// In-memory session store. Lives for the process lifetime, no eviction.
#[derive(Clone, Default)]
pub struct MemorySessionStore {
    sessions: Arc<RwLock<HashMap<SessionToken, UserProfile>>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl SessionStore for MemorySessionStore {
    async fn put(&self, token: SessionToken, profile: UserProfile) {
        self.sessions.write().await.insert(token, profile);
    }

    async fn get(&self, token: &SessionToken) -> UserProfile {
        self.sessions.read().await.get(token).cloned().unwrap_or_default()
    }

    async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }
}

impl std::fmt::Debug for MemorySessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemorySessionStore").finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserProfile {
        UserProfile {
            login: Some("alice".into()),
            id: Some(42),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_put_then_get() {
        let store = MemorySessionStore::new();
        let token = SessionToken::generate();

        store.put(token.clone(), alice()).await;

        assert_eq!(store.get(&token).await, alice());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_unknown_token_yields_default() {
        let store = MemorySessionStore::new();
        let profile = store.get(&SessionToken::from("nonexistent-token")).await;
        assert!(profile.is_empty());
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_put_overwrites() {
        let store = MemorySessionStore::new();
        let token = SessionToken::from("fixed");

        store.put(token.clone(), UserProfile::default()).await;
        store.put(token.clone(), alice()).await;

        assert_eq!(store.get(&token).await.login.as_deref(), Some("alice"));
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn test_clones_share_state() {
        let store = MemorySessionStore::new();
        let handle = store.clone();
        let token = SessionToken::generate();

        handle.put(token.clone(), alice()).await;

        assert_eq!(store.get(&token).await.id, Some(42));
    }

    #[tokio::test]
    async fn test_concurrent_puts() {
        let store = MemorySessionStore::new();

        let tasks: Vec<_> = (0..32)
            .map(|_| {
                let store = store.clone();
                tokio::spawn(async move { store.put(SessionToken::generate(), alice()).await })
            })
            .collect();
        for task in tasks {
            task.await.unwrap();
        }

        assert_eq!(store.len().await, 32);
    }
}
