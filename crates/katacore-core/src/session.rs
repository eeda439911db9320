//! Visitor sessions.
//!
//! Pages that need to know who is browsing depend on [`SessionProvider`],
//! the current-session accessor, and never on a concrete store. The server
//! injects a provider through its application state; tests substitute
//! their own.
//!
//! [`MemorySessionStore`] is the provider the site ships with. Tokens are
//! SHA-256 hashed before they are used as map keys, so the map never holds
//! a usable cookie value.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::error::SessionError;

/// Identity attached to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub name: Option<String>,
    pub email: Option<String>,
}

/// An authenticated visitor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires_at: DateTime<Utc>,
}

impl Session {
    /// Name to greet the visitor with: the display name, else the email.
    #[must_use]
    pub fn display_name(&self) -> &str {
        non_blank(self.user.name.as_deref())
            .or_else(|| non_blank(self.user.email.as_deref()))
            .unwrap_or_default()
    }

    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at <= now
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Access to the current visitor's session.
#[async_trait::async_trait]
pub trait SessionProvider: Send + Sync + 'static {
    /// Resolve the session for a token taken from the request.
    ///
    /// Returns `None` when there is no token, the token is unknown, or the
    /// session has expired.
    async fn current_session(&self, token: Option<&str>) -> Option<Session>;
}

/// Hash a session token for use as a map key.
#[must_use]
pub fn hash_token(token: &str) -> String {
    hex::encode(Sha256::digest(token.as_bytes()))
}

/// In-memory session store.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    sessions: RwLock<HashMap<String, Session>>,
}

impl MemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Open a session and return the token the visitor presents later.
    ///
    /// Blank names and emails are stored as absent.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError::MissingIdentity`] if neither a name nor an
    /// email is given and [`SessionError::InvalidTtl`] for a lifetime that
    /// is not positive or pushes the expiry past the representable range.
    pub async fn create(&self, user: SessionUser, ttl: Duration) -> Result<String, SessionError> {
        if ttl <= Duration::zero() {
            return Err(SessionError::InvalidTtl {
                reason: format!("{}s is not a positive lifetime", ttl.num_seconds()),
            });
        }

        let user = SessionUser {
            name: non_blank(user.name.as_deref()).map(|s| s.trim().to_owned()),
            email: non_blank(user.email.as_deref()).map(|s| s.trim().to_owned()),
        };
        if user.name.is_none() && user.email.is_none() {
            return Err(SessionError::MissingIdentity);
        }

        let expires_at = Utc::now().checked_add_signed(ttl).ok_or_else(|| {
            SessionError::InvalidTtl {
                reason: format!("{}s overflows the session expiry", ttl.num_seconds()),
            }
        })?;

        let token = Uuid::new_v4().as_simple().to_string();
        let session = Session { user, expires_at };

        self.sessions
            .write()
            .await
            .insert(hash_token(&token), session);

        tracing::debug!("session created");
        Ok(token)
    }

    /// Close a session. Unknown tokens are ignored.
    pub async fn revoke(&self, token: &str) {
        if self.sessions.write().await.remove(&hash_token(token)).is_some() {
            tracing::debug!("session revoked");
        }
    }

    /// Drop every expired session. Returns how many were removed.
    pub async fn prune_expired(&self) -> usize {
        let now = Utc::now();
        let mut sessions = self.sessions.write().await;
        let before = sessions.len();
        sessions.retain(|_, s| !s.is_expired(now));
        before - sessions.len()
    }

    /// Number of sessions currently held, expired ones included.
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait::async_trait]
impl SessionProvider for MemorySessionStore {
    async fn current_session(&self, token: Option<&str>) -> Option<Session> {
        let key = hash_token(token?);
        let session = self.sessions.read().await.get(&key).cloned()?;

        if session.is_expired(Utc::now()) {
            self.sessions.write().await.remove(&key);
            return None;
        }
        Some(session)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn user(name: Option<&str>, email: Option<&str>) -> SessionUser {
        SessionUser {
            name: name.map(str::to_owned),
            email: email.map(str::to_owned),
        }
    }

    fn session(name: Option<&str>, email: Option<&str>) -> Session {
        Session {
            user: user(name, email),
            expires_at: Utc::now() + Duration::hours(1),
        }
    }

    #[test]
    fn display_name_prefers_name() {
        assert_eq!(session(Some("Chloe"), Some("c@innerbright.vn")).display_name(), "Chloe");
    }

    #[test]
    fn display_name_falls_back_to_email() {
        assert_eq!(session(None, Some("c@innerbright.vn")).display_name(), "c@innerbright.vn");
        assert_eq!(session(Some(" "), Some("c@innerbright.vn")).display_name(), "c@innerbright.vn");
    }

    #[test]
    fn hash_token_is_hex_sha256() {
        let hash = hash_token("abc");
        assert_eq!(hash.len(), 64);
        assert_eq!(
            hash,
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[tokio::test]
    async fn no_token_means_no_session() {
        let store = MemorySessionStore::new();
        assert!(store.current_session(None).await.is_none());
        assert!(store.current_session(Some("unknown")).await.is_none());
    }

    #[tokio::test]
    async fn created_session_is_found_by_token() {
        let store = MemorySessionStore::new();
        let token = store
            .create(user(Some("Chloe"), None), Duration::hours(1))
            .await
            .unwrap();

        let session = store.current_session(Some(&token)).await.unwrap();
        assert_eq!(session.display_name(), "Chloe");
    }

    #[tokio::test]
    async fn store_keys_are_hashed() {
        let store = MemorySessionStore::new();
        let token = store
            .create(user(None, Some("a@b.c")), Duration::hours(1))
            .await
            .unwrap();
        let sessions = store.sessions.read().await;
        assert!(!sessions.contains_key(&token));
        assert!(sessions.contains_key(&hash_token(&token)));
    }

    #[tokio::test]
    async fn identity_is_required() {
        let store = MemorySessionStore::new();
        let err = store
            .create(user(Some(""), Some("   ")), Duration::hours(1))
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::MissingIdentity));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn non_positive_ttl_is_rejected() {
        let store = MemorySessionStore::new();
        let err = store
            .create(user(Some("x"), None), Duration::zero())
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTtl { .. }));
    }

    #[tokio::test]
    async fn overflowing_ttl_is_rejected() {
        let store = MemorySessionStore::new();
        let ttl = Duration::try_hours(100_000_000_000).unwrap();
        let err = store.create(user(Some("x"), None), ttl).await.unwrap_err();
        assert!(matches!(err, SessionError::InvalidTtl { .. }));

        let err = store
            .create(user(Some("x"), None), Duration::MAX)
            .await
            .unwrap_err();
        assert!(matches!(err, SessionError::InvalidTtl { .. }));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn revoked_session_is_gone() {
        let store = MemorySessionStore::new();
        let token = store
            .create(user(Some("x"), None), Duration::hours(1))
            .await
            .unwrap();
        store.revoke(&token).await;
        assert!(store.current_session(Some(&token)).await.is_none());
        assert_eq!(store.len().await, 0);
    }

    #[tokio::test]
    async fn expired_session_is_absent_and_pruned() {
        let store = MemorySessionStore::new();
        let token = store
            .create(user(Some("x"), None), Duration::hours(1))
            .await
            .unwrap();
        let other = store
            .create(user(Some("y"), None), Duration::hours(1))
            .await
            .unwrap();

        for s in store.sessions.write().await.values_mut() {
            s.expires_at = Utc::now() - Duration::seconds(1);
        }

        assert!(store.current_session(Some(&token)).await.is_none());
        assert_eq!(store.len().await, 1);
        assert_eq!(store.prune_expired().await, 1);
        assert!(store.current_session(Some(&other)).await.is_none());
    }
}
