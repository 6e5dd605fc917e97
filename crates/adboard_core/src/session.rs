//! crates/adboard_core/src/session.rs
//!
//! The single-slot user session store.
//!
//! Exactly one session may exist at a time: `login`/`signup` overwrite the
//! slot, `logout` clears it. There is no credential verification by design;
//! the password is accepted and ignored, and a fresh session id is generated
//! on every login.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;
use uuid::Uuid;

use crate::domain::UserSession;
use crate::ports::{KeyValueStore, PortError, PortResult};

/// The storage key holding the current session record.
const SESSION_KEY: &str = "auth_user";

/// Session store over an injected key-value storage dependency.
pub struct SessionStore {
    storage: Arc<dyn KeyValueStore>,
    changed: watch::Sender<Option<UserSession>>,
}

impl SessionStore {
    pub fn new(storage: Arc<dyn KeyValueStore>) -> Self {
        let (changed, _) = watch::channel(None);
        Self { storage, changed }
    }

    /// Signs in with an existing "account". Succeeds unconditionally given a
    /// non-empty email; the password is not checked.
    pub async fn login(&self, email: &str, _password: &str) -> PortResult<UserSession> {
        self.start_session(email, None).await
    }

    /// Creates an "account" and signs in. Same contract as [`login`],
    /// optionally attaching a display name.
    ///
    /// [`login`]: SessionStore::login
    pub async fn signup(
        &self,
        email: &str,
        _password: &str,
        name: Option<&str>,
    ) -> PortResult<UserSession> {
        self.start_session(email, name).await
    }

    /// Clears the stored session.
    pub async fn logout(&self) -> PortResult<()> {
        self.storage.remove(SESSION_KEY).await?;
        self.changed.send_replace(None);
        Ok(())
    }

    /// The current session, if any. Side-effect-free; always reflects the
    /// most recent `login`/`signup`/`logout`. An unreadable stored record
    /// reads as signed-out.
    pub async fn current(&self) -> PortResult<Option<UserSession>> {
        let Some(raw) = self.storage.get(SESSION_KEY).await? else {
            return Ok(None);
        };
        match serde_json::from_str(&raw) {
            Ok(session) => Ok(Some(session)),
            Err(error) => {
                warn!(%error, "stored session is unreadable, treating as signed out");
                Ok(None)
            }
        }
    }

    /// Subscribes to session changes. Every `login`/`signup`/`logout` is
    /// published to all subscribers, not just the caller.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserSession>> {
        self.changed.subscribe()
    }

    async fn start_session(&self, email: &str, name: Option<&str>) -> PortResult<UserSession> {
        if email.is_empty() {
            return Err(PortError::Validation("email must not be empty".to_string()));
        }
        let session = UserSession {
            id: Uuid::new_v4(),
            email: email.to_string(),
            name: name.map(str::to_string),
        };
        let json = serde_json::to_string(&session)
            .map_err(|e| PortError::Unexpected(e.to_string()))?;
        self.storage.set(SESSION_KEY, json).await?;
        self.changed.send_replace(Some(session.clone()));
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::MapStore;

    #[tokio::test]
    async fn login_round_trip() {
        let store = SessionStore::new(MapStore::new());
        let session = store.login("ada@example.com", "hunter2").await.unwrap();
        assert_eq!(session.email, "ada@example.com");

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current, session);
    }

    #[tokio::test]
    async fn logout_clears_the_slot() {
        let store = SessionStore::new(MapStore::new());
        store.login("ada@example.com", "pw").await.unwrap();
        store.logout().await.unwrap();
        assert!(store.current().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn each_login_overwrites_the_single_slot() {
        let store = SessionStore::new(MapStore::new());
        let first = store.login("first@example.com", "pw").await.unwrap();
        let second = store.login("second@example.com", "pw").await.unwrap();
        assert_ne!(first.id, second.id);

        let current = store.current().await.unwrap().unwrap();
        assert_eq!(current.email, "second@example.com");
    }

    #[tokio::test]
    async fn signup_keeps_the_name() {
        let store = SessionStore::new(MapStore::new());
        let session = store
            .signup("grace@example.com", "pw", Some("Grace"))
            .await
            .unwrap();
        assert_eq!(session.name.as_deref(), Some("Grace"));
    }

    #[tokio::test]
    async fn empty_email_is_rejected() {
        let store = SessionStore::new(MapStore::new());
        let err = store.login("", "pw").await.unwrap_err();
        assert!(matches!(err, PortError::Validation(_)));
    }

    #[tokio::test]
    async fn subscribers_observe_login_and_logout() {
        let store = SessionStore::new(MapStore::new());
        let mut rx = store.subscribe();
        assert!(rx.borrow().is_none());

        store.login("ada@example.com", "pw").await.unwrap();
        rx.changed().await.unwrap();
        assert_eq!(
            rx.borrow_and_update().as_ref().map(|s| s.email.clone()),
            Some("ada@example.com".to_string())
        );

        store.logout().await.unwrap();
        rx.changed().await.unwrap();
        assert!(rx.borrow_and_update().is_none());
    }

    #[tokio::test]
    async fn corrupt_stored_session_reads_as_signed_out() {
        let storage = MapStore::new();
        storage
            .set(SESSION_KEY, "{not json".to_string())
            .await
            .unwrap();
        let store = SessionStore::new(storage);
        assert!(store.current().await.unwrap().is_none());
    }
}
