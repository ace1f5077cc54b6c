//! The session store: single source of truth for the signed-in identity.
//!
//! Bridges the in-memory session with a durable storage adapter so identity
//! survives a restart, and publishes every change through a watch channel
//! so observers always read a complete snapshot. There is no ambient
//! singleton: callers construct a store with the adapter they want, which
//! keeps the gateway testable against fakes.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use crate::domain::ports::{PROFILE_KEY, SessionStorage, SessionStorageError, TOKEN_KEY};
use crate::domain::{Credential, Session, UserProfile};

/// Cloneable handle to the session state.
///
/// All clones share the same storage adapter and watch channel, so a
/// `login` through one handle is observed by every other handle.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn SessionStorage>,
    state: Arc<watch::Sender<Session>>,
}

impl SessionStore {
    /// Create a store starting in the anonymous state.
    ///
    /// Call [`SessionStore::restore`] afterwards to pick up a persisted
    /// session.
    #[must_use]
    pub fn new(storage: Arc<dyn SessionStorage>) -> Self {
        let (state, _) = watch::channel(Session::anonymous());
        Self {
            storage,
            state: Arc::new(state),
        }
    }

    /// Load any persisted session into memory.
    ///
    /// Corrupt or partial persisted state degrades to "logged out" rather
    /// than failing: a half-written or legacy-format session must never
    /// crash the application. Leftover keys from a partial session are
    /// cleared on a best-effort basis.
    pub fn restore(&self) {
        if let Some(session) = self.read_persisted() {
            drop(self.state.send_replace(session));
        }
    }

    /// Persist the credential and identity, then publish the
    /// authenticated snapshot.
    ///
    /// Observers never see a partially updated session: the snapshot is
    /// published once, after both keys are written.
    ///
    /// # Errors
    ///
    /// Returns the storage failure when either key cannot be written; the
    /// published state is left unchanged in that case.
    pub fn login(
        &self,
        credential: Credential,
        identity: UserProfile,
    ) -> Result<(), SessionStorageError> {
        let encoded = serde_json::to_string(&identity)
            .map_err(|err| SessionStorageError::write(PROFILE_KEY, err.to_string()))?;
        self.storage.write(TOKEN_KEY, credential.as_str())?;
        self.storage.write(PROFILE_KEY, &encoded)?;
        drop(
            self.state
                .send_replace(Session::authenticated(credential, identity)),
        );
        Ok(())
    }

    /// Remove the persisted session and publish the anonymous snapshot.
    ///
    /// Idempotent: logging out while already logged out is a no-op.
    ///
    /// # Errors
    ///
    /// Returns the storage failure when a present key cannot be removed.
    pub fn logout(&self) -> Result<(), SessionStorageError> {
        self.storage.remove(TOKEN_KEY)?;
        self.storage.remove(PROFILE_KEY)?;
        drop(self.state.send_replace(Session::anonymous()));
        Ok(())
    }

    /// A consistent snapshot of the current session.
    #[must_use]
    pub fn current(&self) -> Session {
        self.state.borrow().clone()
    }

    /// True iff the current session carries a credential.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Observe session changes. Each received value is a complete
    /// snapshot; notifications are delivered without tearing.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Session> {
        self.state.subscribe()
    }

    fn read_persisted(&self) -> Option<Session> {
        let token = self.read_key(TOKEN_KEY)?;
        let profile = self.read_key(PROFILE_KEY)?;

        match (token, profile) {
            (Some(token), Some(profile)) => self.decode_persisted(&token, &profile),
            (None, None) => None,
            (_, _) => {
                warn!("partial persisted session found; discarding");
                self.discard_persisted();
                None
            }
        }
    }

    /// Read one key, collapsing storage failures into absence.
    #[expect(
        clippy::option_option,
        reason = "outer None is a swallowed storage failure, inner None an absent key"
    )]
    fn read_key(&self, key: &str) -> Option<Option<String>> {
        match self.storage.read(key) {
            Ok(value) => Some(value),
            Err(error) => {
                warn!(%error, key, "session restore read failed; treating as logged out");
                None
            }
        }
    }

    fn decode_persisted(&self, token: &str, profile: &str) -> Option<Session> {
        let credential = match Credential::new(token) {
            Ok(credential) => credential,
            Err(error) => {
                warn!(%error, "persisted credential unusable; discarding session");
                self.discard_persisted();
                return None;
            }
        };
        match serde_json::from_str::<UserProfile>(profile) {
            Ok(identity) => Some(Session::authenticated(credential, identity)),
            Err(error) => {
                warn!(%error, "persisted identity malformed; discarding session");
                self.discard_persisted();
                None
            }
        }
    }

    fn discard_persisted(&self) {
        for key in [TOKEN_KEY, PROFILE_KEY] {
            if let Err(error) = self.storage.remove(key) {
                warn!(%error, key, "failed to clear leftover session key");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use crate::domain::ports::{MemorySessionStorage, MockSessionStorage};
    use rstest::{fixture, rstest};

    fn profile() -> UserProfile {
        UserProfile {
            name: "U".to_owned(),
            email: "user@example.com".to_owned(),
        }
    }

    fn credential() -> Credential {
        Credential::new("abc").expect("valid credential")
    }

    #[fixture]
    fn storage() -> Arc<MemorySessionStorage> {
        Arc::new(MemorySessionStorage::new())
    }

    #[rstest]
    fn login_publishes_both_fields_atomically(storage: Arc<MemorySessionStorage>) {
        let store = SessionStore::new(storage.clone());
        store.login(credential(), profile()).expect("login succeeds");

        let snapshot = store.current();
        assert!(snapshot.is_authenticated());
        assert!(snapshot.credential().is_some());
        assert_eq!(
            snapshot.identity().map(|p| p.email.clone()),
            Some("user@example.com".to_owned())
        );
        assert_eq!(
            storage.read(TOKEN_KEY).expect("read succeeds"),
            Some("abc".to_owned())
        );
    }

    #[rstest]
    fn logout_is_idempotent(storage: Arc<MemorySessionStorage>) {
        let store = SessionStore::new(storage);
        store.logout().expect("logout of anonymous store succeeds");
        assert!(!store.is_authenticated());

        store.login(credential(), profile()).expect("login succeeds");
        store.logout().expect("first logout succeeds");
        store.logout().expect("second logout succeeds");
        assert!(!store.is_authenticated());
    }

    #[rstest]
    fn restore_round_trips_a_persisted_session(storage: Arc<MemorySessionStorage>) {
        let first = SessionStore::new(storage.clone());
        first.login(credential(), profile()).expect("login succeeds");

        let second = SessionStore::new(storage);
        assert!(!second.is_authenticated());
        second.restore();
        assert!(second.is_authenticated());
        assert_eq!(
            second.current().identity().map(|p| p.name.clone()),
            Some("U".to_owned())
        );
    }

    #[rstest]
    fn restore_with_malformed_identity_degrades_to_logged_out(
        storage: Arc<MemorySessionStorage>,
    ) {
        storage.seed(TOKEN_KEY, "abc");
        storage.seed(PROFILE_KEY, "{not json");

        let store = SessionStore::new(storage.clone());
        store.restore();

        assert!(!store.is_authenticated());
        // Leftovers are cleared so the next restore starts clean.
        assert_eq!(storage.read(TOKEN_KEY).expect("read succeeds"), None);
    }

    #[rstest]
    fn restore_with_token_only_discards_the_partial_session(
        storage: Arc<MemorySessionStorage>,
    ) {
        storage.seed(TOKEN_KEY, "abc");

        let store = SessionStore::new(storage.clone());
        store.restore();

        assert!(!store.is_authenticated());
        assert_eq!(storage.read(TOKEN_KEY).expect("read succeeds"), None);
    }

    #[test]
    fn restore_swallows_storage_read_failures() {
        let mut mock = MockSessionStorage::new();
        mock.expect_read()
            .returning(|key| Err(SessionStorageError::read(key, "backing store offline")));

        let store = SessionStore::new(Arc::new(mock));
        store.restore();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn failed_write_leaves_published_state_unchanged() {
        let mut mock = MockSessionStorage::new();
        mock.expect_write()
            .returning(|key, _| Err(SessionStorageError::write(key, "disk full")));

        let store = SessionStore::new(Arc::new(mock));
        let err = store
            .login(credential(), profile())
            .expect_err("login fails when storage fails");
        assert!(matches!(err, SessionStorageError::Write { .. }));
        assert!(!store.is_authenticated());
    }

    #[rstest]
    fn subscribers_observe_complete_snapshots(storage: Arc<MemorySessionStorage>) {
        let store = SessionStore::new(storage);
        let mut receiver = store.subscribe();
        assert!(!receiver.borrow().is_authenticated());

        store.login(credential(), profile()).expect("login succeeds");
        assert!(receiver.has_changed().expect("channel alive"));
        let observed = receiver.borrow_and_update().clone();
        assert!(observed.credential().is_some() && observed.identity().is_some());
    }
}
