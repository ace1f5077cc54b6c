//! Session persistence across restarts, on the real file adapter.

use std::sync::Arc;

use client::domain::ports::{PROFILE_KEY, SessionStorage, TOKEN_KEY};
use client::outbound::storage::FileSessionStorage;
use client::{Credential, SessionStore, UserProfile};
use rstest::{fixture, rstest};
use tempfile::TempDir;

#[fixture]
fn profile_dir() -> TempDir {
    TempDir::new().expect("create temp dir")
}

fn store_in(dir: &TempDir) -> SessionStore {
    let storage = FileSessionStorage::open(dir.path()).expect("open session storage");
    SessionStore::new(Arc::new(storage))
}

fn identity() -> UserProfile {
    UserProfile {
        name: "U".to_owned(),
        email: "user@example.com".to_owned(),
    }
}

#[rstest]
fn session_survives_a_restart(profile_dir: TempDir) {
    let store = store_in(&profile_dir);
    store
        .login(Credential::new("abc").expect("valid credential"), identity())
        .expect("login succeeds");

    // A fresh store over the same directory models a process restart.
    let restarted = store_in(&profile_dir);
    restarted.restore();
    assert!(restarted.is_authenticated());
    assert_eq!(
        restarted.current().identity().map(|p| p.email.clone()),
        Some("user@example.com".to_owned())
    );
}

#[rstest]
fn logout_clears_the_persisted_session(profile_dir: TempDir) {
    let store = store_in(&profile_dir);
    store
        .login(Credential::new("abc").expect("valid credential"), identity())
        .expect("login succeeds");
    store.logout().expect("logout succeeds");

    let restarted = store_in(&profile_dir);
    restarted.restore();
    assert!(!restarted.is_authenticated());
}

#[rstest]
fn corrupt_identity_file_degrades_to_logged_out(profile_dir: TempDir) {
    {
        let storage = FileSessionStorage::open(profile_dir.path()).expect("open storage");
        storage.write(TOKEN_KEY, "abc").expect("write token");
        storage
            .write(PROFILE_KEY, "{\"name\": \"U\", \"email\"")
            .expect("write truncated profile");
    }

    let store = store_in(&profile_dir);
    store.restore();
    assert!(!store.is_authenticated());

    // The unusable leftovers were cleared.
    let storage = FileSessionStorage::open(profile_dir.path()).expect("reopen storage");
    assert_eq!(storage.read(TOKEN_KEY).expect("read token"), None);
    assert_eq!(storage.read(PROFILE_KEY).expect("read profile"), None);
}

#[rstest]
fn restore_on_an_empty_profile_stays_anonymous(profile_dir: TempDir) {
    let store = store_in(&profile_dir);
    store.restore();
    assert!(!store.is_authenticated());
}
