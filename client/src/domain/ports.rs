//! Ports the session adapters implement.
//!
//! The store owns the session; adapters own durability. The port exposes
//! strongly typed errors so adapters map their failures into predictable
//! variants instead of leaking I/O types upward.

use std::collections::BTreeMap;
use std::sync::{Mutex, PoisonError};

use thiserror::Error;

/// Durable-storage key holding the opaque bearer credential.
pub const TOKEN_KEY: &str = "gdg_token";

/// Durable-storage key holding the JSON-encoded identity payload.
pub const PROFILE_KEY: &str = "gdg_user";

/// Errors surfaced by a durable session storage adapter.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionStorageError {
    /// A key could not be read.
    #[error("failed to read session key '{key}': {message}")]
    Read {
        /// Key being read.
        key: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// A key could not be written.
    #[error("failed to write session key '{key}': {message}")]
    Write {
        /// Key being written.
        key: String,
        /// Description of the underlying failure.
        message: String,
    },

    /// A key could not be removed.
    #[error("failed to remove session key '{key}': {message}")]
    Remove {
        /// Key being removed.
        key: String,
        /// Description of the underlying failure.
        message: String,
    },
}

impl SessionStorageError {
    /// Helper for read failures.
    pub fn read(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Read {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Helper for write failures.
    pub fn write(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Write {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Helper for remove failures.
    pub fn remove(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Remove {
            key: key.into(),
            message: message.into(),
        }
    }
}

/// Durable key-value store backing the session.
///
/// Semantics the store relies on:
/// - `read` returns `Ok(None)` for an absent key, never an error;
/// - `remove` of an absent key succeeds (logout stays idempotent);
/// - `write` replaces any previous value for the key.
#[cfg_attr(test, mockall::automock)]
pub trait SessionStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStorageError::Read`] when the backing store fails.
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStorageError::Write`] when the backing store fails.
    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError>;

    /// Remove `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`SessionStorageError::Remove`] when the backing store fails.
    fn remove(&self, key: &str) -> Result<(), SessionStorageError>;
}

/// In-memory fixture adapter used by tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemorySessionStorage {
    entries: Mutex<BTreeMap<String, String>>,
}

impl MemorySessionStorage {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed a value, bypassing the port. Useful for restore tests.
    pub fn seed(&self, key: impl Into<String>, value: impl Into<String>) {
        self.lock_entries().insert(key.into(), value.into());
    }

    fn lock_entries(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl SessionStorage for MemorySessionStorage {
    fn read(&self, key: &str) -> Result<Option<String>, SessionStorageError> {
        Ok(self.lock_entries().get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), SessionStorageError> {
        self.lock_entries().insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), SessionStorageError> {
        self.lock_entries().remove(key);
        Ok(())
    }
}
