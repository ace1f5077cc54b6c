//! The session model: credential, identity, and the pairing invariant.
//!
//! A session is either anonymous or authenticated. The authenticated case
//! holds the credential and the identity together, so no observer can ever
//! see a credential without an identity or the reverse.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Identity of the signed-in user as persisted alongside the credential.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
}

/// Error raised when constructing a [`Credential`] from an unusable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CredentialError {
    /// The supplied token was empty after trimming.
    #[error("credential must not be empty")]
    Empty,
}

/// Opaque bearer token proving an authenticated identity to the service.
///
/// The inner value is never interpreted; construction only rejects blank
/// tokens so an authenticated session always carries something to send.
/// There is intentionally no `Display` implementation: tokens must not end
/// up in log output by accident.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a raw bearer token.
    ///
    /// # Errors
    ///
    /// Returns [`CredentialError::Empty`] when the token is blank.
    pub fn new(value: impl Into<String>) -> Result<Self, CredentialError> {
        let raw = value.into();
        if raw.trim().is_empty() {
            return Err(CredentialError::Empty);
        }
        Ok(Self(raw))
    }

    /// Borrow the raw token for header construction.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(..)")
    }
}

/// The current authenticated identity, or the anonymous state.
///
/// ## Invariants
/// - The identity is set if and only if the credential is set. The field is
///   private and both constructors preserve the pairing, so the invariant
///   holds by construction.
///
/// # Examples
/// ```
/// use client::domain::{Credential, Session, UserProfile};
///
/// let session = Session::authenticated(
///     Credential::new("abc").unwrap(),
///     UserProfile { name: "U".into(), email: "u@example.com".into() },
/// );
/// assert!(session.is_authenticated());
/// assert_eq!(session.identity().map(|p| p.email.as_str()), Some("u@example.com"));
/// assert!(!Session::anonymous().is_authenticated());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Session {
    auth: Option<(Credential, UserProfile)>,
}

impl Session {
    /// The logged-out state.
    #[must_use]
    pub const fn anonymous() -> Self {
        Self { auth: None }
    }

    /// A logged-in state carrying both credential and identity.
    #[must_use]
    pub const fn authenticated(credential: Credential, identity: UserProfile) -> Self {
        Self {
            auth: Some((credential, identity)),
        }
    }

    /// The bearer credential, when authenticated.
    #[must_use]
    pub fn credential(&self) -> Option<&Credential> {
        self.auth.as_ref().map(|(credential, _)| credential)
    }

    /// The signed-in identity, when authenticated.
    #[must_use]
    pub fn identity(&self) -> Option<&UserProfile> {
        self.auth.as_ref().map(|(_, identity)| identity)
    }

    /// True iff a credential is present.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.auth.is_some()
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("")]
    #[case("   ")]
    fn blank_credentials_are_rejected(#[case] raw: &str) {
        assert_eq!(Credential::new(raw), Err(CredentialError::Empty));
    }

    #[test]
    fn credential_debug_never_reveals_the_token() {
        let credential = Credential::new("super-secret").expect("valid credential");
        assert_eq!(format!("{credential:?}"), "Credential(..)");
    }

    #[test]
    fn authenticated_session_exposes_both_fields() {
        let session = Session::authenticated(
            Credential::new("abc").expect("valid credential"),
            UserProfile {
                name: "U".to_owned(),
                email: "u@example.com".to_owned(),
            },
        );
        assert!(session.is_authenticated());
        assert!(session.credential().is_some());
        assert!(session.identity().is_some());
    }

    #[test]
    fn default_session_is_anonymous() {
        let session = Session::default();
        assert!(!session.is_authenticated());
        assert!(session.credential().is_none());
        assert!(session.identity().is_none());
    }
}
