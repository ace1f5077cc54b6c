//! Validated authentication inputs.
//!
//! Keep raw form values outside the flow layer by validating them before a
//! request is built. Passwords live in [`Zeroizing`] so they are wiped when
//! dropped.

use std::fmt;

use zeroize::Zeroizing;

/// Domain error returned when auth input values are invalid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthInputError {
    /// Display name was missing or blank once trimmed.
    EmptyName,
    /// Email was missing or blank once trimmed.
    EmptyEmail,
    /// Password was blank.
    EmptyPassword,
}

impl fmt::Display for AuthInputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyName => write!(f, "name must not be empty"),
            Self::EmptyEmail => write!(f, "email must not be empty"),
            Self::EmptyPassword => write!(f, "password must not be empty"),
        }
    }
}

impl std::error::Error for AuthInputError {}

fn validated_email(email: &str) -> Result<String, AuthInputError> {
    let normalized = email.trim();
    if normalized.is_empty() {
        return Err(AuthInputError::EmptyEmail);
    }
    Ok(normalized.to_owned())
}

fn validated_password(password: &str) -> Result<Zeroizing<String>, AuthInputError> {
    if password.is_empty() {
        return Err(AuthInputError::EmptyPassword);
    }
    // Whitespace is kept: trimming passwords invites surprising mismatches.
    Ok(Zeroizing::new(password.to_owned()))
}

/// Validated login inputs.
///
/// ## Invariants
/// - `email` is trimmed and non-empty.
/// - `password` is non-empty and retains caller-provided whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignInCredentials {
    email: String,
    password: Zeroizing<String>,
}

impl SignInCredentials {
    /// Construct credentials from raw email/password inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AuthInputError`] when either value is blank.
    pub fn try_from_parts(email: &str, password: &str) -> Result<Self, AuthInputError> {
        Ok(Self {
            email: validated_email(email)?,
            password: validated_password(password)?,
        })
    }

    /// Email address sent to the auth endpoint.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}

/// Validated signup inputs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignUpDetails {
    name: String,
    email: String,
    password: Zeroizing<String>,
}

impl SignUpDetails {
    /// Construct signup details from raw form inputs.
    ///
    /// # Errors
    ///
    /// Returns [`AuthInputError`] when any value is blank.
    pub fn try_from_parts(name: &str, email: &str, password: &str) -> Result<Self, AuthInputError> {
        let normalized_name = name.trim();
        if normalized_name.is_empty() {
            return Err(AuthInputError::EmptyName);
        }
        Ok(Self {
            name: normalized_name.to_owned(),
            email: validated_email(email)?,
            password: validated_password(password)?,
        })
    }

    /// Display name sent to the signup endpoint.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Email address sent to the signup endpoint.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }

    /// Password provided by the caller.
    #[must_use]
    pub fn password(&self) -> &str {
        self.password.as_str()
    }
}
