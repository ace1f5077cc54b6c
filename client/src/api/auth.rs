//! Auth façade and the sign-in/sign-out flow.
//!
//! The gateway methods here only speak the wire protocol; committing a
//! successful response to the session store is [`AuthFlow`]'s job, keeping
//! the gateway's session handle strictly read-only.

use serde::Deserialize;
use serde_json::json;
use thiserror::Error;
use tracing::debug;

use crate::domain::ports::SessionStorageError;
use crate::domain::{
    AuthInputError, Credential, CredentialError, GatewayError, SignInCredentials, SignUpDetails,
    UserProfile,
};
use crate::outbound::gateway::Gateway;
use crate::store::SessionStore;

/// Successful response of the login and signup endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AuthResponse {
    /// Opaque bearer token for subsequent calls.
    pub token: String,
    /// Identity of the signed-in user.
    pub user: UserProfile,
}

impl Gateway {
    /// POST `/auth/login`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure; wrong
    /// credentials surface as [`GatewayError::ClientRejected`].
    pub async fn login(
        &self,
        credentials: &SignInCredentials,
    ) -> Result<AuthResponse, GatewayError> {
        self.post(
            "/auth/login",
            &json!({
                "email": credentials.email(),
                "password": credentials.password(),
            }),
        )
        .await
    }

    /// POST `/auth/signup`.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn signup(&self, details: &SignUpDetails) -> Result<AuthResponse, GatewayError> {
        self.post(
            "/auth/signup",
            &json!({
                "name": details.name(),
                "email": details.email(),
                "password": details.password(),
            }),
        )
        .await
    }
}

/// Failures surfaced by the auth flow.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthFlowError {
    /// Form inputs failed validation before any request was made.
    #[error(transparent)]
    Validation(#[from] AuthInputError),
    /// The auth call itself failed.
    #[error(transparent)]
    Gateway(#[from] GatewayError),
    /// The service returned a blank token.
    #[error("auth response carried an unusable credential: {0}")]
    Credential(#[from] CredentialError),
    /// The session could not be persisted.
    #[error(transparent)]
    Session(#[from] SessionStorageError),
}

/// Drives sign-in, registration, and sign-out against the gateway and the
/// session store.
#[derive(Clone)]
pub struct AuthFlow {
    gateway: Gateway,
    store: SessionStore,
}

impl AuthFlow {
    /// Build a flow over an existing gateway and store.
    #[must_use]
    pub const fn new(gateway: Gateway, store: SessionStore) -> Self {
        Self { gateway, store }
    }

    /// Validate inputs, call the login endpoint, and commit the returned
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFlowError`] naming the failing stage; the session
    /// store is only touched after a successful response.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<UserProfile, AuthFlowError> {
        let credentials = SignInCredentials::try_from_parts(email, password)?;
        let response = self.gateway.login(&credentials).await?;
        self.commit(response)
    }

    /// Validate inputs, call the signup endpoint, and commit the returned
    /// session.
    ///
    /// # Errors
    ///
    /// Returns an [`AuthFlowError`] naming the failing stage.
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
    ) -> Result<UserProfile, AuthFlowError> {
        let details = SignUpDetails::try_from_parts(name, email, password)?;
        let response = self.gateway.signup(&details).await?;
        self.commit(response)
    }

    /// Clear the persisted session.
    ///
    /// # Errors
    ///
    /// Returns [`AuthFlowError::Session`] when the storage adapter fails.
    pub fn sign_out(&self) -> Result<(), AuthFlowError> {
        self.store.logout()?;
        Ok(())
    }

    /// The session store this flow commits to.
    #[must_use]
    pub const fn store(&self) -> &SessionStore {
        &self.store
    }

    fn commit(&self, response: AuthResponse) -> Result<UserProfile, AuthFlowError> {
        let credential = Credential::new(response.token)?;
        self.store.login(credential, response.user.clone())?;
        debug!(email = %response.user.email, "session committed");
        Ok(response.user)
    }
}
