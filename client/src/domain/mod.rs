//! Domain types for the client core.
//!
//! The session model, the classified error taxonomy, validated auth inputs,
//! and the ports the adapters implement. Transport and storage concerns
//! stay outside this module.

mod credentials;
mod error;
pub mod ports;
mod session;

pub use credentials::{AuthInputError, SignInCredentials, SignUpDetails};
pub use error::GatewayError;
pub use session::{Credential, CredentialError, Session, UserProfile};
