//! Session store and API gateway client for the community platform.
//!
//! This crate is the application's sole egress point for network calls and
//! the single source of truth for the authenticated identity:
//!
//! - [`store::SessionStore`] owns the current [`domain::Session`], persists
//!   it through a [`domain::ports::SessionStorage`] adapter so identity
//!   survives a restart, and broadcasts consistent snapshots to observers.
//! - [`outbound::gateway::Gateway`] builds requests against a configured
//!   base address, attaches the session credential when one exists, and
//!   classifies every failure into the three-way [`domain::GatewayError`]
//!   taxonomy so callers handle failures uniformly.
//! - [`api`] layers thin typed façades (auth, chapters, events) over the
//!   gateway, plus the [`api::AuthFlow`] service that commits a successful
//!   login to the store.
//!
//! The gateway holds only a read handle on the store and never mutates it;
//! all writes go through the store's own operations.

pub mod api;
pub mod domain;
pub mod outbound;
pub mod store;

pub use api::{AuthFlow, AuthFlowError, AuthResponse};
pub use domain::{Credential, GatewayError, Session, SignInCredentials, SignUpDetails, UserProfile};
pub use outbound::gateway::Gateway;
pub use store::SessionStore;
