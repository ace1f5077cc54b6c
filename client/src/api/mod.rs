//! Typed façades over the gateway.
//!
//! Each façade module adds inherent methods to [`crate::Gateway`] for one
//! slice of the network surface; list payloads are returned exactly as
//! decoded, with no client-side shaping. [`AuthFlow`] is the one component
//! that writes the session store after a successful auth call.

mod auth;
mod chapters;
mod events;

pub use auth::{AuthFlow, AuthFlowError, AuthResponse};
