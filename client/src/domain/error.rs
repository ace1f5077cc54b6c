//! The classified error taxonomy returned by the gateway.
//!
//! Every failed call collapses into exactly one of three kinds so callers
//! present failures uniformly: the transport never delivered a response,
//! the service rejected the request, or the service itself failed.

use thiserror::Error;

/// Fixed user-facing message for transport-level failures.
///
/// The client cannot distinguish "server down" from "network partition";
/// both are reported identically.
pub const UNREACHABLE_MESSAGE: &str =
    "Unable to connect to server. Please check if the backend is running.";

/// Nominal status reported for transport-level failures.
pub const UNREACHABLE_STATUS: u16 = 503;

/// Classified failure raised by the gateway.
///
/// Constructed at the point a request fails, immutable afterwards, and
/// never retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GatewayError {
    /// The transport failed before any response arrived (DNS, refused
    /// connection, reset). Reported with a nominal 503 status.
    #[error("Unable to connect to server. Please check if the backend is running.")]
    Unreachable,

    /// The service rejected the request (4xx).
    #[error("{message}")]
    ClientRejected {
        /// HTTP status of the response.
        status: u16,
        /// Message from the response body, or a templated fallback.
        message: String,
    },

    /// The service failed to handle the request (5xx, or a response the
    /// client could not make sense of).
    #[error("{message}")]
    ServerFailed {
        /// HTTP status of the response.
        status: u16,
        /// Message from the response body, or a templated fallback.
        message: String,
    },
}

impl GatewayError {
    /// Helper for 4xx rejections.
    pub fn client_rejected(status: u16, message: impl Into<String>) -> Self {
        Self::ClientRejected {
            status,
            message: message.into(),
        }
    }

    /// Helper for 5xx failures.
    pub fn server_failed(status: u16, message: impl Into<String>) -> Self {
        Self::ServerFailed {
            status,
            message: message.into(),
        }
    }

    /// The HTTP status associated with the failure; transport failures
    /// report the nominal [`UNREACHABLE_STATUS`].
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Unreachable => UNREACHABLE_STATUS,
            Self::ClientRejected { status, .. } | Self::ServerFailed { status, .. } => *status,
        }
    }

    /// True when the failure points at the backend or the path to it
    /// rather than at the caller's input. The UI shows a connectivity hint
    /// for these and an input hint for rejections.
    #[must_use]
    pub const fn is_connectivity(&self) -> bool {
        matches!(self, Self::Unreachable | Self::ServerFailed { .. })
    }
}
