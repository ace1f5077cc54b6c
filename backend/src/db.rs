//! Database connection bootstrap.
//!
//! The stub performs no queries; it connects at startup and pings so a
//! misconfigured `DATABASE_URL` is visible in the logs immediately rather
//! than on the first real deployment of business logic.

use std::time::Duration;

use thiserror::Error;
use tokio_postgres::NoTls;
use tracing::warn;

/// Errors surfaced while establishing or probing the connection.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DatabaseError {
    /// The connection could not be established.
    #[error("database connection failed: {message}")]
    Connect {
        /// Description of the underlying failure.
        message: String,
    },

    /// The connection was established but the probe query failed.
    #[error("database ping failed: {message}")]
    Ping {
        /// Description of the underlying failure.
        message: String,
    },
}

impl DatabaseError {
    /// Helper for connection failures.
    pub fn connect(message: impl Into<String>) -> Self {
        Self::Connect {
            message: message.into(),
        }
    }

    /// Helper for probe failures.
    pub fn ping(message: impl Into<String>) -> Self {
        Self::Ping {
            message: message.into(),
        }
    }
}

/// Connection settings for the bootstrap.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    url: String,
    connect_timeout: Duration,
}

impl DatabaseConfig {
    /// Configuration with a 30 second connect timeout.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            connect_timeout: Duration::from_secs(30),
        }
    }

    /// Override the connect timeout.
    #[must_use]
    pub const fn with_connect_timeout(mut self, timeout: Duration) -> Self {
        self.connect_timeout = timeout;
        self
    }

    /// The connection string.
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }

    /// The configured connect timeout.
    #[must_use]
    pub const fn connect_timeout(&self) -> Duration {
        self.connect_timeout
    }
}

/// An established database connection.
#[derive(Debug)]
pub struct Database {
    client: tokio_postgres::Client,
}

impl Database {
    /// Connect using `config`, driving the connection on a background
    /// task.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Connect`] when the connection cannot be
    /// established within the configured timeout.
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, DatabaseError> {
        let attempt = tokio_postgres::connect(config.url(), NoTls);
        let (client, connection) = tokio::time::timeout(config.connect_timeout(), attempt)
            .await
            .map_err(|_| DatabaseError::connect("connection attempt timed out"))?
            .map_err(|err| DatabaseError::connect(err.to_string()))?;

        drop(actix_web::rt::spawn(async move {
            if let Err(error) = connection.await {
                warn!(%error, "database connection task ended");
            }
        }));

        Ok(Self { client })
    }

    /// Probe the connection with a trivial query.
    ///
    /// # Errors
    ///
    /// Returns [`DatabaseError::Ping`] when the query fails.
    pub async fn ping(&self) -> Result<(), DatabaseError> {
        self.client
            .simple_query("SELECT 1")
            .await
            .map(|_| ())
            .map_err(|err| DatabaseError::ping(err.to_string()))
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.

    use super::*;
    use rstest::rstest;

    #[rstest]
    fn config_defaults_to_a_thirty_second_timeout() {
        let config = DatabaseConfig::new("postgres://localhost/platform");
        assert_eq!(config.url(), "postgres://localhost/platform");
        assert_eq!(config.connect_timeout(), Duration::from_secs(30));
    }

    #[rstest]
    fn config_timeout_override() {
        let config = DatabaseConfig::new("postgres://localhost/platform")
            .with_connect_timeout(Duration::from_secs(2));
        assert_eq!(config.connect_timeout(), Duration::from_secs(2));
    }

    #[rstest]
    fn error_helpers_format_messages() {
        assert_eq!(
            DatabaseError::connect("refused").to_string(),
            "database connection failed: refused"
        );
        assert_eq!(
            DatabaseError::ping("broken pipe").to_string(),
            "database ping failed: broken pipe"
        );
    }

    #[actix_web::test]
    async fn connecting_to_nothing_reports_a_connect_error() {
        // Port 1 is reserved and never carries PostgreSQL.
        let config = DatabaseConfig::new("postgres://127.0.0.1:1/platform")
            .with_connect_timeout(Duration::from_secs(2));
        let error = Database::connect(&config)
            .await
            .expect_err("connection must fail");
        assert!(matches!(error, DatabaseError::Connect { .. }));
    }
}
