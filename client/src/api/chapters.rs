//! Chapter read façade.

use chapter_data::Chapter;

use crate::domain::GatewayError;
use crate::outbound::gateway::Gateway;

impl Gateway {
    /// Fetch every chapter.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn list_chapters(&self) -> Result<Vec<Chapter>, GatewayError> {
        self.get("/chapters").await
    }

    /// Fetch a single chapter by identifier.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure; an unknown
    /// identifier surfaces as [`GatewayError::ClientRejected`].
    pub async fn get_chapter(&self, id: &str) -> Result<Chapter, GatewayError> {
        self.get(&format!("/chapters/{id}")).await
    }
}
