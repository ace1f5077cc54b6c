//! Event read façade.

use chapter_data::Event;

use crate::domain::GatewayError;
use crate::outbound::gateway::Gateway;

impl Gateway {
    /// Fetch every event.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn list_events(&self) -> Result<Vec<Event>, GatewayError> {
        self.get("/events").await
    }

    /// Fetch the events hosted by one chapter.
    ///
    /// # Errors
    ///
    /// Returns a [`GatewayError`] classifying the failure.
    pub async fn list_events_by_chapter(
        &self,
        chapter_id: &str,
    ) -> Result<Vec<Event>, GatewayError> {
        self.get(&format!("/events/{chapter_id}")).await
    }
}
