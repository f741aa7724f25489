//! Event service

use crate::error::Error;
use crate::models::{Event, ListResponse};
use crate::query::QueryParams;
use crate::session::Session;

/// Operations on the authenticated user's calendar events.
pub struct EventService<'a> {
    session: &'a Session,
}

impl<'a> EventService<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists events, optionally filtered and shaped by query parameters
    /// (`$top`, `$filter` with datetime bounds, ...).
    pub async fn list(&self, params: Option<&QueryParams>) -> Result<Vec<Event>, Error> {
        let response: ListResponse<Event> = self.session.get("/events", params).await?;
        Ok(response.value)
    }

    /// Fetches a single event by id.
    pub async fn get(&self, event_id: &str) -> Result<Event, Error> {
        self.session.get(&format!("/events/{event_id}"), None).await
    }

    /// Creates an event on the user's default calendar.
    pub async fn create(&self, event: &Event) -> Result<Event, Error> {
        self.session.post("/events", event).await
    }

    /// Applies a partial update to an event.
    pub async fn update(&self, event_id: &str, patch: &Event) -> Result<Event, Error> {
        self.session
            .patch(&format!("/events/{event_id}"), patch)
            .await
    }

    /// Deletes an event.
    pub async fn delete(&self, event_id: &str) -> Result<(), Error> {
        self.session
            .delete(&format!("/events/{event_id}"), None)
            .await
    }
}
