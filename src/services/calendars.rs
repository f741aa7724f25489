//! Calendar service

use crate::error::Error;
use crate::models::{Calendar, ListResponse};
use crate::session::Session;

/// Operations on the authenticated user's calendars.
pub struct CalendarService<'a> {
    session: &'a Session,
}

impl<'a> CalendarService<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the user's calendars.
    pub async fn list(&self) -> Result<Vec<Calendar>, Error> {
        let response: ListResponse<Calendar> = self.session.get("/calendars", None).await?;
        Ok(response.value)
    }

    /// Fetches a single calendar by id.
    pub async fn get(&self, calendar_id: &str) -> Result<Calendar, Error> {
        self.session
            .get(&format!("/calendars/{calendar_id}"), None)
            .await
    }

    /// Creates a new calendar.
    pub async fn create(&self, calendar: &Calendar) -> Result<Calendar, Error> {
        self.session.post("/calendars", calendar).await
    }

    /// Applies a partial update to a calendar.
    pub async fn update(&self, calendar_id: &str, patch: &Calendar) -> Result<Calendar, Error> {
        self.session
            .patch(&format!("/calendars/{calendar_id}"), patch)
            .await
    }

    /// Deletes a calendar.
    pub async fn delete(&self, calendar_id: &str) -> Result<(), Error> {
        self.session
            .delete(&format!("/calendars/{calendar_id}"), None)
            .await
    }
}
