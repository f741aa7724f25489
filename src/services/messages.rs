//! Message service

use serde::Serialize;

use crate::error::Error;
use crate::models::{ListResponse, Message};
use crate::query::QueryParams;
use crate::session::Session;

/// Operations on the authenticated user's mail messages.
pub struct MessageService<'a> {
    session: &'a Session,
}

impl<'a> MessageService<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists messages across the user's mailbox.
    pub async fn list(&self, params: Option<&QueryParams>) -> Result<Vec<Message>, Error> {
        let response: ListResponse<Message> = self.session.get("/messages", params).await?;
        Ok(response.value)
    }

    /// Fetches a single message by id.
    pub async fn get(&self, message_id: &str) -> Result<Message, Error> {
        self.session
            .get(&format!("/messages/{message_id}"), None)
            .await
    }

    /// Creates a draft message.
    pub async fn create_draft(&self, message: &Message) -> Result<Message, Error> {
        self.session.post("/messages", message).await
    }

    /// Applies a partial update to a message, e.g. marking it read.
    pub async fn update(&self, message_id: &str, patch: &Message) -> Result<Message, Error> {
        self.session
            .patch(&format!("/messages/{message_id}"), patch)
            .await
    }

    /// Deletes a message.
    pub async fn delete(&self, message_id: &str) -> Result<(), Error> {
        self.session
            .delete(&format!("/messages/{message_id}"), None)
            .await
    }

    /// Moves a message to another folder; returns the moved copy.
    pub async fn move_to(
        &self,
        message_id: &str,
        destination_folder_id: &str,
    ) -> Result<Message, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct MoveRequest<'r> {
            destination_id: &'r str,
        }

        self.session
            .post(
                &format!("/messages/{message_id}/move"),
                &MoveRequest {
                    destination_id: destination_folder_id,
                },
            )
            .await
    }
}
