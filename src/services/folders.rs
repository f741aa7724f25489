//! Mail folder service

use serde::Serialize;

use crate::error::Error;
use crate::models::{ListResponse, MailFolder, Message};
use crate::query::QueryParams;
use crate::session::Session;

/// Operations on the authenticated user's mail folders.
pub struct FolderService<'a> {
    session: &'a Session,
}

impl<'a> FolderService<'a> {
    pub(crate) fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Lists the user's top-level mail folders.
    pub async fn list(&self) -> Result<Vec<MailFolder>, Error> {
        let response: ListResponse<MailFolder> = self.session.get("/mailFolders", None).await?;
        Ok(response.value)
    }

    /// Fetches a single folder by id or well-known name (`inbox`, ...).
    pub async fn get(&self, folder_id: &str) -> Result<MailFolder, Error> {
        self.session
            .get(&format!("/mailFolders/{folder_id}"), None)
            .await
    }

    /// Creates a top-level folder with the given display name.
    pub async fn create(&self, display_name: &str) -> Result<MailFolder, Error> {
        #[derive(Serialize)]
        #[serde(rename_all = "camelCase")]
        struct CreateFolderRequest<'r> {
            display_name: &'r str,
        }

        self.session
            .post("/mailFolders", &CreateFolderRequest { display_name })
            .await
    }

    /// Deletes a folder and everything in it.
    pub async fn delete(&self, folder_id: &str) -> Result<(), Error> {
        self.session
            .delete(&format!("/mailFolders/{folder_id}"), None)
            .await
    }

    /// Lists the messages in a folder.
    pub async fn list_messages(
        &self,
        folder_id: &str,
        params: Option<&QueryParams>,
    ) -> Result<Vec<Message>, Error> {
        let response: ListResponse<Message> = self
            .session
            .get(&format!("/mailFolders/{folder_id}/messages"), params)
            .await?;
        Ok(response.value)
    }
}
