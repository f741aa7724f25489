//! Authenticated user session
//!
//! A [`Session`] layers per-user authorization and path scoping on top of a
//! [`Client`]: it owns the access token captured at construction time and
//! the `/me` base path, and exposes verb-shaped methods plus a convenience
//! [`Session::send`] for mail dispatch. It is also the factory for the
//! per-resource services.

use std::io::Write;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::client::{Client, Payload, ResponseMeta, ResultTarget};
use crate::error::Error;
use crate::models::{ApiErrorPayload, Message};
use crate::query::{self, QueryParams};
use crate::services::{CalendarService, EventService, FolderService, MessageService};

/// Manages communication to microsoft's graph api as an authenticated user.
///
/// The access token is captured once at construction and never refreshed;
/// callers that need a fresh token snapshot create a new session. The
/// refresh token is retained for a future refresh flow but is not used.
#[derive(Clone, Debug)]
pub struct Session {
    client: Client,
    base_path: String,
    access_token: String,
    refresh_token: String,
}

impl Session {
    /// Creates a session for the authenticated user, pulling a token once
    /// from the client's token source.
    pub async fn new(client: Client) -> Result<Self, Error> {
        let token = match client.token_source() {
            Some(source) => source.token().await?,
            None => return Err(Error::NoTokenSource),
        };

        Ok(Self {
            client,
            base_path: "/me".to_string(),
            access_token: token.access_token,
            refresh_token: token.refresh_token,
        })
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// The refresh token captured at construction. Kept for a future
    /// token-refresh flow; the session itself never uses it.
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    async fn query(
        &self,
        method: Method,
        path: &str,
        params: Option<&QueryParams>,
        payload: Option<Payload>,
        target: ResultTarget<'_>,
    ) -> Result<ResponseMeta, Error> {
        let query_string = params.map(query::encode).filter(|q| !q.is_empty());

        let mut full_path = join_path(&self.base_path, path);
        if let Some(query_string) = &query_string {
            full_path.push('?');
            full_path.push_str(query_string);
        }

        let mut request = self.client.new_request(method, &full_path, payload)?;

        if self.access_token.is_empty() {
            return Err(Error::NoAccessToken);
        }

        let bearer = HeaderValue::from_str(&format!("Bearer {}", self.access_token))?;
        request.headers_mut().insert(AUTHORIZATION, bearer);

        // Expired or revoked tokens are not detected here; a 401 surfaces as
        // an api error and the caller decides whether to mint a new session.
        self.client.execute(request, target).await
    }

    /// Performs a get request with the session's access token, decoding the
    /// response into `T`.
    pub async fn get<T>(&self, path: &str, params: Option<&QueryParams>) -> Result<T, Error>
    where
        T: DeserializeOwned + Send,
    {
        let mut slot: Option<T> = None;
        self.query(
            Method::GET,
            path,
            params,
            None,
            ResultTarget::Json(&mut slot),
        )
        .await?;
        take_decoded(slot)
    }

    /// Performs a get request and copies the raw response body into
    /// `writer`, without JSON interpretation.
    pub async fn get_raw<W>(
        &self,
        path: &str,
        params: Option<&QueryParams>,
        writer: &mut W,
    ) -> Result<ResponseMeta, Error>
    where
        W: Write + Send,
    {
        self.query(
            Method::GET,
            path,
            params,
            None,
            ResultTarget::Raw(writer),
        )
        .await
    }

    /// Performs a post request with the session's access token, decoding the
    /// response into `T`.
    pub async fn post<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let payload = Payload::json(body)?;
        let mut slot: Option<T> = None;
        self.query(
            Method::POST,
            path,
            None,
            Some(payload),
            ResultTarget::Json(&mut slot),
        )
        .await?;
        take_decoded(slot)
    }

    /// Performs a post request whose response body is not of interest.
    pub async fn post_empty<B>(&self, path: &str, body: &B) -> Result<ResponseMeta, Error>
    where
        B: Serialize + Sync,
    {
        let payload = Payload::json(body)?;
        self.query(Method::POST, path, None, Some(payload), ResultTarget::Ignore)
            .await
    }

    /// Performs a patch request with the session's access token, decoding
    /// the response into `T`.
    pub async fn patch<B, T>(&self, path: &str, body: &B) -> Result<T, Error>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let payload = Payload::json(body)?;
        let mut slot: Option<T> = None;
        self.query(
            Method::PATCH,
            path,
            None,
            Some(payload),
            ResultTarget::Json(&mut slot),
        )
        .await?;
        take_decoded(slot)
    }

    /// Performs a delete request with the session's access token.
    pub async fn delete(&self, path: &str, params: Option<&QueryParams>) -> Result<(), Error> {
        self.query(Method::DELETE, path, params, None, ResultTarget::Ignore)
            .await?;
        Ok(())
    }

    /// Sends a mail message on behalf of the user.
    ///
    /// The endpoint returns no payload: 202 Accepted is the only success
    /// status. Any other status yields an error carrying the status code
    /// and, when the body holds one, the api's error message.
    pub async fn send(&self, message: &Message) -> Result<(), Error> {
        let body = serde_json::json!({ "message": message });

        let mut raw = Vec::new();
        let meta = self
            .query(
                Method::POST,
                "/sendMail",
                None,
                Some(Payload::Json(body)),
                ResultTarget::Raw(&mut raw),
            )
            .await?;

        if meta.status != StatusCode::ACCEPTED {
            return Err(match serde_json::from_slice::<ApiErrorPayload>(&raw) {
                Ok(payload) => Error::SendFailed {
                    status: meta.status,
                    message: Some(payload.message),
                },
                Err(source) => Error::SendParse {
                    status: meta.status,
                    source,
                },
            });
        }

        Ok(())
    }

    /// Returns a calendar service using this session.
    pub fn calendars(&self) -> CalendarService<'_> {
        CalendarService::new(self)
    }

    /// Returns an event service using this session.
    pub fn events(&self) -> EventService<'_> {
        EventService::new(self)
    }

    /// Returns a mail folder service using this session.
    pub fn folders(&self) -> FolderService<'_> {
        FolderService::new(self)
    }

    /// Returns a message service using this session.
    pub fn messages(&self) -> MessageService<'_> {
        MessageService::new(self)
    }
}

fn take_decoded<T>(slot: Option<T>) -> Result<T, Error> {
    use serde::de::Error as _;
    slot.ok_or_else(|| Error::Decode(serde_json::Error::custom("response produced no value")))
}

/// Joins the session base path with a relative path, normalizing to exactly
/// one separating slash.
fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        base.to_string()
    } else {
        format!("{base}/{trimmed}")
    }
}
