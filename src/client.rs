//! Transport-level client for the Graph API
//!
//! The [`Client`] owns the transport configuration: base URL, user agent,
//! media type, the underlying HTTP client, and an optional token source. It
//! knows how to turn a relative path and a payload into a fully-formed
//! request, and how to execute a request and decode its response. It has no
//! authentication knowledge beyond holding the token source for sessions;
//! one client may back many sessions.

use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE, USER_AGENT};
use reqwest::{Method, Request, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;
use url::form_urlencoded;

use crate::error::Error;
use crate::models::ApiErrorPayload;
use crate::session::Session;
use crate::token::TokenSource;
use crate::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT, DEFAULT_USER_AGENT};

/// Request/response media type the client encodes bodies with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MediaType {
    #[default]
    Json,
    FormUrlEncoded,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Json => "application/json",
            MediaType::FormUrlEncoded => "application/x-www-form-urlencoded",
        }
    }
}

/// A request body in one of the shapes the client knows how to encode.
///
/// The shape must match the client's configured [`MediaType`]; a mismatch is
/// a configuration error, reported before any I/O.
#[derive(Debug, Clone)]
pub enum Payload {
    Json(serde_json::Value),
    Form(Vec<(String, String)>),
}

impl Payload {
    /// Builds a JSON payload from any serializable value.
    pub fn json<B: Serialize>(body: &B) -> Result<Self, Error> {
        Ok(Payload::Json(
            serde_json::to_value(body).map_err(Error::Encode)?,
        ))
    }
}

/// Type-erased JSON decode target, the sink side of [`ResultTarget::Json`].
pub trait JsonSink {
    fn decode(&mut self, bytes: &[u8]) -> Result<(), serde_json::Error>;
}

impl<T: DeserializeOwned> JsonSink for Option<T> {
    fn decode(&mut self, bytes: &[u8]) -> Result<(), serde_json::Error> {
        *self = Some(serde_json::from_slice(bytes)?);
        Ok(())
    }
}

/// Where an executed request should deliver its response body.
pub enum ResultTarget<'a> {
    /// The body is not of interest and is dropped unread.
    Ignore,
    /// Decode the body as JSON into the given sink.
    Json(&'a mut (dyn JsonSink + Send)),
    /// Copy the body verbatim, e.g. when downloading an attachment.
    Raw(&'a mut (dyn Write + Send)),
}

/// Status and headers of an executed request.
///
/// Reading the body consumes the response, so this is what survives for
/// callers that need to inspect the outcome afterwards.
#[derive(Debug, Clone)]
pub struct ResponseMeta {
    pub status: StatusCode,
    pub headers: HeaderMap,
}

/// Client for Microsoft's graph api, specifically for mail and calendar.
#[derive(Clone)]
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    user_agent: String,
    media_type: MediaType,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("user_agent", &self.user_agent)
            .field("media_type", &self.media_type)
            .field("token_source", &self.token_source.is_some())
            .finish()
    }
}

impl Client {
    /// Creates a client with default configuration and no token source.
    pub fn new() -> Result<Self, Error> {
        Self::builder().build()
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Fluent override of the media type on an already-built client.
    pub fn with_media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn media_type(&self) -> MediaType {
        self.media_type
    }

    pub(crate) fn token_source(&self) -> Option<Arc<dyn TokenSource>> {
        self.token_source.clone()
    }

    /// Creates a [`Session`] for the authenticated user, pulling a token
    /// from the configured token source.
    pub async fn session(&self) -> Result<Session, Error> {
        Session::new(self.clone()).await
    }

    /// Builds a request with the client's defaults. Performs no I/O.
    ///
    /// A `path` that parses as an absolute URL with a host is used verbatim;
    /// anything else is concatenated onto the base URL.
    pub fn new_request(
        &self,
        method: Method,
        path: &str,
        payload: Option<Payload>,
    ) -> Result<Request, Error> {
        let url = match Url::parse(path) {
            Ok(absolute) if absolute.host_str().is_some_and(|host| !host.is_empty()) => absolute,
            Ok(_) | Err(url::ParseError::RelativeUrlWithoutBase) => {
                // A base url with an empty path renders with a trailing
                // slash; normalize to exactly one separator.
                let base = self.base_url.as_str().trim_end_matches('/');
                Url::parse(&format!("{}/{}", base, path.trim_start_matches('/')))?
            }
            Err(err) => return Err(Error::Url(err)),
        };

        let body = match payload {
            None => None,
            Some(Payload::Json(value)) if self.media_type == MediaType::Json => {
                Some(serde_json::to_vec(&value).map_err(Error::Encode)?)
            }
            Some(Payload::Form(pairs)) if self.media_type == MediaType::FormUrlEncoded => {
                let encoded = form_urlencoded::Serializer::new(String::new())
                    .extend_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
                    .finish();
                Some(encoded.into_bytes())
            }
            Some(_) => {
                return Err(Error::UnsupportedBody {
                    media_type: self.media_type.as_str(),
                })
            }
        };

        let mut request = Request::new(method, url);
        if let Some(bytes) = body {
            *request.body_mut() = Some(bytes.into());
        }

        let headers = request.headers_mut();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(self.media_type.as_str()));
        headers.insert(ACCEPT, HeaderValue::from_static(MediaType::Json.as_str()));
        headers.insert(USER_AGENT, HeaderValue::from_str(&self.user_agent)?);

        Ok(request)
    }

    /// Executes the request and delivers the response body to `target`.
    ///
    /// The status code is checked before the body is decoded: a non-2xx
    /// response produces a structured error and never populates the target.
    pub async fn execute(
        &self,
        request: Request,
        target: ResultTarget<'_>,
    ) -> Result<ResponseMeta, Error> {
        debug!(method = %request.method(), url = %request.url(), "executing graph request");
        let response = self.http.execute(request).await?;
        let meta = ResponseMeta {
            status: response.status(),
            headers: response.headers().clone(),
        };
        debug!(status = %meta.status, "graph response received");

        if !meta.status.is_success() {
            let bytes = response.bytes().await?;
            if bytes.is_empty() {
                return Err(Error::Api {
                    status: meta.status,
                    message: None,
                });
            }
            return Err(match serde_json::from_slice::<ApiErrorPayload>(&bytes) {
                Ok(payload) => Error::Api {
                    status: meta.status,
                    message: Some(payload.message),
                },
                Err(source) => Error::ApiParse {
                    status: meta.status,
                    source,
                },
            });
        }

        match target {
            ResultTarget::Ignore => {}
            ResultTarget::Raw(writer) => {
                let bytes = response.bytes().await?;
                writer.write_all(&bytes)?;
            }
            ResultTarget::Json(sink) => {
                let bytes = response.bytes().await?;
                sink.decode(&bytes).map_err(Error::Decode)?;
            }
        }

        Ok(meta)
    }
}

/// Options-style construction for [`Client`]; each setter is a pure mutation
/// applied over the defaults.
pub struct ClientBuilder {
    base_url: String,
    user_agent: String,
    media_type: MediaType,
    timeout: Duration,
    http: Option<reqwest::Client>,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            media_type: MediaType::default(),
            timeout: DEFAULT_TIMEOUT,
            http: None,
            token_source: None,
        }
    }

    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn media_type(mut self, media_type: MediaType) -> Self {
        self.media_type = media_type;
        self
    }

    /// Timeout for the default transport. Ignored when an explicit
    /// [`ClientBuilder::http_client`] is injected.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Injects an explicitly constructed transport, replacing the default
    /// one. Tests use this to substitute a deterministic double.
    pub fn http_client(mut self, http: reqwest::Client) -> Self {
        self.http = Some(http);
        self
    }

    pub fn token_source(mut self, source: impl TokenSource + 'static) -> Self {
        self.token_source = Some(Arc::new(source));
        self
    }

    pub fn build(self) -> Result<Client, Error> {
        let base_url = Url::parse(&self.base_url)?;
        let http = match self.http {
            Some(http) => http,
            None => reqwest::Client::builder().timeout(self.timeout).build()?,
        };

        Ok(Client {
            http,
            base_url,
            user_agent: self.user_agent,
            media_type: self.media_type,
            token_source: self.token_source,
        })
    }
}
