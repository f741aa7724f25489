//! Error types for the outlook library
//!
//! Every failure is surfaced to the immediate caller; nothing in this crate
//! retries or recovers silently.

use reqwest::StatusCode;

/// Errors surfaced by the client and session layers.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The base URL or a request path failed to parse.
    #[error("invalid url: {0}")]
    Url(#[from] url::ParseError),

    /// A configured header value (user agent, bearer token) is not a valid
    /// HTTP header.
    #[error("invalid header value: {0}")]
    Header(#[from] reqwest::header::InvalidHeaderValue),

    /// The request body does not match the client's configured media type.
    #[error("body must be form pairs when the media type is {media_type}")]
    UnsupportedBody { media_type: &'static str },

    /// The request body could not be serialized.
    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A 2xx response body could not be decoded into the caller's sink.
    #[error("failed to decode response body: {0}")]
    Decode(#[source] serde_json::Error),

    /// The client was asked for a session but has no token source configured.
    #[error("client has no token source")]
    NoTokenSource,

    /// The token source failed to produce a token.
    #[error("token source error: {0}")]
    TokenSource(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// The session holds an empty access token; detected before any network
    /// I/O is performed.
    #[error("no access token")]
    NoAccessToken,

    /// Transport-level failure: network, timeout, or cancellation.
    #[error("http transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// Failure while copying a raw response body into the caller's writer.
    #[error("failed to write response body: {0}")]
    Io(#[from] std::io::Error),

    /// The API answered with a non-success status.
    #[error("graph api error (status {status}): {text}", text = .message.as_deref().unwrap_or("no error payload"))]
    Api {
        status: StatusCode,
        message: Option<String>,
    },

    /// The API answered with a non-success status and a body that could not
    /// be parsed as an error payload.
    #[error("graph api error (status {status}): failed to parse error response: {source}")]
    ApiParse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },

    /// A mail-send round trip completed with a status other than 202.
    #[error("failed to send message (status {status}): {text}", text = .message.as_deref().unwrap_or("no error payload"))]
    SendFailed {
        status: StatusCode,
        message: Option<String>,
    },

    /// A mail-send round trip completed with a status other than 202 and a
    /// body that could not be parsed as an error payload.
    #[error("failed to send message (status {status}): failed to parse error response: {source}")]
    SendParse {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}
