//! Outlook library crate
//!
//! Client library for Microsoft's Graph API, specifically for mail and
//! calendar, acting on behalf of an authenticated user. A [`Client`] holds
//! the transport configuration and a pluggable [`TokenSource`]; a
//! [`Session`] layers the user's bearer token and the `/me` path scope on
//! top and hands out the typed per-resource services.
//!
//! ```no_run
//! use outlook::{Client, StaticTokenSource};
//!
//! # async fn run() -> Result<(), outlook::Error> {
//! let client = Client::builder()
//!     .token_source(StaticTokenSource::new("access", "refresh"))
//!     .build()?;
//! let session = client.session().await?;
//! let folders = session.folders().list().await?;
//! # let _ = folders;
//! # Ok(())
//! # }
//! ```
//!
//! Token acquisition and refresh live outside this crate; the session reads
//! a token once at construction and never refreshes it.

use std::time::Duration;

pub mod client;
pub mod error;
pub mod models;
pub mod query;
pub mod services;
pub mod session;
pub mod token;

// Re-export commonly used types
pub use client::{Client, ClientBuilder, JsonSink, MediaType, Payload, ResponseMeta, ResultTarget};
pub use error::Error;
pub use query::{QueryParams, QueryValue};
pub use session::Session;
pub use token::{StaticTokenSource, Token, TokenSource};

/// The current version of this sdk.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// The root host url for the microsoft graph api.
pub const DEFAULT_BASE_URL: &str = "https://graph.microsoft.com/v1.0";

/// The url used to exchange a user's refresh token for a usable access
/// token. Collaborating oauth implementations talk to it; this crate does
/// not.
pub const DEFAULT_OAUTH_TOKEN_URL: &str =
    "https://login.microsoftonline.com/common/oauth2/v2.0/token";

/// The set of permissions a client will request from the user.
pub const DEFAULT_AUTH_SCOPES: &str = "mail.read calendars.read user.read offline_access";

/// Time format for datetime query parameters: RFC3339, UTC, no fractional
/// seconds.
pub const QUERY_DATETIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Request timeout applied to the default transport.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

/// The user agent passed in request headers on each call.
pub const DEFAULT_USER_AGENT: &str = concat!("outlook/", env!("CARGO_PKG_VERSION"));
