//! Token source capability
//!
//! OAuth2 token acquisition lives outside this crate. The client only needs
//! a single-method capability that yields an access/refresh token pair, so
//! any concrete OAuth implementation can be plugged in.

use async_trait::async_trait;

use crate::error::Error;

/// An access/refresh token pair produced by a [`TokenSource`].
#[derive(Debug, Clone, Default)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
}

/// Capability for obtaining a token on behalf of a user.
///
/// The library calls this exactly once, when a [`Session`](crate::Session)
/// is created; the token is not refreshed afterwards.
#[async_trait]
pub trait TokenSource: Send + Sync {
    async fn token(&self) -> Result<Token, Error>;
}

/// Token source that hands out a fixed, pre-acquired token.
///
/// Useful when the application manages OAuth itself and already holds a
/// token for the user.
#[derive(Debug, Clone)]
pub struct StaticTokenSource {
    token: Token,
}

impl StaticTokenSource {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            token: Token {
                access_token: access_token.into(),
                refresh_token: refresh_token.into(),
            },
        }
    }
}

#[async_trait]
impl TokenSource for StaticTokenSource {
    async fn token(&self) -> Result<Token, Error> {
        Ok(self.token.clone())
    }
}
