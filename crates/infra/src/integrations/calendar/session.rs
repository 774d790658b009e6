//! Pre-issued bearer token sessions

use std::fmt;

use async_trait::async_trait;
use classcal_core::AuthorizedSession;
use classcal_domain::{ClassCalError, Result};

/// Environment variable holding an already-issued Google access token.
pub const ACCESS_TOKEN_ENV: &str = "GOOGLE_CALENDAR_ACCESS_TOKEN";

/// Session backed by a fixed access token.
#[derive(Clone)]
pub struct StaticTokenSession {
    token: String,
}

impl StaticTokenSession {
    /// # Errors
    /// Returns `ClassCalError::Auth` if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into().trim().to_string();
        if token.is_empty() {
            return Err(ClassCalError::Auth("access token is empty".into()));
        }
        Ok(Self { token })
    }

    /// Use `configured` if present, otherwise `GOOGLE_CALENDAR_ACCESS_TOKEN`.
    ///
    /// # Errors
    /// Returns `ClassCalError::Auth` if neither yields a token.
    pub fn resolve(configured: Option<&str>) -> Result<Self> {
        match configured {
            Some(token) => Self::new(token),
            None => std::env::var(ACCESS_TOKEN_ENV).map_err(|_| {
                ClassCalError::Auth(format!("{ACCESS_TOKEN_ENV} not set"))
            })
            .and_then(Self::new),
        }
    }
}

impl fmt::Debug for StaticTokenSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StaticTokenSession").field("token", &"<redacted>").finish()
    }
}

#[async_trait]
impl AuthorizedSession for StaticTokenSession {
    async fn access_token(&self) -> Result<String> {
        Ok(self.token.clone())
    }
}
