//! Wire types for the OAuth authorize and token endpoints.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

/// How a token request proves it may receive tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GrantType {
    /// Exchange an authorization code from the redirect.
    AuthorizationCode,
    /// Exchange a refresh token.
    RefreshToken,
}

// Fields are declared in sorted order so the encoded query is stable.
#[derive(Debug, Serialize)]
pub(crate) struct AuthorizeQuery<'a> {
    pub client_id: &'a str,
    pub redirect_uri: &'a str,
    pub response_type: &'static str,
    pub scope: String,
}

#[skip_serializing_none]
#[derive(Debug, Serialize)]
pub(crate) struct TokenRequest<'a> {
    pub grant_type: GrantType,
    pub redirect_uri: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub code: Option<&'a str>,
    pub refresh_token: Option<&'a str>,
}

impl<'a> TokenRequest<'a> {
    /// Put `code` in the field `grant_type` expects.
    pub fn with_code(mut self, code: &'a str) -> Self {
        match self.grant_type {
            GrantType::AuthorizationCode => self.code = Some(code),
            GrantType::RefreshToken => self.refresh_token = Some(code),
        }
        self
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenGrant {
    pub access_token: String,
    pub expires_in: i64,
    pub refresh_token: String,
    #[serde(default)]
    pub scope: Option<String>,
}
