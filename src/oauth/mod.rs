//! OAuth authorization-code flow for apps acting on behalf of users.
//!
//! Send the user to [`OAuthService::create_authorize_url`], then exchange the
//! `code` Coinbase redirects back with for [`OAuthTokens`]. Tokens are used
//! with [`crate::CoinbaseClientBuilder::oauth_tokens`] and refreshed here once
//! the client reports [`CoinbaseError::ExpiredCredentials`].
//!
//! ```rust,no_run
//! use coinbase_api_client::oauth::OAuthService;
//!
//! # async fn run() -> Result<(), coinbase_api_client::CoinbaseError> {
//! let oauth = OAuthService::builder("client_id", "client_secret", "https://example.com/callback")
//!     .ca_bundle("/etc/coinbase/ca-coinbase.crt")
//!     .build()?;
//!
//! let url = oauth.create_authorize_url(&["user", "balance"])?;
//! println!("Visit {url}");
//!
//! let tokens = oauth
//!     .new_tokens_from_redirect("https://example.com/callback?code=abc")
//!     .await?;
//! # Ok(())
//! # }
//! ```

mod types;

pub use types::GrantType;

use std::path::PathBuf;
use std::time::Duration;

use reqwest::Method;
use secrecy::{ExposeSecret, SecretString};
use tracing::debug;
use url::Url;

use crate::auth::{OAuthTokens, ServiceBearerSigner, Signer};
use crate::error::CoinbaseError;
use crate::oauth::types::{AuthorizeQuery, TokenGrant, TokenRequest};
use crate::rest::endpoints::oauth::{AUTHORIZE_URL, OAUTH_BASE_URL, TOKEN};
use crate::rest::transport::with_trailing_slash;
use crate::rest::{Transport, TransportConfig};

const CLIENT_ID_VAR: &str = "COINBASE_CLIENT_ID";
const CLIENT_SECRET_VAR: &str = "COINBASE_CLIENT_SECRET";

/// Issues and refreshes OAuth tokens for one registered application.
#[derive(Clone)]
pub struct OAuthService {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
    authorize_url: String,
    signer: Signer,
    transport: Transport,
}

impl OAuthService {
    /// Create a builder for the application's credentials.
    pub fn builder(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> OAuthServiceBuilder {
        OAuthServiceBuilder::new(client_id, client_secret, redirect_uri)
    }

    /// The URL users visit to grant the application `scope`.
    pub fn create_authorize_url(&self, scope: &[&str]) -> Result<String, CoinbaseError> {
        let query = serde_urlencoded::to_string(AuthorizeQuery {
            client_id: &self.client_id,
            redirect_uri: &self.redirect_uri,
            response_type: "code",
            scope: scope.join(" "),
        })?;

        let mut url = Url::parse(&self.authorize_url)?;
        url.set_query(Some(&query));
        Ok(url.into())
    }

    /// Exchange `code` for tokens using the given grant.
    ///
    /// `code` is the authorization code or, for [`GrantType::RefreshToken`],
    /// the refresh token.
    pub async fn get_tokens(
        &self,
        code: &str,
        grant_type: GrantType,
    ) -> Result<OAuthTokens, CoinbaseError> {
        let request = TokenRequest {
            grant_type,
            redirect_uri: &self.redirect_uri,
            client_id: &self.client_id,
            client_secret: self.client_secret.expose_secret(),
            code: None,
            refresh_token: None,
        }
        .with_code(code);

        debug!(?grant_type, "requesting OAuth tokens");
        let body = self
            .transport
            .send(Method::POST, TOKEN, &request, &self.signer)
            .await?;
        let grant: TokenGrant = serde_json::from_slice(&body)?;
        debug!(expires_in = grant.expires_in, scope = ?grant.scope, "received OAuth tokens");

        OAuthTokens::expiring_in(grant.access_token, grant.refresh_token, grant.expires_in)
    }

    /// Exchange an authorization code for tokens.
    pub async fn new_tokens(&self, code: &str) -> Result<OAuthTokens, CoinbaseError> {
        self.get_tokens(code, GrantType::AuthorizationCode).await
    }

    /// Exchange the `code` query parameter of a redirect URL for tokens.
    pub async fn new_tokens_from_redirect(
        &self,
        redirect: &str,
    ) -> Result<OAuthTokens, CoinbaseError> {
        let code = code_from_redirect(redirect)?;
        self.new_tokens(&code).await
    }

    /// Trade the refresh token of `tokens` for a fresh pair.
    pub async fn refresh_tokens(&self, tokens: &OAuthTokens) -> Result<OAuthTokens, CoinbaseError> {
        self.get_tokens(tokens.refresh_token(), GrantType::RefreshToken)
            .await
    }
}

impl std::fmt::Debug for OAuthService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthService")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("redirect_uri", &self.redirect_uri)
            .field("signer", &self.signer)
            .finish()
    }
}

fn code_from_redirect(redirect: &str) -> Result<String, CoinbaseError> {
    let url = Url::parse(redirect)?;
    url.query_pairs()
        .find(|(name, _)| name == "code")
        .map(|(_, code)| code.into_owned())
        .ok_or_else(|| {
            CoinbaseError::InvalidResponse(format!("No 'code' parameter in {redirect}"))
        })
}

/// Builder for [`OAuthService`].
pub struct OAuthServiceBuilder {
    client_id: String,
    client_secret: SecretString,
    redirect_uri: String,
    base_url: String,
    authorize_url: String,
    ca_bundle: Option<PathBuf>,
    transport: TransportConfig,
}

impl OAuthServiceBuilder {
    /// Create a builder with the production endpoints.
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        redirect_uri: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: SecretString::from(client_secret.into()),
            redirect_uri: redirect_uri.into(),
            base_url: OAUTH_BASE_URL.to_string(),
            authorize_url: AUTHORIZE_URL.to_string(),
            ca_bundle: None,
            transport: TransportConfig::default(),
        }
    }

    /// Read the client ID and secret from `COINBASE_CLIENT_ID` and `COINBASE_CLIENT_SECRET`.
    pub fn from_env(redirect_uri: impl Into<String>) -> Result<Self, CoinbaseError> {
        let client_id =
            std::env::var(CLIENT_ID_VAR).map_err(|_| CoinbaseError::MissingCredentials)?;
        let client_secret =
            std::env::var(CLIENT_SECRET_VAR).map_err(|_| CoinbaseError::MissingCredentials)?;
        Ok(Self::new(client_id, client_secret, redirect_uri))
    }

    /// PEM bundle of the CAs trusted for the token endpoint. Required.
    pub fn ca_bundle(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_bundle = Some(path.into());
        self
    }

    /// Set the base URL token requests are sent to.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Set the page users are sent to for authorization.
    pub fn authorize_url(mut self, url: impl Into<String>) -> Self {
        self.authorize_url = url.into();
        self
    }

    /// Set a custom user agent.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.transport.user_agent = user_agent.into();
        self
    }

    /// Set the TCP connect timeout.
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.transport.connect_timeout = timeout;
        self
    }

    /// Answer token requests from fixtures under `root`.
    pub fn replay(mut self, root: impl Into<PathBuf>) -> Self {
        self.transport.replay = Some(root.into());
        self
    }

    /// Build the service, loading the CA bundle.
    pub fn build(self) -> Result<OAuthService, CoinbaseError> {
        let ca_bundle = self
            .ca_bundle
            .ok_or_else(|| CoinbaseError::Certificate("no CA bundle configured".to_string()))?;
        let signer = Signer::ServiceBearer(ServiceBearerSigner::from_ca_bundle(
            with_trailing_slash(self.base_url),
            ca_bundle,
        )?);
        let transport = Transport::new(&self.transport, &signer)?;

        Ok(OAuthService {
            client_id: self.client_id,
            client_secret: self.client_secret,
            redirect_uri: self.redirect_uri,
            authorize_url: self.authorize_url,
            signer,
            transport,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CA_BUNDLE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ca-bundle.pem");

    fn service() -> OAuthService {
        OAuthService::builder("abc", "shh", "https://localhost:3000/tokens")
            .ca_bundle(CA_BUNDLE)
            .build()
            .unwrap()
    }

    #[test]
    fn test_authorize_url() {
        let url = service().create_authorize_url(&["user", "balance"]).unwrap();
        assert_eq!(
            url,
            "https://coinbase.com/oauth/authorize?client_id=abc&redirect_uri=https%3A%2F%2Flocalhost%3A3000%2Ftokens&response_type=code&scope=user+balance"
        );
    }

    #[test]
    fn test_build_requires_ca_bundle() {
        let result = OAuthService::builder("abc", "shh", "https://localhost/").build();
        assert!(matches!(result, Err(CoinbaseError::Certificate(_))));
    }

    #[test]
    fn test_code_from_redirect() {
        assert_eq!(
            code_from_redirect("https://localhost:3000/tokens?state=x&code=c%2F1").unwrap(),
            "c/1"
        );
        assert!(matches!(
            code_from_redirect("https://localhost:3000/tokens?state=x"),
            Err(CoinbaseError::InvalidResponse(_))
        ));
    }

    #[test]
    fn test_debug_redacts_secret() {
        let debug = format!("{:?}", service());
        assert!(debug.contains("[REDACTED]"));
        assert!(!debug.contains("shh"));
    }
}
