//! Coinbase REST API client implementation.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use reqwest::Method;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::auth::{
    ClientBearerSigner, Credentials, KeySecretSigner, NonceProvider, OAuthTokens, Signer,
};
use crate::error::CoinbaseError;
use crate::rest::endpoints::Environment;
use crate::rest::transport::{Transport, TransportConfig, with_trailing_slash};

/// The Coinbase REST API client.
///
/// Every call is signed by the client's [`Signer`] and answered either by the
/// network or, in replay mode, by a JSON fixture on disk.
///
/// # Example
///
/// ```rust,no_run
/// use coinbase_api_client::CoinbaseClient;
/// use coinbase_api_client::auth::Credentials;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let client = CoinbaseClient::builder()
///         .credentials(Credentials::new("api_key", "api_secret"))
///         .build()?;
///
///     let balance = client.get_balance().await?;
///     println!("Balance: {} {}", balance.amount, balance.currency);
///
///     Ok(())
/// }
/// ```
///
/// OAuth tokens obtained through [`crate::oauth::OAuthService`] work the same way:
///
/// ```rust,no_run
/// use coinbase_api_client::CoinbaseClient;
/// use coinbase_api_client::auth::OAuthTokens;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let tokens = OAuthTokens::expiring_in("access", "refresh", 7200)?;
///     let client = CoinbaseClient::builder().oauth_tokens(tokens).build()?;
///
///     let user = client.get_user().await?;
///     println!("Signed in as {:?}", user.email);
///
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct CoinbaseClient {
    signer: Signer,
    transport: Transport,
}

impl CoinbaseClient {
    /// Create a new client builder.
    pub fn builder() -> CoinbaseClientBuilder {
        CoinbaseClientBuilder::new()
    }

    /// Create a key/secret client from `COINBASE_API_KEY` and `COINBASE_API_SECRET`.
    pub fn from_env() -> Result<Self, CoinbaseError> {
        Self::builder().credentials(Credentials::from_env()?).build()
    }

    /// The signer attached to every request.
    pub fn signer(&self) -> &Signer {
        &self.signer
    }

    /// Whether responses come from fixtures instead of the network.
    pub fn is_replay(&self) -> bool {
        self.transport.is_replay()
    }

    /// Send a request and decode the JSON response.
    ///
    /// No envelope check happens here; endpoint methods run it on their
    /// own holder types.
    pub async fn request<T, P>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
    ) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        let body = self
            .transport
            .send(method, endpoint, params, &self.signer)
            .await?;
        Ok(serde_json::from_slice(&body)?)
    }

    /// Make a GET request.
    pub async fn get<T, P>(&self, endpoint: &str, params: &P) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::GET, endpoint, params).await
    }

    /// Make a POST request.
    pub async fn post<T, P>(&self, endpoint: &str, params: &P) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::POST, endpoint, params).await
    }

    /// Make a PUT request.
    pub async fn put<T, P>(&self, endpoint: &str, params: &P) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::PUT, endpoint, params).await
    }

    /// Make a DELETE request.
    pub async fn delete<T, P>(&self, endpoint: &str, params: &P) -> Result<T, CoinbaseError>
    where
        T: DeserializeOwned,
        P: Serialize + ?Sized,
    {
        self.request(Method::DELETE, endpoint, params).await
    }
}

enum Authentication {
    KeySecret(Credentials),
    Bearer(OAuthTokens),
}

/// Builder for [`CoinbaseClient`].
pub struct CoinbaseClientBuilder {
    base_url: String,
    authentication: Option<Authentication>,
    nonce_provider: Option<Arc<dyn NonceProvider>>,
    transport: TransportConfig,
}

impl CoinbaseClientBuilder {
    /// Create a new builder targeting production.
    pub fn new() -> Self {
        Self {
            base_url: Environment::Production.base_url().to_string(),
            authentication: None,
            nonce_provider: None,
            transport: TransportConfig::default(),
        }
    }

    /// Set the base URL (useful for testing with a mock server).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Target one of the known deployments.
    pub fn environment(mut self, environment: Environment) -> Self {
        self.base_url = environment.base_url().to_string();
        self
    }

    /// Authenticate with an API key/secret pair.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.authentication = Some(Authentication::KeySecret(credentials));
        self
    }

    /// Authenticate with a user's OAuth tokens.
    pub fn oauth_tokens(mut self, tokens: OAuthTokens) -> Self {
        self.authentication = Some(Authentication::Bearer(tokens));
        self
    }

    /// Set a custom nonce provider for key/secret signing.
    pub fn nonce_provider(mut self, provider: Arc<dyn NonceProvider>) -> Self {
        self.nonce_provider = Some(provider);
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

    /// Answer every request from `<root>/<METHOD>_<endpoint>.json`.
    pub fn replay(mut self, root: impl Into<PathBuf>) -> Self {
        self.transport.replay = Some(root.into());
        self
    }

    /// Build the client.
    ///
    /// Fails with [`CoinbaseError::MissingCredentials`] if neither
    /// credentials nor OAuth tokens were given.
    pub fn build(self) -> Result<CoinbaseClient, CoinbaseError> {
        let base_url = with_trailing_slash(self.base_url);
        let signer = match self.authentication {
            Some(Authentication::KeySecret(credentials)) => match self.nonce_provider {
                Some(provider) => Signer::KeySecret(KeySecretSigner::with_nonce_provider(
                    credentials,
                    base_url,
                    provider,
                )),
                None => Signer::KeySecret(KeySecretSigner::new(credentials, base_url)),
            },
            Some(Authentication::Bearer(tokens)) => {
                Signer::ClientBearer(ClientBearerSigner::new(tokens, base_url))
            }
            None => return Err(CoinbaseError::MissingCredentials),
        };

        let transport = Transport::new(&self.transport, &signer)?;
        Ok(CoinbaseClient { signer, transport })
    }
}

impl Default for CoinbaseClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
