//! Request execution: signing, sending, and fixture replay.

use std::path::{Path, PathBuf};
use std::time::Duration;

use reqwest::Method;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue, USER_AGENT};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::Serialize;
use tracing::{debug, warn};

use crate::auth::Signer;
use crate::error::CoinbaseError;

/// How long to wait for a TCP connection before giving up.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Default `User-Agent` header.
pub fn default_user_agent() -> String {
    format!("coinbase-api-client/{}", env!("CARGO_PKG_VERSION"))
}

/// Settings for building a [`Transport`].
#[derive(Debug, Clone)]
pub struct TransportConfig {
    /// Value of the `User-Agent` header.
    pub user_agent: String,
    /// Connect timeout; there is no overall request timeout.
    pub connect_timeout: Duration,
    /// When set, requests are answered from JSON files under this directory.
    pub replay: Option<PathBuf>,
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            replay: None,
        }
    }
}

/// Sends signed JSON requests and returns raw response bodies.
#[derive(Clone)]
pub struct Transport {
    http_client: ClientWithMiddleware,
    replay: Option<PathBuf>,
}

impl Transport {
    /// Build a transport for `signer`.
    ///
    /// When the signer pins root certificates, they are the only trust
    /// anchors: built-in and platform roots are disabled.
    pub fn new(config: &TransportConfig, signer: &Signer) -> Result<Self, CoinbaseError> {
        let mut headers = HeaderMap::new();
        let user_agent = HeaderValue::from_str(&config.user_agent)
            .map_err(|e| CoinbaseError::InvalidConfig(format!("Invalid user agent: {e}")))?;
        headers.insert(USER_AGENT, user_agent);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let mut builder = reqwest::Client::builder()
            .default_headers(headers)
            .connect_timeout(config.connect_timeout);
        let roots = signer.root_certificates();
        if !roots.is_empty() {
            builder = builder.tls_certs_only(roots.iter().cloned());
        }

        let client = ClientBuilder::new(builder.build()?)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            http_client: client,
            replay: config.replay.clone(),
        })
    }

    /// Whether requests are served from fixtures instead of the network.
    pub fn is_replay(&self) -> bool {
        self.replay.is_some()
    }

    /// Send one request and return the response body.
    ///
    /// `params` is sent as the JSON body; a unit or `None` value becomes `{}`.
    pub async fn send<P>(
        &self,
        method: Method,
        endpoint: &str,
        params: &P,
        signer: &Signer,
    ) -> Result<Vec<u8>, CoinbaseError>
    where
        P: Serialize + ?Sized,
    {
        let body = encode_body(params)?;

        if let Some(root) = &self.replay {
            return replay(root, &method, endpoint).await;
        }

        let url = format!("{}{}", signer.base_url(), endpoint);
        let auth_headers = signer.sign(&url, &body)?;

        debug!(%method, %url, "sending request");
        let response = self
            .http_client
            .request(method.clone(), &url)
            .headers(auth_headers)
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            if bytes.is_empty() {
                warn!(%method, %url, %status, "response body was empty");
            } else {
                warn!(%method, %url, %status, body = %String::from_utf8_lossy(&bytes), "request failed");
            }
            return Err(CoinbaseError::Status {
                method,
                url,
                status,
            });
        }

        Ok(bytes.to_vec())
    }
}

impl std::fmt::Debug for Transport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transport")
            .field("replay", &self.replay)
            .finish()
    }
}

/// Append the `/` endpoint paths are joined onto, if missing.
pub(crate) fn with_trailing_slash(mut base_url: String) -> String {
    if !base_url.ends_with('/') {
        base_url.push('/');
    }
    base_url
}

/// Path of the fixture answering `method` on `endpoint`.
///
/// `POST` on `transactions/send_money` maps to
/// `<root>/POST_transactions_send_money.json`.
pub fn fixture_path(root: &Path, method: &Method, endpoint: &str) -> PathBuf {
    root.join(format!("{}_{}.json", method.as_str(), endpoint.replace('/', "_")))
}

async fn replay(root: &Path, method: &Method, endpoint: &str) -> Result<Vec<u8>, CoinbaseError> {
    let path = fixture_path(root, method, endpoint);
    debug!(%method, endpoint, path = %path.display(), "replaying fixture");
    tokio::fs::read(&path)
        .await
        .map_err(|source| CoinbaseError::Fixture { path, source })
}

fn encode_body<P>(params: &P) -> Result<String, CoinbaseError>
where
    P: Serialize + ?Sized,
{
    let body = serde_json::to_string(params)?;
    if body == "null" {
        Ok("{}".to_string())
    } else {
        Ok(body)
    }
}
