//! Authentication strategies attached to every outgoing request.
//!
//! A [`Signer`] owns exactly one credential for its lifetime and turns a
//! request's URL and body into the headers that identify the caller.

use std::path::Path;
use std::sync::Arc;

use reqwest::Certificate;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderName, HeaderValue};

use crate::auth::{Credentials, IncreasingNonce, NonceProvider, OAuthTokens, sign_request};
use crate::error::CoinbaseError;

/// Header carrying the public API key.
pub const ACCESS_KEY: HeaderName = HeaderName::from_static("access_key");
/// Header carrying the hex HMAC-SHA256 signature.
pub const ACCESS_SIGNATURE: HeaderName = HeaderName::from_static("access_signature");
/// Header carrying the nonce that was signed.
pub const ACCESS_NONCE: HeaderName = HeaderName::from_static("access_nonce");

/// The authentication strategy used by a client.
#[derive(Clone, Debug)]
pub enum Signer {
    /// API key + secret, HMAC-signed per request.
    KeySecret(KeySecretSigner),
    /// OAuth access token on behalf of a user.
    ClientBearer(ClientBearerSigner),
    /// Service-level OAuth calls over a pinned CA bundle, no per-request header.
    ServiceBearer(ServiceBearerSigner),
}

impl Signer {
    /// Produce the authentication headers for a request.
    ///
    /// `url` is the full request URL and `body` the exact JSON body sent.
    pub fn sign(&self, url: &str, body: &str) -> Result<HeaderMap, CoinbaseError> {
        match self {
            Signer::KeySecret(signer) => signer.sign(url, body),
            Signer::ClientBearer(signer) => signer.sign(),
            Signer::ServiceBearer(_) => Ok(HeaderMap::new()),
        }
    }

    /// The base URL endpoint paths are appended to.
    pub fn base_url(&self) -> &str {
        match self {
            Signer::KeySecret(signer) => &signer.base_url,
            Signer::ClientBearer(signer) => &signer.base_url,
            Signer::ServiceBearer(signer) => &signer.base_url,
        }
    }

    /// Root certificates the HTTP handle must trust for this signer.
    pub fn root_certificates(&self) -> &[Certificate] {
        match self {
            Signer::ServiceBearer(signer) => &signer.root_certificates,
            _ => &[],
        }
    }
}

/// Signs requests with an API key/secret pair.
#[derive(Clone)]
pub struct KeySecretSigner {
    credentials: Credentials,
    base_url: String,
    nonce_provider: Arc<dyn NonceProvider>,
}

impl KeySecretSigner {
    /// Create a signer using the default [`IncreasingNonce`].
    pub fn new(credentials: Credentials, base_url: impl Into<String>) -> Self {
        Self::with_nonce_provider(credentials, base_url, Arc::new(IncreasingNonce::new()))
    }

    /// Create a signer with a custom nonce source.
    pub fn with_nonce_provider(
        credentials: Credentials,
        base_url: impl Into<String>,
        nonce_provider: Arc<dyn NonceProvider>,
    ) -> Self {
        Self {
            credentials,
            base_url: base_url.into(),
            nonce_provider,
        }
    }

    fn sign(&self, url: &str, body: &str) -> Result<HeaderMap, CoinbaseError> {
        let nonce = self.nonce_provider.next_nonce();
        let signature = sign_request(&self.credentials, nonce, url, body)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCESS_KEY, header_value(&self.credentials.api_key)?);
        headers.insert(ACCESS_SIGNATURE, header_value(&signature)?);
        headers.insert(ACCESS_NONCE, HeaderValue::from(nonce));
        Ok(headers)
    }
}

impl std::fmt::Debug for KeySecretSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeySecretSigner")
            .field("credentials", &self.credentials)
            .field("base_url", &self.base_url)
            .finish()
    }
}

/// Attaches a user's OAuth access token as a bearer header.
#[derive(Clone, Debug)]
pub struct ClientBearerSigner {
    tokens: OAuthTokens,
    base_url: String,
}

impl ClientBearerSigner {
    /// Create a bearer signer for previously obtained tokens.
    pub fn new(tokens: OAuthTokens, base_url: impl Into<String>) -> Self {
        Self {
            tokens,
            base_url: base_url.into(),
        }
    }

    /// The tokens this signer presents.
    pub fn tokens(&self) -> &OAuthTokens {
        &self.tokens
    }

    fn sign(&self) -> Result<HeaderMap, CoinbaseError> {
        if self.tokens.is_expired() {
            return Err(CoinbaseError::ExpiredCredentials);
        }

        let mut value = header_value(&format!("Bearer {}", self.tokens.access_token()))?;
        value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

/// Identity for the OAuth token endpoint, established by TLS alone.
#[derive(Clone)]
pub struct ServiceBearerSigner {
    base_url: String,
    root_certificates: Vec<Certificate>,
}

impl ServiceBearerSigner {
    /// Load the PEM CA bundle at `ca_bundle` and pin it.
    ///
    /// Fails if the file cannot be read or holds no usable certificate.
    pub fn from_ca_bundle(
        base_url: impl Into<String>,
        ca_bundle: impl AsRef<Path>,
    ) -> Result<Self, CoinbaseError> {
        let path = ca_bundle.as_ref();
        let pem = std::fs::read(path)?;
        let root_certificates = Certificate::from_pem_bundle(&pem)
            .map_err(|e| CoinbaseError::Certificate(format!("{}: {e}", path.display())))?;

        if root_certificates.is_empty() {
            return Err(CoinbaseError::Certificate(format!(
                "no certificates found in {}",
                path.display()
            )));
        }

        Ok(Self {
            base_url: base_url.into(),
            root_certificates,
        })
    }
}

impl std::fmt::Debug for ServiceBearerSigner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceBearerSigner")
            .field("base_url", &self.base_url)
            .field("root_certificates", &self.root_certificates.len())
            .finish()
    }
}

fn header_value(value: &str) -> Result<HeaderValue, CoinbaseError> {
    HeaderValue::from_str(value)
        .map_err(|e| CoinbaseError::Auth(format!("Invalid header value: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::{Duration, OffsetDateTime};

    struct FixedNonce(u64);

    impl NonceProvider for FixedNonce {
        fn next_nonce(&self) -> u64 {
            self.0
        }
    }

    const BASE: &str = "https://api.coinbase.com/v1/";

    #[test]
    fn test_key_secret_headers() {
        let signer = Signer::KeySecret(KeySecretSigner::with_nonce_provider(
            Credentials::new("K", "S"),
            BASE,
            Arc::new(FixedNonce(1700000000000000000)),
        ));

        let headers = signer
            .sign("https://api.coinbase.com/v1/account/balance", "{}")
            .unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers[&ACCESS_KEY], "K");
        assert_eq!(headers[&ACCESS_NONCE], "1700000000000000000");
        assert_eq!(
            headers[&ACCESS_SIGNATURE],
            "4ab50c9bad171beaac396e803b083b6d2eadf1bd78ed72090b490af26a80d6cc"
        );
    }

    #[test]
    fn test_key_secret_nonce_changes_per_request() {
        let signer = Signer::KeySecret(KeySecretSigner::new(Credentials::new("K", "S"), BASE));
        let url = "https://api.coinbase.com/v1/account/balance";

        let first = signer.sign(url, "{}").unwrap();
        let second = signer.sign(url, "{}").unwrap();

        assert_ne!(first[&ACCESS_NONCE], second[&ACCESS_NONCE]);
        assert_ne!(first[&ACCESS_SIGNATURE], second[&ACCESS_SIGNATURE]);
    }

    #[test]
    fn test_bearer_sets_single_authorization_header() {
        let tokens = OAuthTokens::expiring_in("token-123", "refresh-456", 3600).unwrap();
        let signer = Signer::ClientBearer(ClientBearerSigner::new(tokens, BASE));

        let headers = signer.sign("https://api.coinbase.com/v1/users", "{}").unwrap();

        assert_eq!(headers.len(), 1);
        assert_eq!(headers[AUTHORIZATION], "Bearer token-123");
    }

    #[test]
    fn test_bearer_expired_fails_without_header() {
        let expired = OffsetDateTime::now_utc() - Duration::seconds(60);
        let tokens = OAuthTokens::new("token-123", "refresh-456", expired);
        let signer = Signer::ClientBearer(ClientBearerSigner::new(tokens, BASE));

        let result = signer.sign("https://api.coinbase.com/v1/users", "{}");

        assert!(matches!(result, Err(CoinbaseError::ExpiredCredentials)));
    }

    #[test]
    fn test_service_bearer_missing_bundle() {
        let result = ServiceBearerSigner::from_ca_bundle(
            "https://coinbase.com/",
            "/nonexistent/coinbase-ca-bundle.pem",
        );
        assert!(matches!(result, Err(CoinbaseError::Io(_))));
    }

    #[test]
    fn test_service_bearer_rejects_bundle_without_certificates() {
        let path = std::env::temp_dir().join("coinbase-api-client-empty-bundle.pem");
        std::fs::write(&path, "this is not a certificate\n").unwrap();

        let result = ServiceBearerSigner::from_ca_bundle("https://coinbase.com/", &path);

        assert!(matches!(result, Err(CoinbaseError::Certificate(_))));
        let _ = std::fs::remove_file(path);
    }

    #[test]
    fn test_service_bearer_loads_bundle_and_signs_nothing() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ca-bundle.pem");
        let signer = Signer::ServiceBearer(
            ServiceBearerSigner::from_ca_bundle("https://coinbase.com/", path).unwrap(),
        );

        assert_eq!(signer.root_certificates().len(), 1);
        assert_eq!(signer.base_url(), "https://coinbase.com/");
        assert!(signer.sign("https://coinbase.com/oauth/token", "{}").unwrap().is_empty());
    }
}
