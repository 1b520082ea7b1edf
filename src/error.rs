//! Error types for the Coinbase client library.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for all Coinbase client operations.
#[derive(Error, Debug)]
pub enum CoinbaseError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// HTTP request with middleware failed
    #[error("HTTP request failed: {0}")]
    HttpMiddleware(#[from] reqwest_middleware::Error),

    /// The server answered with a non-success status code
    #[error("{method} {url} failed. Response code was {status}")]
    Status {
        /// HTTP method of the failed request
        method: reqwest::Method,
        /// Full URL of the failed request
        url: String,
        /// Status line returned by the server
        status: reqwest::StatusCode,
    },

    /// A replay fixture could not be read
    #[error("Fixture {} could not be read: {source}", path.display())]
    Fixture {
        /// Resolved fixture path
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// URL parsing error
    #[error("URL parsing error: {0}")]
    Url(#[from] url::ParseError),

    /// Query string encoding error
    #[error("Query encoding error: {0}")]
    UrlEncoded(#[from] serde_urlencoded::ser::Error),

    /// Coinbase API reported `success: false`
    #[error(transparent)]
    Api(ApiError),

    /// OAuth access token is past its expiry time
    #[error("The OAuth tokens are expired. Use refresh_tokens to refresh them")]
    ExpiredCredentials,

    /// Authentication error
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Certificate bundle could not be used
    #[error("Certificate error: {0}")]
    Certificate(String),

    /// Local I/O error (e.g. reading a certificate bundle)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid client configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Invalid response from the API
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Missing required credentials
    #[error("Missing credentials: an API key/secret pair or OAuth tokens are required")]
    MissingCredentials,
}

impl From<ApiError> for CoinbaseError {
    fn from(error: ApiError) -> Self {
        CoinbaseError::Api(error)
    }
}

/// Error reported by the Coinbase API in a `success: false` envelope.
///
/// Carries the remote messages and the client method that received them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    /// Messages from the `errors` array, or the single `error` string
    pub messages: Vec<String>,
    /// Name of the client method that made the call
    pub method: String,
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.messages.is_empty() {
            write!(f, "unspecified error in {}()", self.method)
        } else {
            write!(f, "{} in {}()", self.messages.join(","), self.method)
        }
    }
}

impl std::error::Error for ApiError {}

impl ApiError {
    /// Create a new API error from remote messages and the calling method.
    pub fn new(messages: Vec<String>, method: impl Into<String>) -> Self {
        Self {
            messages,
            method: method.into(),
        }
    }

    /// Check if any remote message contains the given text.
    pub fn contains(&self, needle: &str) -> bool {
        self.messages.iter().any(|m| m.contains(needle))
    }

    /// True when the server flagged failure without saying why.
    pub fn is_unspecified(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display_joins_messages() {
        let error = ApiError::new(vec!["A".to_string(), "B".to_string()], "Foo");
        assert_eq!(error.to_string(), "A,B in Foo()");
    }

    #[test]
    fn test_api_error_display_unspecified() {
        let error = ApiError::new(vec![], "get_order");
        assert!(error.is_unspecified());
        assert_eq!(error.to_string(), "unspecified error in get_order()");
    }

    #[test]
    fn test_api_variant_displays_remote_message() {
        let error = CoinbaseError::from(ApiError::new(
            vec!["A".to_string(), "B".to_string()],
            "Foo",
        ));
        assert_eq!(error.to_string(), "A,B in Foo()");
    }

    #[test]
    fn test_status_error_display() {
        let error = CoinbaseError::Status {
            method: reqwest::Method::GET,
            url: "https://api.coinbase.com/v1/account/balance".to_string(),
            status: reqwest::StatusCode::UNAUTHORIZED,
        };
        assert_eq!(
            error.to_string(),
            "GET https://api.coinbase.com/v1/account/balance failed. Response code was 401 Unauthorized"
        );
    }
}
