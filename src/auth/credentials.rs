//! Credential management for Coinbase API authentication.

use secrecy::{ExposeSecret, SecretString};
use time::{Duration, OffsetDateTime};

use crate::error::CoinbaseError;

const DEFAULT_KEY_VAR: &str = "COINBASE_API_KEY";
const DEFAULT_SECRET_VAR: &str = "COINBASE_API_SECRET";

/// API credentials containing the key and secret.
#[derive(Clone)]
pub struct Credentials {
    /// The API key (public identifier)
    pub api_key: String,
    /// The API secret (private, used for signing)
    api_secret: SecretString,
}

impl Credentials {
    /// Create new credentials from an API key and secret.
    pub fn new(api_key: impl Into<String>, api_secret: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_secret: SecretString::from(api_secret.into()),
        }
    }

    /// Get the API secret for signing.
    ///
    /// This method exposes the secret - use carefully.
    pub fn expose_secret(&self) -> &str {
        self.api_secret.expose_secret()
    }

    /// Read credentials from `COINBASE_API_KEY` and `COINBASE_API_SECRET`.
    pub fn from_env() -> Result<Self, CoinbaseError> {
        Self::from_env_vars(DEFAULT_KEY_VAR, DEFAULT_SECRET_VAR)
    }

    /// Read credentials from custom environment variable names.
    pub fn from_env_vars(key_var: &str, secret_var: &str) -> Result<Self, CoinbaseError> {
        Self::try_from_env_vars(key_var, secret_var).ok_or(CoinbaseError::MissingCredentials)
    }

    /// Try to read credentials from the default environment variables.
    ///
    /// Returns `None` if either variable is unset.
    pub fn try_from_env() -> Option<Self> {
        Self::try_from_env_vars(DEFAULT_KEY_VAR, DEFAULT_SECRET_VAR)
    }

    /// Try to read credentials from custom environment variable names.
    pub fn try_from_env_vars(key_var: &str, secret_var: &str) -> Option<Self> {
        let api_key = std::env::var(key_var).ok()?;
        let api_secret = std::env::var(secret_var).ok()?;
        Some(Self::new(api_key, api_secret))
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("api_key", &self.api_key)
            .field("api_secret", &"[REDACTED]")
            .finish()
    }
}

/// OAuth tokens issued to a client by the token endpoint.
#[derive(Clone)]
pub struct OAuthTokens {
    access_token: SecretString,
    refresh_token: SecretString,
    expires_at: OffsetDateTime,
}

impl OAuthTokens {
    /// Create tokens with an absolute expiry time.
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_at: OffsetDateTime,
    ) -> Self {
        Self {
            access_token: SecretString::from(access_token.into()),
            refresh_token: SecretString::from(refresh_token.into()),
            expires_at,
        }
    }

    /// Create tokens that expire `expires_in` seconds from now.
    ///
    /// Fails with [`CoinbaseError::InvalidResponse`] if the expiry falls
    /// outside the representable date range.
    pub fn expiring_in(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
        expires_in: i64,
    ) -> Result<Self, CoinbaseError> {
        let expires_at = OffsetDateTime::now_utc()
            .checked_add(Duration::seconds(expires_in))
            .ok_or_else(|| {
                CoinbaseError::InvalidResponse(format!("expires_in out of range: {expires_in}"))
            })?;
        Ok(Self::new(access_token, refresh_token, expires_at))
    }

    /// The bearer token sent with each request.
    pub fn access_token(&self) -> &str {
        self.access_token.expose_secret()
    }

    /// The token used to obtain a fresh access token.
    pub fn refresh_token(&self) -> &str {
        self.refresh_token.expose_secret()
    }

    /// When the access token stops being accepted.
    pub fn expires_at(&self) -> OffsetDateTime {
        self.expires_at
    }

    /// Whether the access token is expired at `now`.
    ///
    /// Compared at whole-second resolution: a token is still valid during
    /// its expiry second.
    pub fn is_expired_at(&self, now: OffsetDateTime) -> bool {
        now.unix_timestamp() > self.expires_at.unix_timestamp()
    }

    /// Whether the access token is expired right now.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(OffsetDateTime::now_utc())
    }
}

impl std::fmt::Debug for OAuthTokens {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OAuthTokens")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn test_credentials_debug_redacted() {
        let creds = Credentials::new("my_key", "super_secret");
        let debug_str = format!("{:?}", creds);
        assert!(debug_str.contains("my_key"));
        assert!(!debug_str.contains("super_secret"));
        assert!(debug_str.contains("[REDACTED]"));
    }

    #[test]
    fn test_credentials_from_missing_env_vars() {
        let result = Credentials::from_env_vars(
            "COINBASE_TEST_UNSET_KEY_VAR",
            "COINBASE_TEST_UNSET_SECRET_VAR",
        );
        assert!(matches!(result, Err(CoinbaseError::MissingCredentials)));
    }

    #[test]
    fn test_tokens_debug_redacted() {
        let tokens = OAuthTokens::expiring_in("access-abc", "refresh-xyz", 7200).unwrap();
        let debug_str = format!("{:?}", tokens);
        assert!(!debug_str.contains("access-abc"));
        assert!(!debug_str.contains("refresh-xyz"));
    }

    #[test]
    fn test_tokens_expiry_boundary() {
        let tokens = OAuthTokens::new("a", "r", datetime!(2024-01-01 00:00:00 UTC));
        assert!(!tokens.is_expired_at(datetime!(2023-12-31 23:59:59 UTC)));
        assert!(!tokens.is_expired_at(datetime!(2024-01-01 00:00:00 UTC)));
        assert!(tokens.is_expired_at(datetime!(2024-01-01 00:00:01 UTC)));
    }

    #[test]
    fn test_tokens_expiry_out_of_range() {
        for expires_in in [i64::MAX, i64::MIN] {
            let result = OAuthTokens::expiring_in("a", "r", expires_in);
            assert!(matches!(result, Err(CoinbaseError::InvalidResponse(_))));
        }
    }

    #[test]
    fn test_tokens_expiring_in_past() {
        let tokens = OAuthTokens::expiring_in("a", "r", -60).unwrap();
        assert!(tokens.is_expired());
    }

    #[test]
    fn test_tokens_expiring_in_future() {
        let tokens = OAuthTokens::expiring_in("a", "r", 3600).unwrap();
        assert!(!tokens.is_expired());
        assert_eq!(tokens.access_token(), "a");
        assert_eq!(tokens.refresh_token(), "r");
    }
}
