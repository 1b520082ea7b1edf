//! HMAC-SHA256 signature generation for key/secret authentication.
//!
//! Signed requests carry a signature computed as:
//! ```text
//! hex(HMAC-SHA256(api_secret, nonce + full_url + body))
//! ```
//!
//! The signature is sent in the `ACCESS_SIGNATURE` header alongside
//! `ACCESS_KEY` and `ACCESS_NONCE`.

use hmac::{Hmac, Mac};
use sha2::Sha256;

use crate::auth::Credentials;
use crate::error::CoinbaseError;

type HmacSha256 = Hmac<Sha256>;

/// Sign a request for Coinbase's key/secret authentication.
///
/// # Arguments
///
/// * `credentials` - API credentials containing the secret
/// * `nonce` - The nonce value for this request
/// * `url` - The full request URL (e.g., "https://api.coinbase.com/v1/account/balance")
/// * `body` - The JSON request body
///
/// # Returns
///
/// Lowercase hex-encoded HMAC-SHA256 signature.
///
/// # Example
///
/// ```rust
/// use coinbase_api_client::auth::{Credentials, sign_request};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let credentials = Credentials::new("api_key", "api_secret");
/// let signature = sign_request(
///     &credentials,
///     1700000000000000000,
///     "https://api.coinbase.com/v1/account/balance",
///     "{}",
/// )?;
/// assert_eq!(signature.len(), 64);
/// # Ok(())
/// # }
/// ```
pub fn sign_request(
    credentials: &Credentials,
    nonce: u64,
    url: &str,
    body: &str,
) -> Result<String, CoinbaseError> {
    let mut hmac = HmacSha256::new_from_slice(credentials.expose_secret().as_bytes())
        .map_err(|e| CoinbaseError::Auth(format!("Invalid HMAC key: {e}")))?;
    hmac.update(nonce.to_string().as_bytes());
    hmac.update(url.as_bytes());
    hmac.update(body.as_bytes());

    Ok(hex::encode(hmac.finalize().into_bytes()))
}
