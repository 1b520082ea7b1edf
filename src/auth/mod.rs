//! Authentication module for Coinbase API.
//!
//! This module provides:
//! - Credential management with secure secret storage
//! - Nonce generation for replay attack prevention
//! - HMAC-SHA256 signature generation for key/secret requests
//! - The [`Signer`] strategies (key/secret, client bearer, service bearer)

mod credentials;
mod nonce;
mod signature;
mod signer;

pub use credentials::{Credentials, OAuthTokens};
pub use nonce::{IncreasingNonce, NonceProvider};
pub use signature::sign_request;
pub use signer::{
    ACCESS_KEY, ACCESS_NONCE, ACCESS_SIGNATURE, ClientBearerSigner, KeySecretSigner,
    ServiceBearerSigner, Signer,
};
