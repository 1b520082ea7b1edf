//! # Coinbase Client
//!
//! An async Rust client library for the Coinbase v1 wallet and merchant REST API.
//!
//! ## Features
//!
//! - API key/secret signing (HMAC-SHA256 with strictly increasing nonces)
//! - OAuth bearer tokens and the authorization-code flow
//! - Strong typing for all request/response types
//! - Financial precision with `rust_decimal`
//! - Fixture replay for offline tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use coinbase_api_client::CoinbaseClient;
//! use coinbase_api_client::auth::Credentials;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = CoinbaseClient::builder()
//!         .credentials(Credentials::new("api_key", "api_secret"))
//!         .build()?;
//!     let balance = client.get_balance().await?;
//!     println!("Balance: {} {}", balance.amount, balance.currency);
//!     Ok(())
//! }
//! ```

pub mod auth;
pub mod error;
pub mod oauth;
pub mod rest;
pub mod types;

// Re-export commonly used types at crate root
pub use error::{ApiError, CoinbaseError};
pub use rest::{CoinbaseClient, CoinbaseClientBuilder, Environment};
pub use types::common::{Amount, Currency, PaginationStats};

/// Result type alias using CoinbaseError
pub type Result<T> = std::result::Result<T, CoinbaseError>;
