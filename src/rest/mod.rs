//! Coinbase REST API client.
//!
//! [`CoinbaseClient`] signs each call with its [`crate::auth::Signer`], sends
//! it through the [`Transport`], and unwraps the response. Endpoint methods
//! live in one module per API area.
//!
//! ```rust,no_run
//! use coinbase_api_client::rest::{CoinbaseClient, Environment};
//! use coinbase_api_client::auth::Credentials;
//!
//! # async fn run() -> Result<(), coinbase_api_client::CoinbaseError> {
//! let client = CoinbaseClient::builder()
//!     .environment(Environment::Sandbox)
//!     .credentials(Credentials::new("api_key", "api_secret"))
//!     .build()?;
//! let rate = client.get_exchange_rate("btc", "usd").await?;
//! # Ok(())
//! # }
//! ```

pub mod account;
mod client;
pub mod endpoints;
mod envelope;
pub mod market;
pub mod merchant;
pub mod transactions;
pub(crate) mod transport;
pub mod transfers;
pub mod users;

pub use client::{CoinbaseClient, CoinbaseClientBuilder};
pub use endpoints::Environment;
pub use envelope::{Envelope, Enveloped};
pub use transport::{
    DEFAULT_CONNECT_TIMEOUT, Transport, TransportConfig, default_user_agent, fixture_path,
};
