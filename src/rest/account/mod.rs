//! Account balance and receive address endpoints.

mod types;

pub use types::*;

use std::borrow::Cow;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::account;
use crate::rest::envelope::{Enveloped, require};
use crate::types::Amount;

impl CoinbaseClient {
    /// Get the account balance.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::CoinbaseClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseClient::from_env()?;
    ///     let balance = client.get_balance().await?;
    ///     println!("{} {}", balance.amount, balance.currency);
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_balance(&self) -> Result<Amount, CoinbaseError> {
        self.get(account::BALANCE, &()).await
    }

    /// Get the user's current bitcoin receive address.
    pub async fn get_receive_address(&self) -> Result<String, CoinbaseError> {
        let holder: ReceiveAddressHolder = self.get(account::RECEIVE_ADDRESS, &()).await?;
        require(holder.into_checked("get_receive_address")?.address, "address")
    }

    /// Generate a new receive address.
    pub async fn generate_receive_address(
        &self,
        params: &AddressParams,
    ) -> Result<String, CoinbaseError> {
        let request = ReceiveAddressRequest {
            address: Cow::Borrowed(params),
        };
        let holder: ReceiveAddressHolder = self
            .post(account::GENERATE_RECEIVE_ADDRESS, &request)
            .await?;
        require(holder.into_checked("generate_receive_address")?.address, "address")
    }

    /// List receive addresses, one page at a time.
    pub async fn get_all_addresses(
        &self,
        params: &AddressesParams,
    ) -> Result<Addresses, CoinbaseError> {
        let holder: AddressesHolder = self.get(account::ADDRESSES, params).await?;
        Ok(holder.into())
    }
}
