//! Prices, currencies, and exchange rates.

mod types;

pub use types::*;

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::market;
use crate::types::{Amount, Currency};

impl CoinbaseClient {
    /// Quote the price of buying `qty` bitcoin, fees included.
    pub async fn get_buy_price(&self, qty: Decimal) -> Result<Prices, CoinbaseError> {
        self.get(market::BUY_PRICE, &PriceRequest { qty }).await
    }

    /// Quote the price of selling `qty` bitcoin, fees included.
    pub async fn get_sell_price(&self, qty: Decimal) -> Result<Prices, CoinbaseError> {
        self.get(market::SELL_PRICE, &PriceRequest { qty }).await
    }

    /// Get the spot price of one bitcoin in `currency`.
    pub async fn get_spot_price(&self, currency: &str) -> Result<Amount, CoinbaseError> {
        self.get(market::SPOT_RATE, &SpotRateRequest { currency })
            .await
    }

    /// List the currencies Coinbase supports.
    pub async fn get_currencies(&self) -> Result<Vec<Currency>, CoinbaseError> {
        self.get(market::CURRENCIES, &()).await
    }

    /// Get every exchange rate, keyed like `btc_to_usd`.
    pub async fn get_exchange_rates(&self) -> Result<HashMap<String, Decimal>, CoinbaseError> {
        self.get(market::EXCHANGE_RATES, &()).await
    }

    /// Get the rate converting one unit of `from` into `to`.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::CoinbaseClient;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseClient::from_env()?;
    ///     let rate = client.get_exchange_rate("btc", "usd").await?;
    ///     println!("1 BTC = {rate} USD");
    ///     Ok(())
    /// }
    /// ```
    pub async fn get_exchange_rate(&self, from: &str, to: &str) -> Result<Decimal, CoinbaseError> {
        let key = exchange_rate_key(from, to);
        let mut rates = self.get_exchange_rates().await?;
        rates
            .remove(&key)
            .ok_or_else(|| CoinbaseError::InvalidResponse(format!("No exchange rate for {key}")))
    }
}
