//! Types for price and currency endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::Amount;

#[derive(Debug, Serialize)]
pub(crate) struct PriceRequest {
    pub qty: Decimal,
}

#[derive(Debug, Serialize)]
pub(crate) struct SpotRateRequest<'a> {
    pub currency: &'a str,
}

/// One fee line of a price quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PriceFee {
    /// Coinbase's fee.
    #[serde(default)]
    pub coinbase: Option<Amount>,
    /// The bank's fee.
    #[serde(default)]
    pub bank: Option<Amount>,
}

/// A buy or sell quote.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Prices {
    /// Price before fees.
    pub subtotal: Amount,
    /// Fee lines.
    #[serde(default)]
    pub fees: Vec<PriceFee>,
    /// Price after fees.
    pub total: Amount,
}

impl Prices {
    /// Sum of every fee line in the subtotal's currency.
    pub fn total_fees(&self) -> Decimal {
        self.fees
            .iter()
            .flat_map(|fee| [fee.coinbase.as_ref(), fee.bank.as_ref()])
            .flatten()
            .filter(|fee| fee.currency == self.subtotal.currency)
            .map(|fee| fee.amount)
            .sum()
    }
}

/// Key used in the exchange rate map, e.g. `btc_to_usd`.
pub fn exchange_rate_key(from: &str, to: &str) -> String {
    format!("{}_to_{}", from.to_lowercase(), to.to_lowercase())
}
