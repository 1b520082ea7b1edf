//! Common value types shared by several endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An amount of a currency, e.g. `{"amount": "36.62800000", "currency": "BTC"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Amount {
    /// Decimal amount, scale preserved from the wire.
    pub amount: Decimal,
    /// Currency code.
    pub currency: String,
}

/// An amount in minor units, e.g. `{"cents": 123, "currency_iso": "USD"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Money {
    /// Amount in the currency's smallest unit (cents or satoshis).
    pub cents: i64,
    /// ISO currency code.
    pub currency_iso: String,
}

/// Fee breakdown of a buy or sell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Fees {
    /// Coinbase's fee.
    pub coinbase: Money,
    /// The bank's fee.
    pub bank: Money,
}

/// Page information returned with every list endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationStats {
    /// Total number of records.
    #[serde(default)]
    pub total_count: u32,
    /// Number of pages.
    #[serde(default)]
    pub num_pages: u32,
    /// Page returned.
    #[serde(default)]
    pub current_page: u32,
}

/// Page selector for list endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageParams {
    /// 1-based page number.
    pub page: u32,
}

/// A currency supported by Coinbase.
///
/// The API sends each entry as a `["Name (ISO)", "ISO"]` pair.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "(String, String)")]
pub struct Currency {
    /// Display name.
    pub name: String,
    /// ISO code.
    pub iso: String,
}

impl From<(String, String)> for Currency {
    fn from((name, iso): (String, String)) -> Self {
        Self { name, iso }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_from_pair() {
        let currencies: Vec<Currency> =
            serde_json::from_str(r#"[["Afghan Afghani (AFN)","AFN"],["Bitcoin (BTC)","BTC"]]"#)
                .unwrap();
        assert_eq!(currencies.len(), 2);
        assert_eq!(currencies[1].name, "Bitcoin (BTC)");
        assert_eq!(currencies[1].iso, "BTC");
    }

    #[test]
    fn test_amount_keeps_scale() {
        let amount: Amount =
            serde_json::from_str(r#"{"amount":"-1.23400000","currency":"BTC"}"#).unwrap();
        assert_eq!(amount.amount.to_string(), "-1.23400000");
        assert_eq!(amount.currency, "BTC");
    }

    #[test]
    fn test_pagination_defaults() {
        let stats: PaginationStats = serde_json::from_str(r#"{"num_pages":3}"#).unwrap();
        assert_eq!(stats.num_pages, 3);
        assert_eq!(stats.total_count, 0);
    }
}
