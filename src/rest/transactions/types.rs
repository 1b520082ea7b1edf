//! Types for wallet transaction endpoints.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::rest::envelope::{Envelope, Enveloped};
use crate::rest::transfers::Transfer;
use crate::rest::users::User;
use crate::types::serde_helpers::{default_on_error, empty_string_as_none, null_as_default};
use crate::types::{Amount, PaginationStats};

// ============================================================================
// Requests
// ============================================================================

/// Parameters for sending or requesting money.
///
/// Set either `amount` (in BTC) or `amount_string` together with
/// `amount_currency_iso`.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionParams {
    /// Recipient email or bitcoin address.
    pub to: Option<String>,
    /// Email to request money from.
    pub from: Option<String>,
    /// Amount in BTC.
    pub amount: Option<Decimal>,
    /// Amount in `amount_currency_iso`.
    pub amount_string: Option<String>,
    /// Currency of `amount_string`.
    pub amount_currency_iso: Option<String>,
    /// Note attached to the transaction.
    pub notes: Option<String>,
    /// Miner fee paid by the sender.
    pub user_fee: Option<Decimal>,
    /// Referrer of the recipient.
    pub referrer_id: Option<String>,
    /// Idempotency token.
    pub idem: Option<String>,
    /// Buy the missing balance first.
    pub instant_buy: Option<bool>,
    /// Merchant order being paid.
    pub order_id: Option<String>,
}

impl TransactionParams {
    /// Send `amount` BTC to an email or address.
    pub fn send(to: impl Into<String>, amount: Decimal) -> Self {
        Self {
            to: Some(to.into()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Request `amount` BTC from an email.
    pub fn request(from: impl Into<String>, amount: Decimal) -> Self {
        Self {
            from: Some(from.into()),
            amount: Some(amount),
            ..Default::default()
        }
    }

    /// Attach a note.
    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct TransactionRequest<'a> {
    pub transaction: Cow<'a, TransactionParams>,
}

// ============================================================================
// Responses
// ============================================================================

/// State of a wallet transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionStatus {
    /// Not yet confirmed or not yet accepted.
    Pending,
    /// Confirmed.
    Complete,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// Sender or recipient of a transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TransactionActor {
    /// User ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
}

/// A wallet transaction.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transaction {
    /// Transaction ID.
    pub id: String,
    /// Creation time.
    #[serde(default, alias = "create_at")]
    pub created_at: Option<String>,
    /// Network transaction hash.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub hsh: Option<String>,
    /// Note attached by the sender.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub notes: Option<String>,
    /// Idempotency token.
    #[serde(default)]
    pub idem: Option<String>,
    /// Signed amount; negative for outgoing transactions.
    #[serde(default)]
    pub amount: Option<Amount>,
    /// Whether this is a money request.
    #[serde(default)]
    pub request: bool,
    /// Current state.
    #[serde(default)]
    pub status: Option<TransactionStatus>,
    /// Sender.
    #[serde(default)]
    pub sender: Option<TransactionActor>,
    /// Recipient.
    #[serde(default)]
    pub recipient: Option<TransactionActor>,
    /// Destination bitcoin address.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub recipient_address: Option<String>,
    /// Transaction type.
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    /// Whether a multisig transaction is fully signed.
    #[serde(default)]
    pub signed: bool,
    /// Multisig signatures required.
    #[serde(default)]
    pub signatures_required: Option<u32>,
    /// Multisig signatures present.
    #[serde(default)]
    pub signatures_present: Option<u32>,
    /// Multisig signatures still needed.
    #[serde(default)]
    pub signatures_needed: Option<u32>,
    /// Network transaction hash.
    #[serde(default)]
    pub hash: Option<String>,
    /// Network confirmations.
    #[serde(default)]
    pub confirmations: Option<u32>,
}

/// Result of sending money or completing a request.
#[derive(Debug, Clone)]
pub struct TransactionConfirmation {
    /// The created transaction.
    pub transaction: Transaction,
    /// Bank transfer started by an instant buy, if any.
    pub transfer: Option<Transfer>,
}

/// One page of transactions plus the account state.
#[derive(Debug, Clone)]
pub struct Transactions {
    /// Page information.
    pub pagination: PaginationStats,
    /// The user the transactions belong to.
    pub current_user: Option<User>,
    /// BTC balance.
    pub balance: Option<Amount>,
    /// Balance in the user's native currency.
    pub native_balance: Option<Amount>,
    /// Transactions on this page.
    pub transactions: Vec<Transaction>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransactionHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub transaction: Option<Transaction>,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub transfer: Option<Transfer>,
}

impl Enveloped for TransactionHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
struct TransactionWrapper {
    transaction: Transaction,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransactionsHolder {
    #[serde(flatten)]
    pagination: PaginationStats,
    #[serde(default)]
    current_user: Option<User>,
    #[serde(default)]
    balance: Option<Amount>,
    #[serde(default)]
    native_balance: Option<Amount>,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    transactions: Vec<TransactionWrapper>,
}

impl From<TransactionsHolder> for Transactions {
    fn from(holder: TransactionsHolder) -> Self {
        Self {
            pagination: holder.pagination,
            current_user: holder.current_user,
            balance: holder.balance,
            native_balance: holder.native_balance,
            transactions: holder
                .transactions
                .into_iter()
                .map(|w| w.transaction)
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_send_params_wrapped() {
        let params = TransactionParams::send("user@example.com", Decimal::from_str("1.234").unwrap())
            .notes("Sample transaction");
        let json = serde_json::to_string(&TransactionRequest {
            transaction: Cow::Borrowed(&params),
        })
        .unwrap();
        assert_eq!(
            json,
            r#"{"transaction":{"to":"user@example.com","amount":"1.234","notes":"Sample transaction"}}"#
        );
    }

    #[test]
    fn test_params_round_trip_through_json() {
        let params = TransactionParams {
            amount_string: Some("5.00".to_string()),
            amount_currency_iso: Some("USD".to_string()),
            instant_buy: Some(true),
            ..TransactionParams::request("payer@example.com", Decimal::ZERO)
        };
        let request = TransactionRequest {
            transaction: Cow::Borrowed(&params),
        };

        let json = serde_json::to_string(&request).unwrap();
        let decoded: TransactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
        assert_eq!(decoded.transaction.into_owned(), params);
    }

    #[test]
    fn test_transaction_status_unknown() {
        let transaction: Transaction =
            serde_json::from_str(r#"{"id":"t1","status":"exploded","create_at":"x"}"#).unwrap();
        assert_eq!(transaction.status, Some(TransactionStatus::Unknown));
        assert_eq!(transaction.created_at.as_deref(), Some("x"));
        assert!(!transaction.request);
    }
}
