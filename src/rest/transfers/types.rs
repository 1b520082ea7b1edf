//! Types for buy, sell, and transfer endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rest::envelope::{Envelope, Enveloped};
use crate::types::serde_helpers::{default_on_error, empty_string_as_none, null_as_default};
use crate::types::{Amount, Fees, PaginationStats};

#[derive(Debug, Serialize)]
pub(crate) struct TransferRequest {
    pub qty: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agree_btc_amount_varies: Option<bool>,
}

/// Direction of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TransferKind {
    /// Bitcoin bought with fiat.
    Buy,
    /// Bitcoin sold for fiat.
    Sell,
    /// A kind this client does not know.
    #[serde(other)]
    Unknown,
}

/// Settlement state of a transfer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum TransferStatus {
    /// Waiting for the bank.
    Pending,
    /// Settled.
    Complete,
    /// Cancelled before settlement.
    Canceled,
    /// Reversed by the bank.
    Reversed,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// A bank transfer behind a buy or sell.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Transfer {
    /// Transfer ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Buy or sell.
    #[serde(rename = "type", default)]
    pub kind: Option<TransferKind>,
    /// Short reference code.
    #[serde(default)]
    pub code: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Fee breakdown.
    #[serde(default)]
    pub fees: Option<Fees>,
    /// Settlement state.
    #[serde(default)]
    pub status: Option<TransferStatus>,
    /// Expected payout date.
    #[serde(default)]
    pub payout_date: Option<String>,
    /// Bitcoin amount moved.
    #[serde(default)]
    pub btc: Option<Amount>,
    /// Fiat amount before fees.
    #[serde(default)]
    pub subtotal: Option<Amount>,
    /// Fiat amount after fees.
    #[serde(default)]
    pub total: Option<Amount>,
    /// Free-form description.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    /// Related wallet transaction.
    #[serde(default)]
    pub transaction_id: Option<String>,
}

/// One page of transfers.
#[derive(Debug, Clone)]
pub struct Transfers {
    /// Page information.
    pub pagination: PaginationStats,
    /// Transfers on this page.
    pub transfers: Vec<Transfer>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransferHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub transfer: Option<Transfer>,
}

impl Enveloped for TransferHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
struct TransferWrapper {
    transfer: Transfer,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TransfersHolder {
    #[serde(flatten)]
    pagination: PaginationStats,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    transfers: Vec<TransferWrapper>,
}

impl From<TransfersHolder> for Transfers {
    fn from(holder: TransfersHolder) -> Self {
        Self {
            pagination: holder.pagination,
            transfers: holder.transfers.into_iter().map(|w| w.transfer).collect(),
        }
    }
}
