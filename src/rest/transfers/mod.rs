//! Buy, sell, and transfer history endpoints.

mod types;

pub use types::*;

use rust_decimal::Decimal;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::transfers;
use crate::rest::envelope::{Enveloped, require};
use crate::types::PageParams;

impl CoinbaseClient {
    /// Buy `qty` bitcoin with the linked bank account.
    ///
    /// With `agree_btc_amount_varies` the purchase goes through even if the
    /// price moves before it settles.
    pub async fn buy(
        &self,
        qty: Decimal,
        agree_btc_amount_varies: bool,
    ) -> Result<Transfer, CoinbaseError> {
        let request = TransferRequest {
            qty,
            agree_btc_amount_varies: Some(agree_btc_amount_varies),
        };
        let holder: TransferHolder = self.post(transfers::BUYS, &request).await?;
        require(holder.into_checked("buy")?.transfer, "transfer")
    }

    /// Sell `qty` bitcoin to the linked bank account.
    pub async fn sell(&self, qty: Decimal) -> Result<Transfer, CoinbaseError> {
        let request = TransferRequest {
            qty,
            agree_btc_amount_varies: None,
        };
        let holder: TransferHolder = self.post(transfers::SELLS, &request).await?;
        require(holder.into_checked("sell")?.transfer, "transfer")
    }

    /// List buys and sells.
    pub async fn get_transfers(&self, page: u32) -> Result<Transfers, CoinbaseError> {
        let holder: TransfersHolder = self
            .get(transfers::TRANSFERS, &PageParams { page })
            .await?;
        Ok(holder.into())
    }
}
