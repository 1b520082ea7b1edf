//! Send, request, and list wallet transactions.

mod types;

pub use types::*;

use std::borrow::Cow;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::transactions;
use crate::rest::envelope::{Envelope, Enveloped, require};
use crate::types::PageParams;

impl CoinbaseClient {
    /// Send bitcoin to an email address or bitcoin address.
    ///
    /// # Example
    ///
    /// ```rust,no_run
    /// use coinbase_api_client::CoinbaseClient;
    /// use coinbase_api_client::rest::transactions::TransactionParams;
    /// use rust_decimal::Decimal;
    ///
    /// #[tokio::main]
    /// async fn main() -> Result<(), Box<dyn std::error::Error>> {
    ///     let client = CoinbaseClient::from_env()?;
    ///     let params = TransactionParams::send("user@example.com", Decimal::new(1, 3));
    ///     let sent = client.send_money(&params).await?;
    ///     println!("Sent {}", sent.transaction.id);
    ///     Ok(())
    /// }
    /// ```
    pub async fn send_money(
        &self,
        params: &TransactionParams,
    ) -> Result<TransactionConfirmation, CoinbaseError> {
        let request = TransactionRequest {
            transaction: Cow::Borrowed(params),
        };
        let holder: TransactionHolder = self.post(transactions::SEND_MONEY, &request).await?;
        confirmation(holder.into_checked("send_money")?)
    }

    /// Request bitcoin from an email address.
    pub async fn request_money(
        &self,
        params: &TransactionParams,
    ) -> Result<Transaction, CoinbaseError> {
        let request = TransactionRequest {
            transaction: Cow::Borrowed(params),
        };
        let holder: TransactionHolder = self.post(transactions::REQUEST_MONEY, &request).await?;
        require(holder.into_checked("request_money")?.transaction, "transaction")
    }

    /// Resend the email for a pending money request.
    pub async fn resend_request(&self, id: &str) -> Result<(), CoinbaseError> {
        let envelope: Envelope = self.put(&transactions::resend_request(id), &()).await?;
        envelope.into_checked("resend_request")?;
        Ok(())
    }

    /// Cancel a pending money request.
    pub async fn cancel_request(&self, id: &str) -> Result<(), CoinbaseError> {
        let envelope: Envelope = self.delete(&transactions::cancel_request(id), &()).await?;
        envelope.into_checked("cancel_request")?;
        Ok(())
    }

    /// Pay a money request sent to this user.
    pub async fn complete_request(
        &self,
        id: &str,
    ) -> Result<TransactionConfirmation, CoinbaseError> {
        let holder: TransactionHolder = self
            .put(&transactions::complete_request(id), &())
            .await?;
        confirmation(holder.into_checked("complete_request")?)
    }

    /// List the user's transactions along with the current balance.
    pub async fn get_transactions(&self, page: u32) -> Result<Transactions, CoinbaseError> {
        let holder: TransactionsHolder = self
            .get(transactions::TRANSACTIONS, &PageParams { page })
            .await?;
        Ok(holder.into())
    }

    /// Get a single transaction.
    pub async fn get_transaction(&self, id: &str) -> Result<Transaction, CoinbaseError> {
        let holder: TransactionHolder = self.get(&transactions::transaction(id), &()).await?;
        require(holder.into_checked("get_transaction")?.transaction, "transaction")
    }
}

fn confirmation(holder: TransactionHolder) -> Result<TransactionConfirmation, CoinbaseError> {
    Ok(TransactionConfirmation {
        transaction: require(holder.transaction, "transaction")?,
        transfer: holder.transfer,
    })
}
