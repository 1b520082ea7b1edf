//! Merchant payment buttons and orders.

mod types;

pub use types::*;

use std::borrow::Cow;

use crate::error::CoinbaseError;
use crate::rest::CoinbaseClient;
use crate::rest::endpoints::merchant;
use crate::rest::envelope::{Enveloped, require};
use crate::types::PageParams;

impl CoinbaseClient {
    /// Create a payment button.
    ///
    /// Use [`Button::embed_html`] to place it on a page.
    pub async fn create_button(&self, params: &ButtonParams) -> Result<Button, CoinbaseError> {
        let request = ButtonRequest {
            button: Cow::Borrowed(params),
        };
        let holder: ButtonHolder = self.post(merchant::BUTTONS, &request).await?;
        require(holder.into_checked("create_button")?.button, "button")
    }

    /// Create an order for an existing button.
    pub async fn create_order_from_button_code(&self, code: &str) -> Result<Order, CoinbaseError> {
        let holder: OrderHolder = self
            .post(&merchant::create_order_from_button(code), &())
            .await?;
        require(
            holder.into_checked("create_order_from_button_code")?.order,
            "order",
        )
    }

    /// Create a one-off order without saving a button.
    pub async fn create_order(&self, params: &ButtonParams) -> Result<Order, CoinbaseError> {
        let request = ButtonRequest {
            button: Cow::Borrowed(params),
        };
        let holder: OrderHolder = self.post(merchant::ORDERS, &request).await?;
        require(holder.into_checked("create_order")?.order, "order")
    }

    /// List merchant orders.
    pub async fn get_orders(&self, page: u32) -> Result<Orders, CoinbaseError> {
        let holder: OrdersHolder = self.get(merchant::ORDERS, &PageParams { page }).await?;
        Ok(holder.into())
    }

    /// Get a single order by ID or custom value.
    pub async fn get_order(&self, id: &str) -> Result<Order, CoinbaseError> {
        let holder: OrderHolder = self.get(&merchant::order(id), &()).await?;
        require(holder.into_checked("get_order")?.order, "order")
    }
}
