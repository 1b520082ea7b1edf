//! Types for merchant button and order endpoints.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::rest::envelope::{Envelope, Enveloped};
use crate::types::serde_helpers::{default_on_error, empty_string_as_none, null_as_default};
use crate::types::{Money, PaginationStats};

/// Script that renders payment buttons.
pub const BUTTON_SCRIPT_URL: &str = "https://coinbase.com/assets/button.js";

/// What a button charges for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ButtonKind {
    /// One-off purchase.
    BuyNow,
    /// Donation.
    Donation,
    /// Recurring payment.
    Subscription,
    /// A kind this client does not know.
    #[serde(other)]
    Unknown,
}

// ============================================================================
// Requests
// ============================================================================

/// Definition of a payment button, also used to create one-off orders.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonParams {
    /// Item name.
    pub name: String,
    /// Price as a decimal string.
    pub price_string: String,
    /// Currency of `price_string`.
    pub price_currency_iso: String,
    /// Button kind.
    #[serde(rename = "type")]
    pub kind: Option<ButtonKind>,
    /// Whether the button creates a subscription.
    pub subscription: Option<bool>,
    /// Subscription period.
    pub repeat: Option<String>,
    /// Visual style.
    pub style: Option<String>,
    /// Button text.
    pub text: Option<String>,
    /// Item description.
    pub description: Option<String>,
    /// Opaque value echoed back in callbacks.
    pub custom: Option<String>,
    /// Hide `custom` from the payer.
    pub custom_secure: Option<bool>,
    /// Payment notification URL.
    pub callback_url: Option<String>,
    /// Redirect after payment.
    pub success_url: Option<String>,
    /// Redirect after cancel.
    pub cancel_url: Option<String>,
    /// Link shown for more information.
    pub info_url: Option<String>,
    /// Redirect automatically when done.
    pub auto_redirect: Option<bool>,
    /// Redirect automatically on success.
    pub auto_redirect_success: Option<bool>,
    /// Redirect automatically on cancel.
    pub auto_redirect_cancel: Option<bool>,
    /// Let the payer pick the price.
    pub variable_price: Option<bool>,
    /// Offer the preset prices below.
    pub choose_price: Option<bool>,
    /// Ask for a shipping address.
    pub include_address: Option<bool>,
    /// Ask for an email address.
    pub include_email: Option<bool>,
    /// Preset price.
    pub price1: Option<String>,
    /// Preset price.
    pub price2: Option<String>,
    /// Preset price.
    pub price3: Option<String>,
    /// Preset price.
    pub price4: Option<String>,
    /// Preset price.
    pub price5: Option<String>,
}

impl ButtonParams {
    /// A button selling `name` for `price_string` in `price_currency_iso`.
    pub fn new(
        name: impl Into<String>,
        price_string: impl Into<String>,
        price_currency_iso: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            price_string: price_string.into(),
            price_currency_iso: price_currency_iso.into(),
            ..Default::default()
        }
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ButtonRequest<'a> {
    pub button: Cow<'a, ButtonParams>,
}

// ============================================================================
// Responses
// ============================================================================

/// A payment button.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Button {
    /// Code identifying the button.
    pub code: String,
    /// Button kind.
    #[serde(rename = "type", default)]
    pub kind: Option<ButtonKind>,
    /// Item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Visual style.
    #[serde(default)]
    pub style: Option<String>,
    /// Button text.
    #[serde(default)]
    pub text: Option<String>,
    /// Item description.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
    /// Opaque value echoed back in callbacks.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub custom: Option<String>,
    /// Payment notification URL.
    #[serde(default)]
    pub callback_url: Option<String>,
    /// Price.
    #[serde(default)]
    pub price: Option<Money>,
    /// Whether the button creates a subscription.
    #[serde(default)]
    pub subscription: bool,
}

impl Button {
    /// HTML snippet that renders this button on a web page.
    pub fn embed_html(&self) -> String {
        format!(
            r#"<div class="coinbase-button" data-code="{}"></div><script src="{}" type="text/javascript"></script>"#,
            self.code, BUTTON_SCRIPT_URL
        )
    }
}

/// State of a merchant order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Awaiting payment.
    New,
    /// Paid.
    Completed,
    /// Cancelled by the payer.
    Canceled,
    /// Payment window elapsed.
    Expired,
    /// Paid the wrong amount.
    Mispaid,
    /// A status this client does not know.
    #[serde(other)]
    Unknown,
}

/// The button an order was placed through.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderButton {
    /// Button ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Button kind.
    #[serde(rename = "type", default)]
    pub kind: Option<ButtonKind>,
    /// Item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Item description.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub description: Option<String>,
}

/// The payment that settled an order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct OrderTransaction {
    /// Transaction ID.
    #[serde(default)]
    pub id: Option<String>,
    /// Network transaction hash.
    #[serde(default)]
    pub hash: Option<String>,
    /// Network confirmations.
    #[serde(default)]
    pub confirmations: u32,
}

/// A merchant order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Order {
    /// Order ID.
    pub id: String,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Current state.
    #[serde(default)]
    pub status: Option<OrderStatus>,
    /// Price in satoshis.
    #[serde(default)]
    pub total_btc: Option<Money>,
    /// Price in the merchant's currency.
    #[serde(default)]
    pub total_native: Option<Money>,
    /// Opaque value from the button.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub custom: Option<String>,
    /// Address the payer sends to.
    #[serde(default)]
    pub receive_address: Option<String>,
    /// Originating button.
    #[serde(default)]
    pub button: Option<OrderButton>,
    /// Settling payment, once there is one.
    #[serde(default)]
    pub transaction: Option<OrderTransaction>,
}

/// One page of merchant orders.
#[derive(Debug, Clone)]
pub struct Orders {
    /// Page information.
    pub pagination: PaginationStats,
    /// Orders on this page.
    pub orders: Vec<Order>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ButtonHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub button: Option<Button>,
}

impl Enveloped for ButtonHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrderHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub order: Option<Order>,
}

impl Enveloped for OrderHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
struct OrderWrapper {
    order: Order,
}

#[derive(Debug, Deserialize)]
pub(crate) struct OrdersHolder {
    #[serde(flatten)]
    pagination: PaginationStats,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    orders: Vec<OrderWrapper>,
}

impl From<OrdersHolder> for Orders {
    fn from(holder: OrdersHolder) -> Self {
        Self {
            pagination: holder.pagination,
            orders: holder.orders.into_iter().map(|w| w.order).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_params_body() {
        let params = ButtonParams {
            kind: Some(ButtonKind::BuyNow),
            ..ButtonParams::new("test", "1.23", "USD")
        };
        let request = ButtonRequest {
            button: Cow::Borrowed(&params),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(
            json,
            r#"{"button":{"name":"test","price_string":"1.23","price_currency_iso":"USD","type":"buy_now"}}"#
        );
    }

    #[test]
    fn test_button_request_decodes_to_equal_value() {
        let params = ButtonParams {
            kind: Some(ButtonKind::Subscription),
            subscription: Some(true),
            repeat: Some("monthly".to_string()),
            include_email: Some(false),
            price1: Some("5".to_string()),
            ..ButtonParams::new("Membership", "5.00", "USD")
        };
        let request = ButtonRequest {
            button: Cow::Borrowed(&params),
        };

        let value = serde_json::to_value(&request).unwrap();
        let decoded: ButtonRequest = serde_json::from_value(value).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_embed_html() {
        let button: Button = serde_json::from_str(r#"{"code":"93865b9cae83706ae59220c013bc0afd"}"#).unwrap();
        assert_eq!(
            button.embed_html(),
            "<div class=\"coinbase-button\" data-code=\"93865b9cae83706ae59220c013bc0afd\"></div>\
             <script src=\"https://coinbase.com/assets/button.js\" type=\"text/javascript\"></script>"
        );
    }

    #[test]
    fn test_order_status_values() {
        let statuses: Vec<OrderStatus> =
            serde_json::from_str(r#"["new","completed","mispaid","refunded"]"#).unwrap();
        assert_eq!(
            statuses,
            vec![
                OrderStatus::New,
                OrderStatus::Completed,
                OrderStatus::Mispaid,
                OrderStatus::Unknown
            ]
        );
    }
}
