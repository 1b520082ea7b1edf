//! Types for account and address endpoints.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::rest::envelope::{Envelope, Enveloped};
use crate::types::PaginationStats;
use crate::types::serde_helpers::{empty_string_as_none, null_as_default};

// ============================================================================
// Requests
// ============================================================================

/// Options for a newly generated receive address.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressParams {
    /// Label shown next to the address.
    pub label: Option<String>,
    /// URL notified when the address receives funds.
    pub callback_url: Option<String>,
}

impl AddressParams {
    /// Params with a label.
    pub fn with_label(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Default::default()
        }
    }

    /// Set the callback URL.
    pub fn callback_url(mut self, url: impl Into<String>) -> Self {
        self.callback_url = Some(url.into());
        self
    }
}

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct ReceiveAddressRequest<'a> {
    pub address: Cow<'a, AddressParams>,
}

/// Filter for [`crate::CoinbaseClient::get_all_addresses`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressesParams {
    /// Page number.
    pub page: Option<u32>,
    /// Results per page.
    pub limit: Option<u32>,
    /// Restrict to one account.
    pub account_id: Option<String>,
    /// Match against address or label.
    pub query: Option<String>,
}

// ============================================================================
// Responses
// ============================================================================

/// A bitcoin receive address.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Address {
    /// The address itself.
    pub address: String,
    /// Callback URL, if one was set.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub callback_url: Option<String>,
    /// Label, if one was set.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub label: Option<String>,
    /// Creation time.
    #[serde(default)]
    pub created_at: Option<String>,
}

/// One page of receive addresses.
#[derive(Debug, Clone)]
pub struct Addresses {
    /// Page information.
    pub pagination: PaginationStats,
    /// Addresses on this page.
    pub addresses: Vec<Address>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ReceiveAddressHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub address: Option<String>,
}

impl Enveloped for ReceiveAddressHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
struct AddressWrapper {
    address: Address,
}

#[derive(Debug, Deserialize)]
pub(crate) struct AddressesHolder {
    #[serde(flatten)]
    pagination: PaginationStats,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    addresses: Vec<AddressWrapper>,
}

impl From<AddressesHolder> for Addresses {
    fn from(holder: AddressesHolder) -> Self {
        Self {
            pagination: holder.pagination,
            addresses: holder.addresses.into_iter().map(|w| w.address).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_params_skip_unset() {
        let params = AddressParams::with_label("Savings");
        let request = ReceiveAddressRequest {
            address: Cow::Borrowed(&params),
        };
        let json = serde_json::to_string(&request).unwrap();
        assert_eq!(json, r#"{"address":{"label":"Savings"}}"#);
    }

    #[test]
    fn test_nested_params_decode_to_equal_value() {
        let params = AddressParams::with_label("Savings").callback_url("https://example.com/cb");
        let request = ReceiveAddressRequest {
            address: Cow::Borrowed(&params),
        };
        let json = serde_json::to_string(&request).unwrap();
        let decoded: ReceiveAddressRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, request);
    }

    #[test]
    fn test_integer_params_decode_to_equal_value() {
        let params = AddressesParams {
            page: Some(2),
            limit: Some(25),
            query: Some("shop".to_string()),
            ..Default::default()
        };
        let json = serde_json::to_string(&params).unwrap();
        assert_eq!(json, r#"{"page":2,"limit":25,"query":"shop"}"#);
        assert_eq!(serde_json::from_str::<AddressesParams>(&json).unwrap(), params);
    }

    #[test]
    fn test_empty_address_params() {
        let json = serde_json::to_string(&AddressesParams::default()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn test_addresses_flattened() {
        let json = r#"{
            "addresses": [
                {"address": {"address": "a1", "callback_url": "", "label": "", "created_at": "2013-05-09T23:07:08-07:00"}},
                {"address": {"address": "a2", "callback_url": null, "label": "Shop"}}
            ],
            "total_count": 2,
            "num_pages": 1,
            "current_page": 1
        }"#;

        let addresses: Addresses = serde_json::from_str::<AddressesHolder>(json).unwrap().into();
        assert_eq!(addresses.pagination.total_count, 2);
        assert_eq!(addresses.addresses.len(), 2);
        assert!(addresses.addresses[0].label.is_none());
        assert_eq!(addresses.addresses[1].label.as_deref(), Some("Shop"));
        assert!(addresses.addresses[1].created_at.is_none());
    }
}
