//! Types for user and contact endpoints.

use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;

use crate::rest::envelope::{Envelope, Enveloped};
use crate::types::serde_helpers::{default_on_error, empty_string_as_none, null_as_default};
use crate::types::{Amount, PaginationStats};

#[derive(Debug, Serialize)]
pub(crate) struct NewUser<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateUserRequest<'a> {
    pub user: NewUser<'a>,
}

/// Filter for [`crate::CoinbaseClient::get_contacts`].
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactsParams {
    /// Page number.
    pub page: Option<u32>,
    /// Results per page.
    pub limit: Option<u32>,
    /// Match against email.
    pub query: Option<String>,
}

/// Merchant logo in several sizes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MerchantLogo {
    /// Small logo URL.
    #[serde(default)]
    pub small: Option<String>,
    /// Medium logo URL.
    #[serde(default)]
    pub medium: Option<String>,
    /// Original logo URL.
    #[serde(default)]
    pub url: Option<String>,
}

/// Merchant profile of a user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Merchant {
    /// Company name.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub company_name: Option<String>,
    /// Logo.
    #[serde(default)]
    pub logo: Option<MerchantLogo>,
}

/// A Coinbase user.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    /// User ID.
    pub id: String,
    /// Full name.
    #[serde(default)]
    pub name: Option<String>,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Default receive address.
    #[serde(default)]
    pub receive_address: Option<String>,
    /// Time zone name.
    #[serde(default, alias = "timezone")]
    pub time_zone: Option<String>,
    /// Native currency code.
    #[serde(default)]
    pub native_currency: Option<String>,
    /// BTC balance.
    #[serde(default)]
    pub balance: Option<Amount>,
    /// Merchant profile.
    #[serde(default)]
    pub merchant: Option<Merchant>,
    /// Buy verification level.
    #[serde(default)]
    pub buy_level: Option<u32>,
    /// Sell verification level.
    #[serde(default)]
    pub sell_level: Option<u32>,
    /// Daily buy limit.
    #[serde(default)]
    pub buy_limit: Option<Amount>,
    /// Daily sell limit.
    #[serde(default)]
    pub sell_limit: Option<Amount>,
}

/// A contact the user has sent money to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Contact {
    /// Contact email.
    pub email: String,
}

/// One page of contacts.
#[derive(Debug, Clone)]
pub struct Contacts {
    /// Page information.
    pub pagination: PaginationStats,
    /// Contacts on this page.
    pub contacts: Vec<Contact>,
    /// Emails of `contacts`, in the same order.
    pub emails: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserHolder {
    #[serde(flatten)]
    pub envelope: Envelope,
    #[serde(default, deserialize_with = "default_on_error::deserialize")]
    pub user: Option<User>,
}

impl Enveloped for UserHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

#[derive(Debug, Deserialize)]
struct UserWrapper {
    user: User,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersHolder {
    #[serde(flatten)]
    envelope: Envelope,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    users: Vec<UserWrapper>,
}

impl Enveloped for UsersHolder {
    fn envelope(&self) -> &Envelope {
        &self.envelope
    }
}

impl UsersHolder {
    pub(crate) fn into_first(self) -> Option<User> {
        self.users.into_iter().next().map(|w| w.user)
    }
}

#[derive(Debug, Deserialize)]
struct ContactWrapper {
    contact: Contact,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ContactsHolder {
    #[serde(flatten)]
    pagination: PaginationStats,
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    contacts: Vec<ContactWrapper>,
}

impl From<ContactsHolder> for Contacts {
    fn from(holder: ContactsHolder) -> Self {
        let contacts: Vec<Contact> = holder.contacts.into_iter().map(|w| w.contact).collect();
        let emails = contacts.iter().map(|c| c.email.clone()).collect();
        Self {
            pagination: holder.pagination,
            contacts,
            emails,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_user_body() {
        let request = CreateUserRequest {
            user: NewUser {
                email: "newuser@example.com",
                password: "test123!",
            },
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"user":{"email":"newuser@example.com","password":"test123!"}}"#
        );
    }

    #[test]
    fn test_contacts_collect_emails() {
        let json = r#"{
            "contacts": [
                {"contact": {"email": "user1@example.com"}},
                {"contact": {"email": "user2@example.com"}}
            ],
            "total_count": 2,
            "num_pages": 1,
            "current_page": 1
        }"#;

        let contacts: Contacts = serde_json::from_str::<ContactsHolder>(json).unwrap().into();
        assert_eq!(contacts.emails, vec!["user1@example.com", "user2@example.com"]);
        assert_eq!(contacts.contacts[1].email, "user2@example.com");
    }

    #[test]
    fn test_user_timezone_alias() {
        let user: User =
            serde_json::from_str(r#"{"id":"u1","timezone":"Pacific Time (US & Canada)"}"#).unwrap();
        assert_eq!(user.time_zone.as_deref(), Some("Pacific Time (US & Canada)"));
    }

    #[test]
    fn test_empty_users_list() {
        let holder: UsersHolder = serde_json::from_str(r#"{"users":null}"#).unwrap();
        assert!(holder.into_first().is_none());
    }
}
