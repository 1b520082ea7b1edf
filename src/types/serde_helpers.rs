//! Custom serde helpers for the Coinbase API's loose JSON.
//!
//! The API sends `null` where arrays are expected, `""` where strings are
//! absent, and amounts as strings, numbers, or nothing at all.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, de};

/// Deserialize to `None` instead of failing on invalid/unexpected data.
///
/// Used for payloads that sit next to a response envelope: a failed call may
/// carry a half-filled payload, and the envelope error must still surface.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinbase_api_client::types::serde_helpers::default_on_error;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "default_on_error::deserialize", default)]
///     count: Option<u32>,
/// }
///
/// let json = r#"{"count":"invalid"}"#;
/// let response: Response = serde_json::from_str(json).unwrap();
/// assert!(response.count.is_none());
/// ```
pub mod default_on_error {
    use super::*;

    /// Deserialize a value, returning None if deserialization fails.
    ///
    /// The value is buffered first so a failed parse never leaves the
    /// surrounding document half-consumed.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
    where
        T: DeserializeOwned,
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(T::deserialize(value).ok())
    }
}

/// Treat `null` as the type's default value.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinbase_api_client::types::serde_helpers::null_as_default;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "null_as_default::deserialize", default)]
///     errors: Vec<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"errors":null}"#).unwrap();
/// assert!(response.errors.is_empty());
/// ```
pub mod null_as_default {
    use super::*;

    /// Deserialize a value, mapping `null` to `T::default()`.
    pub fn deserialize<'de, T, D>(deserializer: D) -> Result<T, D::Error>
    where
        T: Deserialize<'de> + Default,
        D: Deserializer<'de>,
    {
        Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
    }
}

/// Helper for empty strings that should be deserialized as None.
///
/// # Example
///
/// ```rust
/// use serde::Deserialize;
/// use coinbase_api_client::types::serde_helpers::empty_string_as_none;
///
/// #[derive(Deserialize, Debug)]
/// struct Response {
///     #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
///     label: Option<String>,
/// }
///
/// let response: Response = serde_json::from_str(r#"{"label":""}"#).unwrap();
/// assert!(response.label.is_none());
/// ```
pub mod empty_string_as_none {
    use super::*;

    /// Deserialize a string, returning None if empty.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        Ok(s.filter(|s| !s.is_empty()))
    }
}

/// An optional decimal sent as a string, a number, `""`, or `null`.
pub mod maybe_decimal {
    use super::*;
    use rust_decimal::Decimal;

    /// Deserialize a value that may be missing, empty, a number, or a decimal string.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct MaybeDecimalVisitor;

        impl<'de> de::Visitor<'de> for MaybeDecimalVisitor {
            type Value = Option<Decimal>;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal string, a number, or null")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                if v.is_empty() {
                    return Ok(None);
                }
                v.parse().map(Some).map_err(de::Error::custom)
            }

            fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                self.visit_str(&v)
            }

            fn visit_i64<E>(self, v: i64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(Some(Decimal::from(v)))
            }

            fn visit_f64<E>(self, v: f64) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Decimal::try_from(v).map(Some).map_err(de::Error::custom)
            }

            fn visit_none<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }

            fn visit_unit<E>(self) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                Ok(None)
            }
        }

        deserializer.deserialize_any(MaybeDecimalVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[derive(Deserialize, Debug)]
    struct Amounts {
        #[serde(deserialize_with = "maybe_decimal::deserialize", default)]
        value: Option<Decimal>,
    }

    #[test]
    fn test_maybe_decimal_string() {
        let test: Amounts = serde_json::from_str(r#"{"value":"36.62800000"}"#).unwrap();
        assert_eq!(test.value.unwrap(), Decimal::from_str("36.628").unwrap());
        assert_eq!(test.value.unwrap().to_string(), "36.62800000");
    }

    #[test]
    fn test_maybe_decimal_number() {
        let test: Amounts = serde_json::from_str(r#"{"value":125}"#).unwrap();
        assert_eq!(test.value, Some(Decimal::from(125)));
    }

    #[test]
    fn test_maybe_decimal_empty_null_and_missing() {
        let test: Amounts = serde_json::from_str(r#"{"value":""}"#).unwrap();
        assert!(test.value.is_none());
        let test: Amounts = serde_json::from_str(r#"{"value":null}"#).unwrap();
        assert!(test.value.is_none());
        let test: Amounts = serde_json::from_str("{}").unwrap();
        assert!(test.value.is_none());
    }

    #[test]
    fn test_default_on_error_keeps_following_fields() {
        #[derive(Deserialize, Debug)]
        struct Inner {
            id: String,
        }

        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "default_on_error::deserialize", default)]
            inner: Option<Inner>,
            after: u32,
        }

        let test: Test = serde_json::from_str(r#"{"inner":{"id":7,"x":[1,2]},"after":5}"#).unwrap();
        assert!(test.inner.is_none());
        assert_eq!(test.after, 5);
    }

    #[test]
    fn test_null_as_default_keeps_values() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "null_as_default::deserialize", default)]
            errors: Vec<String>,
        }

        let test: Test = serde_json::from_str(r#"{"errors":["A","B"]}"#).unwrap();
        assert_eq!(test.errors, vec!["A", "B"]);
    }

    #[test]
    fn test_empty_string_as_none_keeps_values() {
        #[derive(Deserialize, Debug)]
        struct Test {
            #[serde(deserialize_with = "empty_string_as_none::deserialize", default)]
            label: Option<String>,
        }

        let test: Test = serde_json::from_str(r#"{"label":"Savings"}"#).unwrap();
        assert_eq!(test.label.as_deref(), Some("Savings"));
    }
}
