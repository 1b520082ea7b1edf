//! The `{success, error, errors}` wrapper carried by mutating endpoints.

use serde::Deserialize;

use crate::error::{ApiError, CoinbaseError};
use crate::types::serde_helpers::{empty_string_as_none, null_as_default};

/// Success flag and error messages sent next to a payload.
///
/// Flattened into each response holder that carries it:
///
/// ```rust
/// use coinbase_api_client::rest::Envelope;
///
/// let envelope: Envelope =
///     serde_json::from_str(r#"{"success":false,"errors":["A","B"]}"#).unwrap();
/// let error = envelope.check("Foo").unwrap_err();
/// assert_eq!(error.to_string(), "A,B in Foo()");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Envelope {
    /// `None` when the server omitted the flag.
    #[serde(default)]
    pub success: Option<bool>,
    /// Single error message.
    #[serde(default, deserialize_with = "empty_string_as_none::deserialize")]
    pub error: Option<String>,
    /// Error messages; preferred over `error` when both are set.
    #[serde(default, deserialize_with = "null_as_default::deserialize")]
    pub errors: Vec<String>,
}

impl Envelope {
    /// Fail with the remote messages if the server reported `success: false`.
    ///
    /// A failure without any message is still a failure and yields an
    /// [`ApiError`] with no messages.
    pub fn check(&self, method: &str) -> Result<(), ApiError> {
        if self.success != Some(false) {
            return Ok(());
        }

        let messages = if !self.errors.is_empty() {
            self.errors.clone()
        } else {
            self.error.iter().cloned().collect()
        };
        Err(ApiError::new(messages, method))
    }
}

/// A response holder that embeds an [`Envelope`].
pub trait Enveloped: Sized {
    /// The envelope fields of this holder.
    fn envelope(&self) -> &Envelope;

    /// Return the holder if its envelope reports no failure.
    fn into_checked(self, method: &str) -> Result<Self, CoinbaseError> {
        self.envelope().check(method)?;
        Ok(self)
    }
}

impl Enveloped for Envelope {
    fn envelope(&self) -> &Envelope {
        self
    }
}

/// Unwrap a payload field that a successful response must carry.
pub(crate) fn require<T>(value: Option<T>, field: &str) -> Result<T, CoinbaseError> {
    value.ok_or_else(|| CoinbaseError::InvalidResponse(format!("Response missing '{field}' field")))
}
