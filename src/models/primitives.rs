//! Primitive types and newtypes for type-safe API interactions.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use crate::{Error, Result};

/// API token issued by the bank's internet banking.
///
/// The token is embedded into every request URL. It is kept behind
/// [`SecretString`] so it never shows up in `Debug` output or logs.
///
/// # Example
///
/// ```
/// use fio_rs::Token;
///
/// let token = Token::new("my-api-token").expect("non-empty token");
/// assert_eq!(format!("{:?}", token), "Token([REDACTED])");
/// ```
pub struct Token(SecretString);

impl Token {
    /// Create a token, rejecting empty or whitespace-only input.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] if the token is blank.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return Err(Error::Config("API token must not be empty".to_string()));
        }
        Ok(Self(SecretString::from(token)))
    }

    pub(crate) fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

impl Clone for Token {
    fn clone(&self) -> Self {
        Self(SecretString::from(self.expose().to_string()))
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([REDACTED])")
    }
}

/// Identifier of a single account movement.
///
/// The API reports ids as integers; this type also accepts strings so ids
/// read from elsewhere can be passed to
/// [`Downloader::set_last_id`](crate::Downloader::set_last_id) directly.
///
/// # Example
///
/// ```
/// use fio_rs::TransactionId;
///
/// let id = TransactionId::from(1147608196u64);
/// assert_eq!(id.as_str(), "1147608196");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct TransactionId(String);

impl TransactionId {
    /// Create a new transaction id.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TransactionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for TransactionId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for TransactionId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for TransactionId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<u64> for TransactionId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for TransactionId {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum IdValue {
            Int(u64),
            String(String),
        }

        Ok(match IdValue::deserialize(deserializer)? {
            IdValue::Int(i) => TransactionId::from(i),
            IdValue::String(s) => TransactionId(s),
        })
    }
}
