//! Error types for the Fio API client.
//!
//! Every failure a [`Downloader`](crate::Downloader) operation can produce is a
//! variant of [`Error`]. HTTP failures keep the original [`reqwest::Error`] as
//! their source so the status and URL context survive for diagnostics.

use reqwest::StatusCode;
use thiserror::Error;

/// A specialized `Result` type for Fio API operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Minimum interval the API enforces between two calls with the same token.
pub const RATE_LIMIT_COOLDOWN_SECS: u64 = 30;

/// The main error type for all Fio API operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Client was used in a way its configuration does not allow
    /// (PDF download without a save path, empty token).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The API answered 409: the token was used again before the cooldown expired.
    #[error("Rate limited; one call per token every {retry_after_secs} seconds")]
    RateLimited {
        /// Number of seconds to wait before calling again
        retry_after_secs: u64,
        /// The underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// The API answered 500, which it does for invalid or expired tokens.
    #[error("Server returned 500 Internal Error (probably invalid token?)")]
    Server {
        /// The underlying HTTP error
        #[source]
        source: reqwest::Error,
    },

    /// Any other HTTP or network failure, passed through unchanged.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body could not be decoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Response was valid JSON but did not carry a statement.
    #[error("Invalid statement: {0}")]
    InvalidStatement(String),

    /// Writing a downloaded file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// URL parsing error
    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),
}

impl Error {
    /// Map a failed HTTP exchange onto the API's error taxonomy.
    ///
    /// 409 and 500 carry API-specific meaning; everything else is returned
    /// as [`Error::Http`] with the original error untouched.
    pub(crate) fn from_http(err: reqwest::Error) -> Self {
        match err.status() {
            Some(StatusCode::CONFLICT) => Error::RateLimited {
                retry_after_secs: RATE_LIMIT_COOLDOWN_SECS,
                source: err,
            },
            Some(StatusCode::INTERNAL_SERVER_ERROR) => Error::Server { source: err },
            _ => Error::Http(err),
        }
    }

    /// Returns `true` if calling again later may succeed without any change
    /// on the caller's side.
    ///
    /// The client never retries on its own; this is a hint for the caller.
    ///
    /// # Example
    ///
    /// ```
    /// use fio_rs::Error;
    ///
    /// fn handle_error(err: Error) {
    ///     if err.is_retryable() {
    ///         println!("Waiting for the cooldown...");
    ///     }
    /// }
    /// ```
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::RateLimited { .. } => true,
            Error::Http(err) => err.is_timeout() || err.is_connect(),
            _ => false,
        }
    }

    /// Returns `true` if this is the 409 cooldown error.
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Error::RateLimited { .. })
    }

    /// Returns `true` if the server reported an internal error.
    pub fn is_server_error(&self) -> bool {
        match self {
            Error::Server { .. } => true,
            Error::Http(err) => err.status().is_some_and(|s| s.is_server_error()),
            _ => false,
        }
    }

    /// Returns `true` if this error indicates a client-side issue.
    pub fn is_client_error(&self) -> bool {
        match self {
            Error::Config(_) => true,
            Error::Http(err) => err.status().is_some_and(|s| s.is_client_error()),
            _ => false,
        }
    }

    /// HTTP status code of the failed response, if the error came from one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::RateLimited { source, .. } | Error::Server { source } => source.status(),
            Error::Http(err) => err.status(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_is_not_retryable() {
        let err = Error::Config("missing save path".into());
        assert!(!err.is_retryable());
        assert!(err.is_client_error());
        assert!(err.status().is_none());
    }

    #[test]
    fn test_invalid_statement_classification() {
        let err = Error::InvalidStatement("no accountStatement".into());
        assert!(!err.is_retryable());
        assert!(!err.is_server_error());
        assert!(!err.is_rate_limited());
    }

    #[test]
    fn test_json_error_display() {
        let source = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
        let err = Error::from(source);
        assert!(err.to_string().starts_with("JSON error:"));
    }
}
