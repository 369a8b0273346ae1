//! Endpoint URL construction.
//!
//! Every endpoint is a path under the REST base with the token as the second
//! segment. Building URLs never touches the network.

use chrono::NaiveDate;
use url::Url;

use crate::models::{Token, TransactionId};
use crate::{Error, Result};

/// Production REST base of the export API.
pub const DEFAULT_BASE_URL: &str = "https://fioapi.fio.cz/v1/rest/";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Builds token-scoped endpoint URLs.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use fio_rs::{Token, UrlBuilder};
///
/// let builder = UrlBuilder::new(Token::new("abc").unwrap()).unwrap();
/// let url = builder.build_periods_url(
///     NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
///     NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
/// );
/// assert_eq!(
///     url.as_str(),
///     "https://fioapi.fio.cz/v1/rest/periods/abc/2024-01-01/2024-01-31/transactions.json"
/// );
/// ```
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base: Url,
    token: Token,
}

impl UrlBuilder {
    /// Create a builder against the production API.
    pub fn new(token: Token) -> Result<Self> {
        Self::with_base_url(token, DEFAULT_BASE_URL)
    }

    /// Create a builder against a custom base URL.
    ///
    /// # Errors
    ///
    /// [`Error::UrlParse`] if the base does not parse, [`Error::Config`] if
    /// it cannot carry a path (e.g. `mailto:`).
    pub fn with_base_url(token: Token, base_url: &str) -> Result<Self> {
        let base = Url::parse(base_url)?;
        if base.cannot_be_a_base() {
            return Err(Error::Config(format!(
                "base URL cannot carry a path: {}",
                base_url
            )));
        }
        Ok(Self { base, token })
    }

    /// Monthly PDF export: `by-id/<token>/<year>/<month>/transactions.pdf`.
    ///
    /// Year and month are not range checked; the server rejects bad values.
    pub fn build_pdf(&self, year: i32, month: u32) -> Url {
        self.endpoint(&[
            "by-id",
            self.token.expose(),
            &year.to_string(),
            &month.to_string(),
            "transactions.pdf",
        ])
    }

    /// Statement for an inclusive date range. The order of `from` and `to`
    /// is passed through as given.
    pub fn build_periods_url(&self, from: NaiveDate, to: NaiveDate) -> Url {
        self.endpoint(&[
            "periods",
            self.token.expose(),
            &from.format(DATE_FORMAT).to_string(),
            &to.format(DATE_FORMAT).to_string(),
            "transactions.json",
        ])
    }

    /// Movements since the server-side cursor.
    pub fn build_last_url(&self) -> Url {
        self.endpoint(&["last", self.token.expose(), "transactions.json"])
    }

    /// Moves the server-side cursor to `id`. The trailing slash is required.
    pub fn build_set_last_id_url(&self, id: &TransactionId) -> Url {
        self.endpoint(&["set-last-id", self.token.expose(), id.as_str(), ""])
    }

    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base.clone();
        // cannot_be_a_base was rejected in the constructor
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }
}
