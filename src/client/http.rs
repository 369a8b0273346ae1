//! HTTP client implementation for the Fio API.

use std::path::Path;
use std::sync::Arc;

use serde_json::Value;
use tokio::sync::OnceCell;
use url::Url;

use crate::models::{Token, TransactionList};
use crate::urls::UrlBuilder;
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for the Fio transaction export API.
///
/// Each operation performs exactly one GET request and returns its outcome;
/// nothing is retried or cached. The API allows one call per token every
/// 30 seconds, a faster caller gets [`Error::RateLimited`].
///
/// The underlying [`reqwest::Client`] is either supplied through
/// [`with_http_client`](Self::with_http_client) or built from the
/// [`ClientConfig`] on first use, at most once per downloader and its clones.
///
/// # Example
///
/// ```no_run
/// use fio_rs::{ClientConfig, Downloader};
///
/// # async fn example() -> fio_rs::Result<()> {
/// let downloader = Downloader::with_config(
///     "your-api-token",
///     ClientConfig::default().with_save_path("/tmp"),
/// )?;
///
/// let list = downloader.download_last().await?;
/// for txn in &list {
///     println!("{} {} {}", txn.date, txn.amount, txn.currency);
/// }
///
/// let pdf = downloader.download_pdf(2024, 1).await?;
/// println!("saved to {}", pdf.display());
/// # Ok(())
/// # }
/// ```
pub struct Downloader {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    http: OnceCell<reqwest::Client>,
    pub(crate) urls: UrlBuilder,
    pub(crate) config: ClientConfig,
}

impl Downloader {
    /// Create a downloader for the production API with default settings.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the token is empty.
    pub fn new(token: impl Into<String>) -> Result<Self> {
        Self::with_config(token, ClientConfig::default())
    }

    /// Create a downloader with custom configuration.
    ///
    /// The HTTP client is built lazily on the first request.
    pub fn with_config(token: impl Into<String>, config: ClientConfig) -> Result<Self> {
        Self::build(token, config, OnceCell::new())
    }

    /// Create a downloader around an existing HTTP client.
    ///
    /// Timeouts, TLS settings and headers of `http` are used unmodified.
    pub fn with_http_client(
        token: impl Into<String>,
        config: ClientConfig,
        http: reqwest::Client,
    ) -> Result<Self> {
        Self::build(token, config, OnceCell::from(http))
    }

    fn build(
        token: impl Into<String>,
        config: ClientConfig,
        http: OnceCell<reqwest::Client>,
    ) -> Result<Self> {
        let token = Token::new(token)?;
        let urls = UrlBuilder::with_base_url(token, &config.base_url)?;

        Ok(Self {
            inner: Arc::new(ClientInner { http, urls, config }),
        })
    }

    /// Get the URL builder this downloader requests through.
    pub fn url_builder(&self) -> &UrlBuilder {
        &self.inner.urls
    }

    /// Get the configured PDF destination, if any.
    pub fn save_path(&self) -> Option<&Path> {
        self.inner.config.save_path.as_deref()
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.inner.config
    }
}

impl ClientInner {
    /// Get the HTTP client, building it on first use.
    async fn http(&self) -> Result<&reqwest::Client> {
        self.http
            .get_or_try_init(|| async {
                tracing::debug!("Building HTTP client");
                reqwest::Client::builder()
                    .timeout(self.config.timeout)
                    .user_agent(&self.config.user_agent)
                    .build()
            })
            .await
            .map_err(Error::from)
    }

    /// Issue a GET and fail on any non-2xx status.
    ///
    /// `endpoint` names the request in logs; the URL itself carries the
    /// token and is never logged.
    pub(crate) async fn get(&self, endpoint: &'static str, url: Url) -> Result<reqwest::Response> {
        let http = self.http().await?;

        tracing::debug!(endpoint, "Sending request");
        let response = http.get(url).send().await?;
        let status = response.status();

        response.error_for_status().map_err(|err| {
            // reqwest's Display includes the URL
            tracing::warn!(endpoint, %status, "Request failed");
            Error::from_http(err)
        })
    }

    /// Fetch a statement endpoint and parse its `accountStatement`.
    pub(crate) async fn get_statement(
        &self,
        endpoint: &'static str,
        url: Url,
    ) -> Result<TransactionList> {
        let response = self.get(endpoint, url).await?;
        let body = response.bytes().await?;

        let statement = match serde_json::from_slice::<Value>(&body)? {
            Value::Object(mut object) => object
                .remove("accountStatement")
                .filter(|statement| !statement.is_null()),
            other => {
                return Err(Error::InvalidStatement(format!(
                    "expected a JSON object, got {}",
                    json_kind(&other)
                )))
            }
        };

        let list = TransactionList::create(statement)?;
        tracing::debug!(endpoint, transactions = list.len(), "Statement received");
        Ok(list)
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl Clone for Downloader {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for Downloader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Downloader")
            .field("config", &self.inner.config)
            .finish()
    }
}
