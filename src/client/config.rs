//! Client configuration options.

use std::path::PathBuf;
use std::time::Duration;

use crate::urls::DEFAULT_BASE_URL;

/// Configuration for the [`Downloader`](crate::Downloader).
///
/// `timeout` and `user_agent` only apply to the HTTP client the downloader
/// builds itself; a client passed to
/// [`Downloader::with_http_client`](crate::Downloader::with_http_client) is
/// used as is.
///
/// # Example
///
/// ```
/// use fio_rs::ClientConfig;
/// use std::time::Duration;
///
/// let config = ClientConfig::default()
///     .with_timeout(Duration::from_secs(60))
///     .with_save_path("/tmp/statements");
/// ```
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// REST base URL
    pub base_url: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
    /// Directory PDF exports are written to
    pub save_path: Option<PathBuf>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(30),
            user_agent: format!("fio-rs/{} (Rust)", env!("CARGO_PKG_VERSION")),
            save_path: None,
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Point the client at a different REST base.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Set the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Set the User-Agent header.
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Set the directory PDF exports are saved to.
    pub fn with_save_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.save_path = Some(path.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert!(config.user_agent.starts_with("fio-rs/"));
        assert!(config.save_path.is_none());
    }

    #[test]
    fn test_builder_methods() {
        let config = ClientConfig::new()
            .with_base_url("http://localhost:9000/")
            .with_timeout(Duration::from_secs(5))
            .with_user_agent("my-app/1.0")
            .with_save_path("/var/tmp");

        assert_eq!(config.base_url, "http://localhost:9000/");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.user_agent, "my-app/1.0");
        assert_eq!(config.save_path, Some(PathBuf::from("/var/tmp")));
    }
}
