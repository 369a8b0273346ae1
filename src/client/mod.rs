//! HTTP client layer for the Fio API.
//!
//! This module provides the main entry point [`Downloader`] and its
//! [`ClientConfig`].
//!
//! # Example
//!
//! ```no_run
//! use fio_rs::{ClientConfig, Downloader};
//! use std::time::Duration;
//!
//! # async fn example() -> fio_rs::Result<()> {
//! let http = reqwest::Client::builder()
//!     .timeout(Duration::from_secs(10))
//!     .build()?;
//! let downloader = Downloader::with_http_client("your-api-token", ClientConfig::default(), http)?;
//!
//! let list = downloader.download_last().await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::ClientConfig;
pub use http::Downloader;
