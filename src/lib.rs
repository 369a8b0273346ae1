//! # fio-rs
//!
//! An async Rust client for the Fio banka transaction export API.
//!
//! The API is token based: every account (or account view) gets its own
//! token, and each token may be used for one call every 30 seconds. This
//! crate builds the endpoint URLs, performs the request and turns the
//! response into typed data or a typed [`Error`].
//!
//! ## Features
//!
//! - **Statements**: movements for a date range, since a date, or since the
//!   last download
//! - **Cursor control**: move the server-side "last downloaded" marker
//! - **PDF export**: stream a monthly statement straight to disk
//! - **Typed failures**: rate limiting (409) and invalid token (500) are
//!   distinct error variants carrying the original HTTP error
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use chrono::NaiveDate;
//! use fio_rs::Downloader;
//!
//! #[tokio::main]
//! async fn main() -> fio_rs::Result<()> {
//!     let downloader = Downloader::new("your-api-token")?;
//!
//!     let since = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//!     let list = downloader.download_since(since).await?;
//!
//!     println!("{} {}", list.account.account_number, list.account.currency);
//!     for txn in &list {
//!         println!("{} {:>12} {:?}", txn.date, txn.amount, txn.counter_account_name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Handling the rate limit
//!
//! Nothing is retried internally. Callers that poll should back off on
//! [`Error::RateLimited`]:
//!
//! ```rust,no_run
//! use std::time::Duration;
//! use fio_rs::{Downloader, Error};
//!
//! # async fn example(downloader: Downloader) -> fio_rs::Result<()> {
//! let list = match downloader.download_last().await {
//!     Err(Error::RateLimited { retry_after_secs, .. }) => {
//!         tokio::time::sleep(Duration::from_secs(retry_after_secs)).await;
//!         downloader.download_last().await?
//!     }
//!     other => other?,
//! };
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

mod api;
pub mod client;
pub mod error;
pub mod models;
pub mod urls;

// Re-export primary types at crate root for convenience
pub use client::{ClientConfig, Downloader};
pub use error::{Error, Result, RATE_LIMIT_COOLDOWN_SECS};
pub use models::{Token, TransactionId};
pub use urls::UrlBuilder;

/// Prelude module for convenient imports.
///
/// ```rust
/// use fio_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::client::{ClientConfig, Downloader};
    pub use crate::error::{Error, Result};
    pub use crate::models::{Account, Token, Transaction, TransactionId, TransactionList};
    pub use crate::urls::UrlBuilder;
}
