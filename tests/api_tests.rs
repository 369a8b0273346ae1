//! Live tests against the real Fio API.
//!
//! Environment variables required:
//! - FIO_TOKEN: API token of a (preferably read-only) account
//!
//! The API allows one call per token every 30 seconds, so these tests are
//! ignored by default and each one waits out the cooldown first.
//!
//! Run with: cargo test --test api_tests -- --ignored --test-threads=1

use std::env;
use std::sync::Once;
use std::time::Duration;

use chrono::{Datelike, Days, Local};
use tempfile::TempDir;
use tracing_subscriber::EnvFilter;

use fio_rs::prelude::*;
use fio_rs::RATE_LIMIT_COOLDOWN_SECS;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

/// Get the API token for testing
fn get_test_token() -> String {
    env::var("FIO_TOKEN").expect("FIO_TOKEN must be set")
}

/// Create a downloader for testing, after waiting out the cooldown left by
/// the previous test
async fn create_downloader(save_path: Option<&TempDir>) -> Downloader {
    init_logging();
    tokio::time::sleep(Duration::from_secs(RATE_LIMIT_COOLDOWN_SECS + 1)).await;

    let mut config = ClientConfig::default();
    if let Some(dir) = save_path {
        config = config.with_save_path(dir.path());
    }
    Downloader::with_config(get_test_token(), config).expect("Failed to create downloader")
}

#[tokio::test]
#[ignore]
async fn test_download_last_week() {
    let downloader = create_downloader(None).await;
    let since = Local::now().date_naive() - Days::new(7);

    let list = downloader.download_since(since).await;
    assert!(list.is_ok(), "Should download statement: {:?}", list);

    let list = list.unwrap();
    tracing::info!(
        "Account {}/{}: {} movements, closing balance {} {}",
        list.account.account_number,
        list.account.bank_code,
        list.len(),
        list.closing_balance,
        list.account.currency
    );
    assert!(list.date_start <= list.date_end);
}

#[tokio::test]
#[ignore]
async fn test_back_to_back_calls_are_rate_limited() {
    let downloader = create_downloader(None).await;

    let first = downloader.download_last().await;
    assert!(first.is_ok(), "First call should succeed: {:?}", first);

    let second = downloader.download_last().await;
    match second {
        Err(err) => assert!(err.is_rate_limited(), "Expected rate limit, got {:?}", err),
        Ok(_) => panic!("Second call inside the cooldown should be rejected"),
    }
}

#[tokio::test]
#[ignore]
async fn test_invalid_token_is_server_error() {
    init_logging();
    let downloader = Downloader::new("definitely-not-a-valid-token").unwrap();

    let err = downloader.download_last().await.unwrap_err();
    assert!(err.is_server_error(), "Expected server error, got {:?}", err);
}

#[tokio::test]
#[ignore]
async fn test_download_pdf() {
    let dir = TempDir::new().unwrap();
    let downloader = create_downloader(Some(&dir)).await;
    let last_month = Local::now().date_naive() - Days::new(31);

    let path = downloader
        .download_pdf(last_month.year(), last_month.month())
        .await;
    assert!(path.is_ok(), "Should download PDF: {:?}", path);

    let bytes = std::fs::read(path.unwrap()).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}
