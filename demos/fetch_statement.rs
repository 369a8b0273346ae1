//! Fetch unread movements example.
//!
//! Downloads everything the server has not handed out yet, prints it and,
//! with `--mark-read`, moves the server-side cursor past the newest movement.
//!
//! Run with: FIO_TOKEN=... cargo run --example fetch_statement [-- --mark-read]

use std::time::Duration;

use chrono::Datelike;
use fio_rs::{ClientConfig, Downloader, RATE_LIMIT_COOLDOWN_SECS};

#[tokio::main]
async fn main() -> fio_rs::Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::var("FIO_TOKEN").expect("FIO_TOKEN environment variable required");
    let mark_read = std::env::args().any(|arg| arg == "--mark-read");

    let mut config = ClientConfig::default();
    if let Ok(path) = std::env::var("FIO_SAVE_PATH") {
        config = config.with_save_path(path);
    }
    let downloader = Downloader::with_config(token, config)?;

    let list = downloader.download_last().await?;
    println!(
        "Account {}/{} ({}), {} to {}",
        list.account.account_number,
        list.account.bank_code,
        list.account.currency,
        list.date_start,
        list.date_end
    );
    println!(
        "Opening {}  closing {}  movements {}",
        list.opening_balance,
        list.closing_balance,
        list.len()
    );

    for txn in &list {
        println!(
            "  {} {:>12} {} {}",
            txn.date,
            txn.amount,
            txn.currency,
            txn.counter_account_name
                .as_deref()
                .or(txn.comment.as_deref())
                .unwrap_or("-")
        );
    }

    if mark_read {
        if let Some(id) = list.last_id() {
            println!("\nWaiting {}s before moving the cursor...", RATE_LIMIT_COOLDOWN_SECS);
            tokio::time::sleep(Duration::from_secs(RATE_LIMIT_COOLDOWN_SECS)).await;
            downloader.set_last_id(id).await?;
            println!("Cursor moved to {}", id);
        }
    }

    if downloader.save_path().is_some() {
        // the cursor call above (or the statement itself) used the token
        tokio::time::sleep(Duration::from_secs(RATE_LIMIT_COOLDOWN_SECS)).await;
        let today = chrono::Local::now().date_naive();
        let path = downloader
            .download_pdf(today.year(), today.month())
            .await?;
        println!("Statement PDF saved to {}", path.display());
    }

    println!("\nDone!");
    Ok(())
}
