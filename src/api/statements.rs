//! Statement queries and the server-side "last download" cursor.

use chrono::{Local, NaiveDate};

use crate::client::Downloader;
use crate::models::{TransactionId, TransactionList};
use crate::Result;

impl Downloader {
    /// Download movements booked between `from` and `to`, both inclusive.
    ///
    /// Dates are sent as given; a reversed range is the server's to judge.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use chrono::NaiveDate;
    ///
    /// # async fn example(downloader: fio_rs::Downloader) -> fio_rs::Result<()> {
    /// let list = downloader
    ///     .download_from_to(
    ///         NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
    ///         NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
    ///     )
    ///     .await?;
    /// println!("{} movements, closing balance {}", list.len(), list.closing_balance);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn download_from_to(&self, from: NaiveDate, to: NaiveDate) -> Result<TransactionList> {
        let url = self.inner.urls.build_periods_url(from, to);
        self.inner.get_statement("periods", url).await
    }

    /// Download movements from `since` up to today (local calendar date).
    pub async fn download_since(&self, since: NaiveDate) -> Result<TransactionList> {
        self.download_from_to(since, Local::now().date_naive()).await
    }

    /// Download movements the server has not handed out yet.
    ///
    /// The server tracks what was already downloaded; see
    /// [`set_last_id`](Self::set_last_id) to move that marker.
    pub async fn download_last(&self) -> Result<TransactionList> {
        let url = self.inner.urls.build_last_url();
        self.inner.get_statement("last", url).await
    }

    /// Move the server-side cursor so the next [`download_last`](Self::download_last)
    /// starts after `id`.
    ///
    /// ```no_run
    /// # async fn example(downloader: fio_rs::Downloader) -> fio_rs::Result<()> {
    /// let list = downloader.download_last().await?;
    /// if let Some(id) = list.last_id() {
    ///     // the API enforces a cooldown between calls
    ///     tokio::time::sleep(std::time::Duration::from_secs(30)).await;
    ///     downloader.set_last_id(id).await?;
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn set_last_id(&self, id: &TransactionId) -> Result<()> {
        let url = self.inner.urls.build_set_last_id_url(id);
        self.inner.get("set-last-id", url).await?;
        Ok(())
    }
}
