//! Monthly PDF statement export.

use std::path::{Path, PathBuf};

use futures_util::StreamExt;
use tokio::fs::{self, File, OpenOptions};
use tokio::io::AsyncWriteExt;
use uuid::Uuid;

use crate::client::Downloader;
use crate::{Error, Result};

impl Downloader {
    /// Download the PDF statement for a month into the configured save path.
    ///
    /// Returns the path of the written file,
    /// `<save_path>/transaction_<year>_<month>_<unique>.pdf`. Every call writes
    /// a new file, so repeated downloads of the same month never overwrite
    /// each other.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] without sending anything if no save path was
    /// configured. A body that fails halfway leaves no partial file behind.
    pub async fn download_pdf(&self, year: i32, month: u32) -> Result<PathBuf> {
        let dir = self.save_path().ok_or_else(|| {
            Error::Config("save_path must be configured to download PDF files".to_string())
        })?;

        let url = self.inner.urls.build_pdf(year, month);
        let response = self.inner.get("pdf", url).await?;

        let path = pdf_path(dir, year, month);
        let mut file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&path)
            .await?;

        if let Err(err) = write_body(response, &mut file).await {
            drop(file);
            if let Err(cleanup) = fs::remove_file(&path).await {
                tracing::warn!(path = %path.display(), error = %cleanup, "Failed to remove partial PDF");
            }
            return Err(err);
        }

        tracing::debug!(path = %path.display(), "PDF statement saved");
        Ok(path)
    }
}

fn pdf_path(dir: &Path, year: i32, month: u32) -> PathBuf {
    dir.join(format!(
        "transaction_{}_{}_{}.pdf",
        year,
        month,
        Uuid::new_v4().simple()
    ))
}

async fn write_body(response: reqwest::Response, file: &mut File) -> Result<()> {
    let mut body = response.bytes_stream();
    while let Some(chunk) = body.next().await {
        file.write_all(&chunk?).await?;
    }
    file.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pdf_path_shape() {
        let path = pdf_path(Path::new("/tmp/out"), 2024, 3);
        assert_eq!(path.parent(), Some(Path::new("/tmp/out")));

        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("transaction_2024_3_"));
        assert!(name.ends_with(".pdf"));
    }

    #[test]
    fn test_pdf_paths_are_unique() {
        let dir = Path::new("/tmp/out");
        assert_ne!(pdf_path(dir, 2024, 3), pdf_path(dir, 2024, 3));
    }
}
