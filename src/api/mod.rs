//! API operations of the [`Downloader`](crate::Downloader).
//!
//! Each module adds the operations for one group of endpoints.

mod pdf;
mod statements;
