//! Data models for the Fio API.
//!
//! - [`primitives`] - Core types like `Token` and `TransactionId`
//! - [`statement`] - Statement header and [`TransactionList`]
//! - [`transaction`] - Single account movements

pub mod primitives;
pub mod statement;
pub mod transaction;

// Re-export commonly used types
pub use primitives::*;
pub use statement::*;
pub use transaction::Transaction;
