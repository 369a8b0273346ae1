//! Account statement models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::primitives::TransactionId;
use super::transaction::{deserialize_fio_date, Transaction};
use crate::{Error, Result};

/// The account a statement was issued for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    /// Account number without the bank code
    pub account_number: String,
    /// Bank code (`2010` for Fio)
    pub bank_code: String,
    /// Account currency
    pub currency: String,
    /// IBAN
    pub iban: Option<String>,
    /// BIC / SWIFT code
    pub bic: Option<String>,
}

/// Header of the `accountStatement` payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct StatementInfo {
    account_id: String,
    bank_id: String,
    currency: String,
    #[serde(default)]
    iban: Option<String>,
    #[serde(default)]
    bic: Option<String>,
    opening_balance: Decimal,
    closing_balance: Decimal,
    #[serde(deserialize_with = "deserialize_fio_date")]
    date_start: NaiveDate,
    #[serde(deserialize_with = "deserialize_fio_date")]
    date_end: NaiveDate,
    #[serde(default)]
    id_from: Option<TransactionId>,
    #[serde(default)]
    id_to: Option<TransactionId>,
    #[serde(default)]
    id_last_download: Option<TransactionId>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawStatement {
    info: StatementInfo,
    #[serde(default)]
    transaction_list: Option<RawTransactionList>,
}

#[derive(Deserialize)]
struct RawTransactionList {
    #[serde(default)]
    transaction: Option<Vec<Transaction>>,
}

/// Movements returned by a statement query, with the statement header.
///
/// # Example
///
/// ```
/// use fio_rs::models::TransactionList;
/// use serde_json::json;
///
/// let payload = json!({
///     "info": {
///         "accountId": "2000000000", "bankId": "2010", "currency": "CZK",
///         "iban": "CZ7920100000002000000000", "bic": "FIOBCZPPXXX",
///         "openingBalance": 0, "closingBalance": 0,
///         "dateStart": "2024-01-01+0100", "dateEnd": "2024-01-31+0100",
///         "idFrom": null, "idTo": null, "idLastDownload": null
///     },
///     "transactionList": {"transaction": []}
/// });
///
/// let list = TransactionList::create(Some(payload)).unwrap();
/// assert!(list.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionList {
    /// Balance at the start of the period
    pub opening_balance: Decimal,
    /// Balance at the end of the period
    pub closing_balance: Decimal,
    /// First day of the period
    pub date_start: NaiveDate,
    /// Last day of the period
    pub date_end: NaiveDate,
    /// Id of the first movement in the period
    pub id_from: Option<TransactionId>,
    /// Id of the last movement in the period
    pub id_to: Option<TransactionId>,
    /// Position of the server-side cursor when the statement was produced
    pub id_last_download: Option<TransactionId>,
    /// Account the statement belongs to
    pub account: Account,
    /// Movements, oldest first
    pub transactions: Vec<Transaction>,
}

impl TransactionList {
    /// Build a list from the `accountStatement` value of a response.
    ///
    /// `None` means the response carried no statement at all.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidStatement`] when the payload is absent, [`Error::Json`]
    /// when it does not have the statement shape.
    pub fn create(statement: Option<Value>) -> Result<Self> {
        let statement = statement.ok_or_else(|| {
            Error::InvalidStatement("response has no accountStatement".to_string())
        })?;
        let raw: RawStatement = serde_json::from_value(statement)?;
        Ok(Self::from_raw(raw))
    }

    /// Number of movements.
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns `true` if the period had no movements.
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterate over the movements.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Id of the newest movement, suitable for
    /// [`Downloader::set_last_id`](crate::Downloader::set_last_id).
    pub fn last_id(&self) -> Option<&TransactionId> {
        self.transactions.last().map(|t| &t.id)
    }

    fn from_raw(raw: RawStatement) -> Self {
        let info = raw.info;
        Self {
            opening_balance: info.opening_balance,
            closing_balance: info.closing_balance,
            date_start: info.date_start,
            date_end: info.date_end,
            id_from: info.id_from,
            id_to: info.id_to,
            id_last_download: info.id_last_download,
            account: Account {
                account_number: info.account_id,
                bank_code: info.bank_id,
                currency: info.currency,
                iban: info.iban,
                bic: info.bic,
            },
            transactions: raw
                .transaction_list
                .and_then(|l| l.transaction)
                .unwrap_or_default(),
        }
    }
}

impl<'a> IntoIterator for &'a TransactionList {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for TransactionList {
    type Item = Transaction;
    type IntoIter = std::vec::IntoIter<Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.transactions.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    const STATEMENT: &str =
        include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/statement.json"));

    fn fixture_statement() -> Value {
        let mut body: Value = serde_json::from_str(STATEMENT).unwrap();
        body["accountStatement"].take()
    }

    #[test]
    fn test_create_from_fixture() {
        let list = TransactionList::create(Some(fixture_statement())).unwrap();

        assert_eq!(list.account.account_number, "2000000000");
        assert_eq!(list.account.bank_code, "2010");
        assert_eq!(list.account.currency, "CZK");
        assert_eq!(list.account.bic.as_deref(), Some("FIOBCZPPXXX"));
        assert_eq!(list.opening_balance, dec!(1000.5));
        assert_eq!(list.closing_balance, dec!(870.5));
        assert_eq!(list.date_start, NaiveDate::from_ymd_opt(2012, 6, 30).unwrap());
        assert_eq!(list.date_end, NaiveDate::from_ymd_opt(2012, 7, 31).unwrap());
        assert_eq!(list.id_from, Some(TransactionId::from(1147608196u64)));
        assert_eq!(list.id_last_download, None);
        assert_eq!(list.len(), 2);
        assert_eq!(list.last_id(), Some(&TransactionId::from(1147608197u64)));

        let total: Decimal = list.iter().map(|t| t.amount).sum();
        assert_eq!(list.opening_balance + total, list.closing_balance);
    }

    #[test]
    fn test_create_without_payload() {
        let err = TransactionList::create(None).unwrap_err();
        assert!(matches!(err, Error::InvalidStatement(_)));
    }

    #[test]
    fn test_create_with_wrong_shape() {
        let err = TransactionList::create(Some(json!({"foo": "bar"}))).unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_null_transaction_list_is_empty() {
        let mut statement = fixture_statement();
        statement["transactionList"] = Value::Null;

        let list = TransactionList::create(Some(statement)).unwrap();
        assert!(list.is_empty());
        assert_eq!(list.last_id(), None);
    }
}
