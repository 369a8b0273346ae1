//! Account movement model.
//!
//! The API encodes every movement as a map of numbered columns, each column
//! being either `null` or an object `{"value": .., "name": .., "id": ..}`.
//! [`Transaction`] reads those columns into named fields.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use super::primitives::TransactionId;

/// One column of a movement record. Only the value is kept; `name` and `id`
/// are display metadata.
#[derive(Deserialize)]
struct Column<T> {
    value: T,
}

/// Dates come as `YYYY-MM-DD+HHMM`; the offset is dropped.
pub(crate) fn deserialize_fio_date<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    let date = raw.get(..10).unwrap_or(&raw);
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|e| D::Error::custom(format!("invalid date {raw:?}: {e}")))
}

fn column<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Column::<T>::deserialize(deserializer).map(|c| c.value)
}

fn date_column<'de, D>(deserializer: D) -> Result<NaiveDate, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    struct DateColumn {
        #[serde(deserialize_with = "deserialize_fio_date")]
        value: NaiveDate,
    }

    DateColumn::deserialize(deserializer).map(|c| c.value)
}

/// Optional text column. Some text columns (instruction id, symbols) are
/// sent as numbers, so numbers are accepted and rendered back to text.
fn text_column<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Text {
        Str(String),
        Int(i64),
        UInt(u64),
        Float(f64),
    }

    Ok(
        Option::<Column<Option<Text>>>::deserialize(deserializer)?.and_then(|c| {
            c.value.map(|text| match text {
                Text::Str(s) => s,
                Text::Int(i) => i.to_string(),
                Text::UInt(u) => u.to_string(),
                Text::Float(f) => f.to_string(),
            })
        }),
    )
}

/// A single account movement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// Movement id
    #[serde(rename(deserialize = "column22"), deserialize_with = "column")]
    pub id: TransactionId,
    /// Booking date
    #[serde(rename(deserialize = "column0"), deserialize_with = "date_column")]
    pub date: NaiveDate,
    /// Signed amount; negative for outgoing payments
    #[serde(rename(deserialize = "column1"), deserialize_with = "column")]
    pub amount: Decimal,
    /// ISO 4217 currency code
    #[serde(rename(deserialize = "column14"), deserialize_with = "column")]
    pub currency: String,
    /// Counter-party account number
    #[serde(rename(deserialize = "column2"), deserialize_with = "text_column", default)]
    pub counter_account: Option<String>,
    /// Counter-party account name
    #[serde(rename(deserialize = "column10"), deserialize_with = "text_column", default)]
    pub counter_account_name: Option<String>,
    /// Counter-party bank code
    #[serde(rename(deserialize = "column3"), deserialize_with = "text_column", default)]
    pub bank_code: Option<String>,
    /// Counter-party bank name
    #[serde(rename(deserialize = "column12"), deserialize_with = "text_column", default)]
    pub bank_name: Option<String>,
    /// Constant symbol
    #[serde(rename(deserialize = "column4"), deserialize_with = "text_column", default)]
    pub constant_symbol: Option<String>,
    /// Variable symbol
    #[serde(rename(deserialize = "column5"), deserialize_with = "text_column", default)]
    pub variable_symbol: Option<String>,
    /// Specific symbol
    #[serde(rename(deserialize = "column6"), deserialize_with = "text_column", default)]
    pub specific_symbol: Option<String>,
    /// Identification entered by the account owner
    #[serde(rename(deserialize = "column7"), deserialize_with = "text_column", default)]
    pub user_identification: Option<String>,
    /// Message for the recipient
    #[serde(rename(deserialize = "column16"), deserialize_with = "text_column", default)]
    pub message_for_recipient: Option<String>,
    /// Movement type as described by the bank
    #[serde(rename(deserialize = "column8"), deserialize_with = "text_column", default)]
    pub transaction_type: Option<String>,
    /// Who performed the movement
    #[serde(rename(deserialize = "column9"), deserialize_with = "text_column", default)]
    pub performed_by: Option<String>,
    /// Additional specification (e.g. foreign currency amount)
    #[serde(rename(deserialize = "column18"), deserialize_with = "text_column", default)]
    pub specification: Option<String>,
    /// Comment
    #[serde(rename(deserialize = "column25"), deserialize_with = "text_column", default)]
    pub comment: Option<String>,
    /// Counter-party BIC
    #[serde(rename(deserialize = "column26"), deserialize_with = "text_column", default)]
    pub bic: Option<String>,
    /// Payment instruction id
    #[serde(rename(deserialize = "column17"), deserialize_with = "text_column", default)]
    pub instruction_id: Option<String>,
    /// Payer reference
    #[serde(rename(deserialize = "column27"), deserialize_with = "text_column", default)]
    pub payer_reference: Option<String>,
}

impl Transaction {
    /// Returns `true` for money leaving the account.
    pub fn is_outgoing(&self) -> bool {
        self.amount.is_sign_negative()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;
    use serde_json::json;

    #[test]
    fn test_transaction_columns() {
        let raw = json!({
            "column22": {"value": 1147608196u64, "name": "ID pohybu", "id": 22},
            "column0": {"value": "2012-07-27+0200", "name": "Datum", "id": 0},
            "column1": {"value": -130.0, "name": "Objem", "id": 1},
            "column14": {"value": "CZK", "name": "Měna", "id": 14},
            "column2": null,
            "column5": {"value": "0123", "name": "VS", "id": 5},
            "column17": {"value": 2102392862u64, "name": "ID pokynu", "id": 17},
            "column8": {"value": "Platba kartou", "name": "Typ", "id": 8}
        });

        let txn: Transaction = serde_json::from_value(raw).unwrap();
        assert_eq!(txn.id.as_str(), "1147608196");
        assert_eq!(txn.date, NaiveDate::from_ymd_opt(2012, 7, 27).unwrap());
        assert_eq!(txn.amount, dec!(-130));
        assert_eq!(txn.currency, "CZK");
        assert_eq!(txn.counter_account, None);
        assert_eq!(txn.variable_symbol.as_deref(), Some("0123"));
        assert_eq!(txn.instruction_id.as_deref(), Some("2102392862"));
        assert_eq!(txn.transaction_type.as_deref(), Some("Platba kartou"));
        assert!(txn.is_outgoing());
    }

    #[test]
    fn test_large_numeric_text_column_keeps_digits() {
        let raw = json!({
            "column22": {"value": 1, "name": "ID pohybu", "id": 22},
            "column0": {"value": "2012-07-27+0200", "name": "Datum", "id": 0},
            "column1": {"value": 10, "name": "Objem", "id": 1},
            "column14": {"value": "CZK", "name": "Měna", "id": 14},
            "column17": {"value": u64::MAX, "name": "ID pokynu", "id": 17}
        });

        let txn: Transaction = serde_json::from_value(raw).unwrap();
        assert_eq!(txn.instruction_id.as_deref(), Some("18446744073709551615"));
    }

    #[test]
    fn test_missing_required_column_fails() {
        let raw = json!({
            "column22": {"value": 1, "name": "ID pohybu", "id": 22},
            "column0": {"value": "2012-07-27+0200", "name": "Datum", "id": 0}
        });
        assert!(serde_json::from_value::<Transaction>(raw).is_err());
    }

    #[test]
    fn test_bad_date_fails() {
        let raw = json!({
            "column22": {"value": 1, "name": "ID pohybu", "id": 22},
            "column0": {"value": "27.07.2012", "name": "Datum", "id": 0},
            "column1": {"value": 10, "name": "Objem", "id": 1},
            "column14": {"value": "CZK", "name": "Měna", "id": 14}
        });
        assert!(serde_json::from_value::<Transaction>(raw).is_err());
    }
}
