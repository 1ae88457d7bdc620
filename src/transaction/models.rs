//! The transaction domain model and its wire representations.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::db::UnknownVariant;

/// Whether a transaction adds to or subtracts from the user's money.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, e.g. a salary payment.
    Income,
    /// Money going out, e.g. a purchase.
    Expense,
}

impl TransactionType {
    /// The lowercase text form stored in the database and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense",
        }
    }
}

impl Display for TransactionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TransactionType {
    type Err = UnknownVariant;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl ToSql for TransactionType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for TransactionType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().and_then(|text| {
            text.parse()
                .map_err(|error| FromSqlError::Other(Box::new(error)))
        })
    }
}

/// A financial transaction owned by a single user.
///
/// The owning `user_id` is deliberately absent: it is stored alongside the
/// row but never serialized to or accepted from the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The store-assigned unique id.
    pub id: String,
    /// What the transaction was for.
    pub description: String,
    /// The transaction amount. The sign is caller-supplied and not validated.
    pub amount: f64,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free-form reference to a category name, not a foreign key.
    pub category: String,
    /// The caller-supplied date string. No calendar validation is performed.
    pub date: String,
    /// An optional short decoration shown by clients.
    pub emoji: Option<String>,
}

/// The client-supplied fields of a transaction.
///
/// Used for both creation and full-replace updates. Keeping this a closed
/// struct means the set of mutable fields is checked at compile time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionData {
    /// What the transaction was for.
    pub description: String,
    /// The transaction amount.
    pub amount: f64,
    /// Whether this is income or an expense.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
    /// A free-form reference to a category name.
    pub category: String,
    /// The caller-supplied date string.
    pub date: String,
    /// An optional short decoration shown by clients.
    #[serde(default)]
    pub emoji: Option<String>,
}

#[cfg(test)]
mod transaction_type_tests {
    use super::TransactionType;

    #[test]
    fn serializes_to_lowercase() {
        assert_eq!(
            serde_json::to_string(&TransactionType::Income).unwrap(),
            "\"income\""
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Expense).unwrap(),
            "\"expense\""
        );
    }

    #[test]
    fn parse_round_trips() {
        for transaction_type in [TransactionType::Income, TransactionType::Expense] {
            let parsed: TransactionType = transaction_type.as_str().parse().unwrap();

            assert_eq!(parsed, transaction_type);
        }
    }

    #[test]
    fn parse_rejects_unknown_text() {
        let result = "transfer".parse::<TransactionType>();

        assert!(result.is_err());
    }
}
