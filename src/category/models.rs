//! The category domain model and its wire representations.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::db::UnknownVariant;

/// Whether a category groups income or expenses.
///
/// This is a convention, not a constraint: the store does not check that
/// transactions referencing a category agree with its type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryType {
    /// Groups money coming in.
    Income,
    /// Groups money going out.
    Expense,
}

impl CategoryType {
    /// The lowercase text form stored in the database and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryType::Income => "income",
            CategoryType::Expense => "expense",
        }
    }
}

impl Display for CategoryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CategoryType {
    type Err = UnknownVariant;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "income" => Ok(CategoryType::Income),
            "expense" => Ok(CategoryType::Expense),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl ToSql for CategoryType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for CategoryType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().and_then(|text| {
            text.parse()
                .map_err(|error| FromSqlError::Other(Box::new(error)))
        })
    }
}

/// A spending or income category owned by a single user.
///
/// Names are not deduplicated; two categories with the same name can
/// coexist. The owning `user_id` is stored alongside the row but never
/// serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    /// The store-assigned unique id.
    pub id: String,
    /// The display name.
    pub name: String,
    /// Whether this groups income or expenses.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// The display color, e.g. a hex code like `#ef4444`.
    pub color: String,
}

/// The client-supplied fields of a category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryData {
    /// The display name.
    pub name: String,
    /// Whether this groups income or expenses.
    #[serde(rename = "type")]
    pub category_type: CategoryType,
    /// The display color.
    pub color: String,
}
