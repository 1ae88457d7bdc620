//! The budget domain model and its wire representations.

use std::{fmt::Display, str::FromStr};

use rusqlite::{
    ToSql,
    types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, ValueRef},
};
use serde::{Deserialize, Serialize};

use crate::db::UnknownVariant;

/// How often a budget resets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BudgetPeriod {
    /// The budget resets every week.
    Weekly,
    /// The budget resets every month.
    Monthly,
    /// The budget resets every year.
    Yearly,
}

impl BudgetPeriod {
    /// The lowercase text form stored in the database and sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            BudgetPeriod::Weekly => "weekly",
            BudgetPeriod::Monthly => "monthly",
            BudgetPeriod::Yearly => "yearly",
        }
    }
}

impl Display for BudgetPeriod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BudgetPeriod {
    type Err = UnknownVariant;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        match text {
            "weekly" => Ok(BudgetPeriod::Weekly),
            "monthly" => Ok(BudgetPeriod::Monthly),
            "yearly" => Ok(BudgetPeriod::Yearly),
            other => Err(UnknownVariant(other.to_owned())),
        }
    }
}

impl ToSql for BudgetPeriod {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for BudgetPeriod {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value.as_str().and_then(|text| {
            text.parse()
                .map_err(|error| FromSqlError::Other(Box::new(error)))
        })
    }
}

/// A spending cap owned by a single user.
///
/// The owning `user_id` is stored alongside the row but never serialized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    /// The store-assigned unique id.
    pub id: String,
    /// The category name the budget applies to.
    pub category: String,
    /// The spending cap for the period.
    pub limit: f64,
    /// How often the budget resets.
    pub period: BudgetPeriod,
}

/// The client-supplied fields of a budget.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BudgetData {
    /// The category name the budget applies to.
    pub category: String,
    /// The spending cap for the period.
    pub limit: f64,
    /// How often the budget resets.
    pub period: BudgetPeriod,
}
