//! Database operations for budgets.
//!
//! The same `(id, user_id)` lookup discipline as transactions applies.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    budget::{Budget, BudgetData},
    db::generate_id,
};

/// Create a budget for `owner` and return it with its generated id.
pub fn create_budget(
    owner: &str,
    data: BudgetData,
    connection: &Connection,
) -> Result<Budget, Error> {
    let id = generate_id();

    connection.execute(
        "INSERT INTO budget (id, category, \"limit\", period, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        (&id, &data.category, data.limit, data.period, owner),
    )?;

    Ok(Budget {
        id,
        category: data.category,
        limit: data.limit,
        period: data.period,
    })
}

/// Retrieve all of `owner`'s budgets in insertion order.
pub fn get_all_budgets(owner: &str, connection: &Connection) -> Result<Vec<Budget>, Error> {
    connection
        .prepare(
            "SELECT id, category, \"limit\", period FROM budget
             WHERE user_id = :user_id ORDER BY rowid ASC;",
        )?
        .query_map(named_params! { ":user_id": owner }, map_budget_row)?
        .map(|maybe_budget| maybe_budget.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every mutable field of `owner`'s budget `id` and return the
/// updated row.
///
/// There is no HTTP route for this operation yet; it completes the store
/// contract and keeps it testable.
///
/// # Errors
/// Returns [Error::UpdateMissingBudget] if no budget with `id` exists for
/// `owner`.
pub fn update_budget(
    owner: &str,
    id: &str,
    data: BudgetData,
    connection: &Connection,
) -> Result<Budget, Error> {
    let rows_affected = connection.execute(
        "UPDATE budget SET category = ?1, \"limit\" = ?2, period = ?3
         WHERE id = ?4 AND user_id = ?5;",
        (&data.category, data.limit, data.period, id, owner),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingBudget);
    }

    Ok(Budget {
        id: id.to_owned(),
        category: data.category,
        limit: data.limit,
        period: data.period,
    })
}

/// Delete `owner`'s budget `id` and return the row as it existed immediately
/// before removal.
///
/// There is no HTTP route for this operation yet; it completes the store
/// contract and keeps it testable.
///
/// # Errors
/// Returns [Error::DeleteMissingBudget] if no budget with `id` exists for
/// `owner`.
pub fn delete_budget(owner: &str, id: &str, connection: &Connection) -> Result<Budget, Error> {
    let budget = connection
        .prepare(
            "SELECT id, category, \"limit\", period FROM budget
             WHERE id = :id AND user_id = :user_id;",
        )?
        .query_row(named_params! { ":id": id, ":user_id": owner }, map_budget_row)
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::DeleteMissingBudget,
            error => error.into(),
        })?;

    connection.execute(
        "DELETE FROM budget WHERE id = ?1 AND user_id = ?2;",
        (id, owner),
    )?;

    Ok(budget)
}

/// Initialize the budget table and indexes.
pub fn create_budget_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS budget (
            id TEXT PRIMARY KEY,
            category TEXT NOT NULL,
            \"limit\" REAL NOT NULL,
            period TEXT NOT NULL,
            user_id TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_budget_user_id ON budget(user_id);",
    )?;

    Ok(())
}

fn map_budget_row(row: &Row) -> Result<Budget, rusqlite::Error> {
    Ok(Budget {
        id: row.get(0)?,
        category: row.get(1)?,
        limit: row.get(2)?,
        period: row.get(3)?,
    })
}
