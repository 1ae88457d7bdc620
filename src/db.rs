//! Database initialization for the application's SQLite schema.

use rusqlite::{Connection, TransactionBehavior, Transaction as SqlTransaction};

use crate::{Error, budget, category, transaction};

/// Create the tables for the domain models if they do not already exist.
///
/// All tables share the same ownership discipline: a TEXT `id` primary key
/// assigned by the store and a TEXT `user_id` column that every query must
/// filter on.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let sql_transaction =
        SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    transaction::create_transaction_table(&sql_transaction)?;
    budget::create_budget_table(&sql_transaction)?;
    category::create_category_table(&sql_transaction)?;

    sql_transaction.commit()?;

    Ok(())
}

/// A stored enum column contained text that does not match any variant.
///
/// Only reachable if the database was written by something other than this
/// application, since the store only ever writes the known variants.
#[derive(Debug, thiserror::Error)]
#[error("unknown value {0:?} for a stored enum column")]
pub struct UnknownVariant(
    /// The unrecognized column text.
    pub String,
);

/// Generate a fresh, globally unique row id.
///
/// Ids are random v4 UUIDs rendered as strings, assigned at creation and
/// immutable thereafter. They are never client-supplied.
pub(crate) fn generate_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod db_tests {
    use std::collections::HashSet;

    use rusqlite::Connection;

    use super::{generate_id, initialize};

    #[test]
    fn initialize_creates_all_tables() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();

        for table in ["transaction", "budget", "category"] {
            let count: i64 = connection
                .query_row(
                    "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = :name",
                    &[(":name", table)],
                    |row| row.get(0),
                )
                .unwrap();
            assert_eq!(count, 1, "missing table {table}");
        }
    }

    #[test]
    fn initialize_is_idempotent() {
        let connection = Connection::open_in_memory().unwrap();

        initialize(&connection).unwrap();
        initialize(&connection).unwrap();
    }

    #[test]
    fn generated_ids_are_unique_and_non_empty() {
        let ids: HashSet<String> = (0..100).map(|_| generate_id()).collect();

        assert_eq!(ids.len(), 100);
        assert!(ids.iter().all(|id| !id.is_empty()));
    }
}
