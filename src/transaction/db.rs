//! Database operations for transactions.
//!
//! Every lookup uses the `(id, user_id)` conjunction, never `id` alone.
//! A row owned by another user is indistinguishable from a missing row.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    db::generate_id,
    pagination::Pagination,
    transaction::{Transaction, TransactionData},
};

/// Create a transaction for `owner` and return it with its generated id.
///
/// All supplied fields are persisted verbatim; no defaulting or validation
/// is applied beyond type shape.
pub fn create_transaction(
    owner: &str,
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let id = generate_id();

    connection.execute(
        "INSERT INTO \"transaction\" (id, description, amount, type, category, date, emoji, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8);",
        (
            &id,
            &data.description,
            data.amount,
            data.transaction_type,
            &data.category,
            &data.date,
            &data.emoji,
            owner,
        ),
    )?;

    Ok(Transaction {
        id,
        description: data.description,
        amount: data.amount,
        transaction_type: data.transaction_type,
        category: data.category,
        date: data.date,
        emoji: data.emoji,
    })
}

/// Retrieve a page of `owner`'s transactions in insertion order.
///
/// `pagination.skip` rows are omitted from the front and at most
/// `pagination.limit` rows are returned. Out-of-range values return fewer or
/// zero rows, never an error.
pub fn get_transaction_page(
    owner: &str,
    pagination: Pagination,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(
            "SELECT id, description, amount, type, category, date, emoji
             FROM \"transaction\" WHERE user_id = :user_id
             ORDER BY rowid ASC LIMIT :limit OFFSET :skip;",
        )?
        .query_map(
            named_params! {
                ":user_id": owner,
                ":limit": pagination.limit.max(0),
                ":skip": pagination.skip.max(0),
            },
            map_transaction_row,
        )?
        .map(|maybe_transaction| maybe_transaction.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every mutable field of `owner`'s transaction `id` and return
/// the updated row.
///
/// # Errors
/// Returns [Error::UpdateMissingTransaction] if no transaction with `id`
/// exists for `owner`. No row is mutated in that case.
pub fn update_transaction(
    owner: &str,
    id: &str,
    data: TransactionData,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let rows_affected = connection.execute(
        "UPDATE \"transaction\"
         SET description = ?1, amount = ?2, type = ?3, category = ?4, date = ?5, emoji = ?6
         WHERE id = ?7 AND user_id = ?8;",
        (
            &data.description,
            data.amount,
            data.transaction_type,
            &data.category,
            &data.date,
            &data.emoji,
            id,
            owner,
        ),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingTransaction);
    }

    Ok(Transaction {
        id: id.to_owned(),
        description: data.description,
        amount: data.amount,
        transaction_type: data.transaction_type,
        category: data.category,
        date: data.date,
        emoji: data.emoji,
    })
}

/// Delete `owner`'s transaction `id` and return the row as it existed
/// immediately before removal.
///
/// # Errors
/// Returns [Error::DeleteMissingTransaction] if no transaction with `id`
/// exists for `owner`.
pub fn delete_transaction(
    owner: &str,
    id: &str,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, description, amount, type, category, date, emoji
             FROM \"transaction\" WHERE id = :id AND user_id = :user_id;",
        )?
        .query_row(
            named_params! { ":id": id, ":user_id": owner },
            map_transaction_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::DeleteMissingTransaction,
            error => error.into(),
        })?;

    connection.execute(
        "DELETE FROM \"transaction\" WHERE id = ?1 AND user_id = ?2;",
        (id, owner),
    )?;

    Ok(transaction)
}

/// Initialize the transaction table and indexes.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id TEXT PRIMARY KEY,
            description TEXT NOT NULL,
            amount REAL NOT NULL,
            type TEXT NOT NULL,
            category TEXT NOT NULL,
            date TEXT NOT NULL,
            emoji TEXT,
            user_id TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_user_id ON \"transaction\"(user_id);",
    )?;

    Ok(())
}

fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        transaction_type: row.get(3)?,
        category: row.get(4)?,
        date: row.get(5)?,
        emoji: row.get(6)?,
    })
}

#[cfg(test)]
mod transaction_query_tests {
    use rusqlite::Connection;

    use crate::{
        Error, initialize_db,
        pagination::Pagination,
        transaction::{TransactionData, TransactionType},
    };

    use super::{
        create_transaction, delete_transaction, get_transaction_page, update_transaction,
    };

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).expect("Could not initialize test database");
        connection
    }

    fn coffee() -> TransactionData {
        TransactionData {
            description: "Coffee".to_owned(),
            amount: 4.5,
            transaction_type: TransactionType::Expense,
            category: "Food".to_owned(),
            date: "2024-01-01".to_owned(),
            emoji: Some("☕".to_owned()),
        }
    }

    fn row_count(connection: &Connection) -> i64 {
        connection
            .query_row("SELECT COUNT(*) FROM \"transaction\";", [], |row| {
                row.get(0)
            })
            .unwrap()
    }

    #[test]
    fn create_transaction_succeeds() {
        let connection = get_test_db_connection();

        let transaction = create_transaction("user_a", coffee(), &connection).unwrap();

        assert!(!transaction.id.is_empty());
        assert_eq!(transaction.description, "Coffee");
        assert_eq!(transaction.amount, 4.5);
        assert_eq!(transaction.transaction_type, TransactionType::Expense);
        assert_eq!(transaction.category, "Food");
        assert_eq!(transaction.date, "2024-01-01");
        assert_eq!(transaction.emoji, Some("☕".to_owned()));
    }

    #[test]
    fn create_assigns_unique_ids() {
        let connection = get_test_db_connection();

        let first = create_transaction("user_a", coffee(), &connection).unwrap();
        let second = create_transaction("user_a", coffee(), &connection).unwrap();

        assert_ne!(first.id, second.id);
    }

    #[test]
    fn list_only_returns_owned_transactions() {
        let connection = get_test_db_connection();
        let owned = create_transaction("user_a", coffee(), &connection).unwrap();
        create_transaction("user_b", coffee(), &connection).unwrap();

        let transactions =
            get_transaction_page("user_a", Pagination::default(), &connection).unwrap();

        assert_eq!(transactions, vec![owned]);
    }

    #[test]
    fn list_pages_in_insertion_order() {
        let connection = get_test_db_connection();
        let inserted: Vec<_> = (0..150)
            .map(|n| {
                let data = TransactionData {
                    description: format!("Transaction {n}"),
                    ..coffee()
                };
                create_transaction("user_a", data, &connection).unwrap()
            })
            .collect();

        let page = get_transaction_page(
            "user_a",
            Pagination {
                skip: 100,
                limit: 100,
            },
            &connection,
        )
        .unwrap();

        assert_eq!(page.len(), 50);
        assert_eq!(page, inserted[100..]);
    }

    #[test]
    fn list_with_negative_parameters_never_errors() {
        let connection = get_test_db_connection();
        create_transaction("user_a", coffee(), &connection).unwrap();

        let page = get_transaction_page(
            "user_a",
            Pagination {
                skip: -5,
                limit: -1,
            },
            &connection,
        )
        .unwrap();

        // Negative values are treated as zero: skip nothing, return nothing.
        assert_eq!(page, vec![]);
    }

    #[test]
    fn list_beyond_end_returns_empty() {
        let connection = get_test_db_connection();
        create_transaction("user_a", coffee(), &connection).unwrap();

        let page = get_transaction_page(
            "user_a",
            Pagination {
                skip: 100,
                limit: 100,
            },
            &connection,
        )
        .unwrap();

        assert_eq!(page, vec![]);
    }

    #[test]
    fn update_overwrites_every_field() {
        let connection = get_test_db_connection();
        let transaction = create_transaction("user_a", coffee(), &connection).unwrap();

        let updated = update_transaction(
            "user_a",
            &transaction.id,
            TransactionData {
                description: "Salary".to_owned(),
                amount: 1000.0,
                transaction_type: TransactionType::Income,
                category: "Salary".to_owned(),
                date: "2024-02-01".to_owned(),
                emoji: None,
            },
            &connection,
        )
        .unwrap();

        assert_eq!(updated.id, transaction.id);
        assert_eq!(updated.description, "Salary");
        assert_eq!(updated.amount, 1000.0);
        assert_eq!(updated.transaction_type, TransactionType::Income);
        assert_eq!(updated.emoji, None);

        let listed = get_transaction_page("user_a", Pagination::default(), &connection).unwrap();
        assert_eq!(listed, vec![updated]);
    }

    #[test]
    fn update_foreign_transaction_fails_without_mutating() {
        let connection = get_test_db_connection();
        let transaction = create_transaction("user_a", coffee(), &connection).unwrap();

        let result = update_transaction(
            "user_b",
            &transaction.id,
            TransactionData {
                description: "Hijacked".to_owned(),
                ..coffee()
            },
            &connection,
        );

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
        let listed = get_transaction_page("user_a", Pagination::default(), &connection).unwrap();
        assert_eq!(listed, vec![transaction]);
    }

    #[test]
    fn update_missing_transaction_fails() {
        let connection = get_test_db_connection();

        let result = update_transaction("user_a", "no-such-id", coffee(), &connection);

        assert_eq!(result, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn delete_returns_the_removed_row() {
        let connection = get_test_db_connection();
        let transaction = create_transaction("user_a", coffee(), &connection).unwrap();

        let deleted = delete_transaction("user_a", &transaction.id, &connection).unwrap();

        assert_eq!(deleted, transaction);
        assert_eq!(row_count(&connection), 0);
    }

    #[test]
    fn delete_foreign_transaction_fails_without_mutating() {
        let connection = get_test_db_connection();
        let transaction = create_transaction("user_a", coffee(), &connection).unwrap();

        let result = delete_transaction("user_b", &transaction.id, &connection);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
        assert_eq!(row_count(&connection), 1);
    }

    #[test]
    fn delete_missing_transaction_fails() {
        let connection = get_test_db_connection();

        let result = delete_transaction("user_a", "no-such-id", &connection);

        assert_eq!(result, Err(Error::DeleteMissingTransaction));
    }
}
