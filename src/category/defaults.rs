//! Seeds the default category set for first-time users.

use rusqlite::{Connection, TransactionBehavior};

use crate::{
    Error,
    category::{CategoryData, CategoryType, db::create_category},
};

/// The fixed category set inserted the first time a user lists their
/// categories: name, type, and display color.
pub const DEFAULT_CATEGORIES: [(&str, CategoryType, &str); 7] = [
    ("Housing", CategoryType::Expense, "#ef4444"),
    ("Food", CategoryType::Expense, "#f97316"),
    ("Transportation", CategoryType::Expense, "#eab308"),
    ("Utilities", CategoryType::Expense, "#3b82f6"),
    ("Entertainment", CategoryType::Expense, "#8b5cf6"),
    ("Salary", CategoryType::Income, "#22c55e"),
    ("Freelance", CategoryType::Income, "#10b981"),
];

/// Insert the default categories for `owner` if they have none yet.
///
/// The check and the inserts run inside a single IMMEDIATE transaction, so
/// two concurrent first-time listings for the same owner cannot both observe
/// an empty set and both seed. The losing call sees the winner's rows and
/// does nothing.
///
/// # Errors
/// Returns an error if there is an SQL error. Nothing is inserted in that
/// case; the transaction rolls back on drop.
pub fn ensure_default_categories(owner: &str, connection: &mut Connection) -> Result<(), Error> {
    let sql_transaction =
        connection.transaction_with_behavior(TransactionBehavior::Immediate)?;

    let count: i64 = sql_transaction.query_row(
        "SELECT COUNT(*) FROM category WHERE user_id = :user_id;",
        &[(":user_id", owner)],
        |row| row.get(0),
    )?;

    if count == 0 {
        tracing::info!("Seeding default categories for a first-time user.");

        for (name, category_type, color) in DEFAULT_CATEGORIES {
            create_category(
                owner,
                CategoryData {
                    name: name.to_owned(),
                    category_type,
                    color: color.to_owned(),
                },
                &sql_transaction,
            )?;
        }
    }

    sql_transaction.commit()?;

    Ok(())
}

#[cfg(test)]
mod default_category_tests {
    use rusqlite::Connection;

    use crate::{
        category::{CategoryData, CategoryType, db::create_category, db::get_all_categories},
        initialize_db,
    };

    use super::{DEFAULT_CATEGORIES, ensure_default_categories};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize_db(&connection).expect("Could not initialize test database");
        connection
    }

    #[test]
    fn seeds_seven_categories_for_a_new_user() {
        let mut connection = get_test_db_connection();

        ensure_default_categories("user_a", &mut connection).unwrap();

        let categories = get_all_categories("user_a", &connection).unwrap();
        assert_eq!(categories.len(), 7);

        let seeded: Vec<_> = categories
            .iter()
            .map(|category| {
                (
                    category.name.as_str(),
                    category.category_type,
                    category.color.as_str(),
                )
            })
            .collect();
        assert_eq!(seeded, DEFAULT_CATEGORIES);
    }

    #[test]
    fn seeding_twice_does_not_duplicate() {
        let mut connection = get_test_db_connection();

        ensure_default_categories("user_a", &mut connection).unwrap();
        ensure_default_categories("user_a", &mut connection).unwrap();

        assert_eq!(get_all_categories("user_a", &connection).unwrap().len(), 7);
    }

    #[test]
    fn does_not_seed_when_the_user_already_has_a_category() {
        let mut connection = get_test_db_connection();
        let existing = create_category(
            "user_a",
            CategoryData {
                name: "Pets".to_owned(),
                category_type: CategoryType::Expense,
                color: "#14b8a6".to_owned(),
            },
            &connection,
        )
        .unwrap();

        ensure_default_categories("user_a", &mut connection).unwrap();

        assert_eq!(
            get_all_categories("user_a", &connection).unwrap(),
            vec![existing]
        );
    }

    #[test]
    fn seeds_are_scoped_per_user() {
        let mut connection = get_test_db_connection();

        ensure_default_categories("user_a", &mut connection).unwrap();

        assert_eq!(get_all_categories("user_b", &connection).unwrap(), vec![]);
    }
}
