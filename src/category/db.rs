//! Database operations for categories.

use rusqlite::{Connection, Row, named_params};

use crate::{
    Error,
    category::{Category, CategoryData},
    db::generate_id,
};

/// Create a category for `owner` and return it with its generated id.
pub fn create_category(
    owner: &str,
    data: CategoryData,
    connection: &Connection,
) -> Result<Category, Error> {
    let id = generate_id();

    connection.execute(
        "INSERT INTO category (id, name, type, color, user_id)
         VALUES (?1, ?2, ?3, ?4, ?5);",
        (&id, &data.name, data.category_type, &data.color, owner),
    )?;

    Ok(Category {
        id,
        name: data.name,
        category_type: data.category_type,
        color: data.color,
    })
}

/// Retrieve all of `owner`'s categories in insertion order.
pub fn get_all_categories(owner: &str, connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare(
            "SELECT id, name, type, color FROM category
             WHERE user_id = :user_id ORDER BY rowid ASC;",
        )?
        .query_map(named_params! { ":user_id": owner }, map_category_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Overwrite every mutable field of `owner`'s category `id` and return the
/// updated row.
///
/// There is no HTTP route for this operation yet; it completes the store
/// contract and keeps it testable.
///
/// # Errors
/// Returns [Error::UpdateMissingCategory] if no category with `id` exists
/// for `owner`.
pub fn update_category(
    owner: &str,
    id: &str,
    data: CategoryData,
    connection: &Connection,
) -> Result<Category, Error> {
    let rows_affected = connection.execute(
        "UPDATE category SET name = ?1, type = ?2, color = ?3
         WHERE id = ?4 AND user_id = ?5;",
        (&data.name, data.category_type, &data.color, id, owner),
    )?;

    if rows_affected == 0 {
        return Err(Error::UpdateMissingCategory);
    }

    Ok(Category {
        id: id.to_owned(),
        name: data.name,
        category_type: data.category_type,
        color: data.color,
    })
}

/// Delete `owner`'s category `id` and return the row as it existed
/// immediately before removal.
///
/// There is no HTTP route for this operation yet; it completes the store
/// contract and keeps it testable.
///
/// # Errors
/// Returns [Error::DeleteMissingCategory] if no category with `id` exists
/// for `owner`.
pub fn delete_category(owner: &str, id: &str, connection: &Connection) -> Result<Category, Error> {
    let category = connection
        .prepare(
            "SELECT id, name, type, color FROM category
             WHERE id = :id AND user_id = :user_id;",
        )?
        .query_row(
            named_params! { ":id": id, ":user_id": owner },
            map_category_row,
        )
        .map_err(|error| match error {
            rusqlite::Error::QueryReturnedNoRows => Error::DeleteMissingCategory,
            error => error.into(),
        })?;

    connection.execute(
        "DELETE FROM category WHERE id = ?1 AND user_id = ?2;",
        (id, owner),
    )?;

    Ok(category)
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            type TEXT NOT NULL,
            color TEXT NOT NULL,
            user_id TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_category_user_id ON category(user_id);",
    )?;

    Ok(())
}

fn map_category_row(row: &Row) -> Result<Category, rusqlite::Error> {
    Ok(Category {
        id: row.get(0)?,
        name: row.get(1)?,
        category_type: row.get(2)?,
        color: row.get(3)?,
    })
}
