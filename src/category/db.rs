//! Database operations for categories.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    category::{Category, CategoryDescription, CategoryId},
};

/// Insert `category` into the database.
pub fn insert_category(category: &Category, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO category (id, description, purpose) VALUES (?1, ?2, ?3);",
        (
            category.id,
            category.description.as_ref(),
            category.purpose,
        ),
    )?;

    Ok(())
}

/// Retrieve a single category by ID.
///
/// # Errors
/// Returns [Error::NotFound] if no category has the ID `category_id`.
pub fn get_category(category_id: CategoryId, connection: &Connection) -> Result<Category, Error> {
    connection
        .prepare("SELECT id, description, purpose FROM category WHERE id = :id;")?
        .query_row(&[(":id", &category_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all categories ordered alphabetically by description.
pub fn get_all_categories(connection: &Connection) -> Result<Vec<Category>, Error> {
    connection
        .prepare("SELECT id, description, purpose FROM category ORDER BY description ASC;")?
        .query_map([], map_row)?
        .map(|maybe_category| maybe_category.map_err(|error| error.into()))
        .collect()
}

/// Initialize the category table and indexes.
pub fn create_category_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS category (
            id BLOB PRIMARY KEY NOT NULL,
            description TEXT NOT NULL CHECK (length(description) <= 200),
            purpose INTEGER NOT NULL CHECK (purpose IN (1, 2, 3))
        );

        CREATE INDEX IF NOT EXISTS idx_category_description ON category(description);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Category, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_description: String = row.get(1)?;
    let purpose = row.get(2)?;

    Ok(Category {
        id,
        description: CategoryDescription::new_unchecked(&raw_description),
        purpose,
    })
}
