//! Business rules for creating categories.

use rusqlite::Connection;
use uuid::Uuid;

use crate::{
    Error,
    category::{Category, CategoryDescription, CategoryPurpose, db::insert_category},
};

/// Validate and create a new category.
///
/// `purpose` is the raw integer code sent by the client.
///
/// # Errors
/// Returns [Error::EmptyCategoryDescription] if `description` is blank,
/// [Error::InvalidCategoryPurpose] if `purpose` is not 1, 2 or 3, or an SQL
/// error.
pub fn create_category(
    description: &str,
    purpose: i64,
    connection: &Connection,
) -> Result<Category, Error> {
    let description = CategoryDescription::new(description)?;
    let purpose = CategoryPurpose::try_from(purpose)?;

    let category = Category {
        id: Uuid::new_v4(),
        description,
        purpose,
    };

    insert_category(&category, connection)?;
    tracing::info!("Created category {} ({})", category.description, category.id);

    Ok(category)
}
