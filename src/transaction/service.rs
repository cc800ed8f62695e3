//! Business rules for recording transactions.

use rusqlite::Connection;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    Error,
    category::{CategoryId, get_category},
    person::{PersonId, get_person},
    transaction::{
        Amount, Transaction, TransactionKind,
        db::{get_transaction, insert_transaction},
    },
};

/// Validate and record a new transaction.
///
/// Checks run in order and stop at the first failure: the fields themselves,
/// then that the person and category exist, then the domain rules.
///
/// # Errors
/// - [Error::EmptyTransactionDescription] if `description` is blank.
/// - [Error::NonPositiveAmount] if `amount` is not greater than zero.
/// - [Error::AmountTooLarge] if `amount` is greater than
///   [MAX_AMOUNT](crate::transaction::MAX_AMOUNT).
/// - [Error::InvalidTransactionKind] if `kind` is not 1 or 2.
/// - [Error::PersonNotFound] or [Error::CategoryNotFound] if an ID does not
///   resolve.
/// - [Error::IncompatibleCategory] if the category's purpose does not allow
///   `kind`.
/// - [Error::MinorWithRevenue] if the person is under 18 and `kind` is
///   revenue.
pub fn create_transaction(
    description: &str,
    amount: Decimal,
    kind: i64,
    category_id: CategoryId,
    person_id: PersonId,
    connection: &Connection,
) -> Result<Transaction, Error> {
    let description = description.trim();
    if description.is_empty() {
        return Err(Error::EmptyTransactionDescription);
    }
    let amount = Amount::new(amount)?;
    let kind = TransactionKind::try_from(kind)?;

    let person = get_person(person_id, connection).map_err(|error| match error {
        Error::NotFound => Error::PersonNotFound(person_id),
        error => error,
    })?;
    let category = get_category(category_id, connection).map_err(|error| match error {
        Error::NotFound => Error::CategoryNotFound(category_id),
        error => error,
    })?;

    if !category.purpose.accepts(kind) {
        return Err(Error::IncompatibleCategory {
            description: category.description.to_string(),
            purpose: category.purpose,
            kind,
        });
    }

    if kind == TransactionKind::Revenue && person.age.is_minor() {
        return Err(Error::MinorWithRevenue {
            name: person.name.to_string(),
            age: person.age.years(),
        });
    }

    let id = Uuid::new_v4();
    insert_transaction(
        id,
        description,
        amount,
        kind,
        category.id,
        person.id,
        connection,
    )?;
    tracing::info!(
        "Recorded {kind} transaction {id} of {amount} for {} in '{}'",
        person.name,
        category.description
    );

    get_transaction(id, connection)
}
