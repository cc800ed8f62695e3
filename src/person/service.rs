//! Business rules for registering and removing people.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};
use uuid::Uuid;

use crate::{
    Error,
    person::{
        Age, Person, PersonId, PersonName,
        db::{delete_person as delete_person_row, insert_person},
    },
};

/// Validate and register a new person.
///
/// The name is trimmed and the person is given a fresh random ID.
///
/// # Errors
/// Returns [Error::EmptyPersonName] if `name` is blank, [Error::InvalidAge]
/// if `age` is not positive, or an SQL error.
pub fn create_person(name: &str, age: i64, connection: &Connection) -> Result<Person, Error> {
    let name = PersonName::new(name)?;
    let age = Age::new(age)?;

    let person = Person {
        id: Uuid::new_v4(),
        name,
        age,
    };

    insert_person(&person, connection)?;
    tracing::info!("Created person {} ({})", person.name, person.id);

    Ok(person)
}

/// Remove a person and all of their transactions.
///
/// Returns `false` without touching the database if no person has the ID
/// `person_id`.
pub fn delete_person(person_id: PersonId, connection: &Connection) -> Result<bool, Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Immediate)?;

    let deleted = delete_person_row(person_id, &transaction)?;
    transaction.commit()?;

    if deleted {
        tracing::info!("Deleted person {person_id} and their transactions");
    }

    Ok(deleted)
}
