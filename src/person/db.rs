//! Database operations for people.

use rusqlite::{Connection, Row};

use crate::{
    Error,
    person::{Age, Person, PersonId, PersonName},
};

/// Insert `person` into the database.
pub fn insert_person(person: &Person, connection: &Connection) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO person (id, name, age) VALUES (?1, ?2, ?3);",
        (person.id, person.name.as_ref(), person.age.years()),
    )?;

    Ok(())
}

/// Retrieve a single person by ID.
///
/// # Errors
/// Returns [Error::NotFound] if no person has the ID `person_id`.
pub fn get_person(person_id: PersonId, connection: &Connection) -> Result<Person, Error> {
    connection
        .prepare("SELECT id, name, age FROM person WHERE id = :id;")?
        .query_row(&[(":id", &person_id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve all people ordered alphabetically by name.
pub fn get_all_people(connection: &Connection) -> Result<Vec<Person>, Error> {
    connection
        .prepare("SELECT id, name, age FROM person ORDER BY name ASC;")?
        .query_map([], map_row)?
        .map(|maybe_person| maybe_person.map_err(|error| error.into()))
        .collect()
}

/// Delete a person by ID, returning whether a row was removed.
///
/// The person's transactions are removed by the `ON DELETE CASCADE` rule on
/// the transaction table.
pub fn delete_person(person_id: PersonId, connection: &Connection) -> Result<bool, Error> {
    let rows_affected = connection.execute("DELETE FROM person WHERE id = ?1", [person_id])?;

    Ok(rows_affected != 0)
}

/// Initialize the person table and indexes.
pub fn create_person_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS person (
            id BLOB PRIMARY KEY NOT NULL,
            name TEXT NOT NULL CHECK (length(name) <= 200),
            age INTEGER NOT NULL CHECK (age > 0)
        );

        CREATE INDEX IF NOT EXISTS idx_person_name ON person(name);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Person, rusqlite::Error> {
    let id = row.get(0)?;
    let raw_name: String = row.get(1)?;
    let age = row.get(2)?;

    Ok(Person {
        id,
        name: PersonName::new_unchecked(&raw_name),
        age: Age::new_unchecked(age),
    })
}

#[cfg(test)]
mod person_query_tests {
    use rusqlite::Connection;
    use uuid::Uuid;

    use crate::{
        Error,
        db::initialize,
        person::{Age, Person, PersonName},
    };

    use super::{delete_person, get_all_people, get_person, insert_person};

    fn get_test_db_connection() -> Connection {
        let connection = Connection::open_in_memory().unwrap();
        initialize(&connection).expect("Could not initialize database");
        connection
    }

    fn must_insert_person(name: &str, age: i64, connection: &Connection) -> Person {
        let person = Person {
            id: Uuid::new_v4(),
            name: PersonName::new_unchecked(name),
            age: Age::new_unchecked(age),
        };
        insert_person(&person, connection).expect("Could not insert test person");
        person
    }

    #[test]
    fn get_person_succeeds() {
        let connection = get_test_db_connection();
        let inserted_person = must_insert_person("Foo", 30, &connection);

        let selected_person = get_person(inserted_person.id, &connection);

        assert_eq!(Ok(inserted_person), selected_person);
    }

    #[test]
    fn get_person_with_invalid_id_returns_not_found() {
        let connection = get_test_db_connection();
        must_insert_person("Foo", 30, &connection);

        let selected_person = get_person(Uuid::new_v4(), &connection);

        assert_eq!(selected_person, Err(Error::NotFound));
    }

    #[test]
    fn get_all_people_orders_by_name() {
        let connection = get_test_db_connection();
        let zoe = must_insert_person("Zoe", 40, &connection);
        let ana = must_insert_person("Ana", 20, &connection);
        let maria = must_insert_person("Maria", 17, &connection);

        let people = get_all_people(&connection).expect("Could not get all people");

        assert_eq!(people, vec![ana, maria, zoe]);
    }

    #[test]
    fn delete_person_succeeds() {
        let connection = get_test_db_connection();
        let person = must_insert_person("ToDelete", 50, &connection);

        let deleted = delete_person(person.id, &connection);

        assert_eq!(deleted, Ok(true));
        assert_eq!(get_person(person.id, &connection), Err(Error::NotFound));
    }

    #[test]
    fn delete_person_with_invalid_id_returns_false() {
        let connection = get_test_db_connection();
        let person = must_insert_person("Keep", 50, &connection);

        let deleted = delete_person(Uuid::new_v4(), &connection);

        assert_eq!(deleted, Ok(false));
        assert_eq!(get_person(person.id, &connection), Ok(person));
    }
}
