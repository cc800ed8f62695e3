//! Database queries for transactions.
//!
//! Every read joins the person and category tables to fill in the person's
//! name and the category's description.

use rusqlite::{Connection, Row, ToSql, named_params};

use crate::{
    Error,
    category::CategoryId,
    person::PersonId,
    transaction::{Amount, Transaction, TransactionId, TransactionKind},
};

const SELECT_TRANSACTION: &str = "SELECT t.id, t.description, t.amount, t.kind, \
        t.category_id, c.description, t.person_id, p.name \
    FROM \"transaction\" t \
    INNER JOIN person p ON p.id = t.person_id \
    INNER JOIN category c ON c.id = t.category_id";

/// Newest first. `rowid` increases with each insert.
const ORDER_NEWEST_FIRST: &str = "ORDER BY t.rowid DESC";

/// Insert a transaction row.
///
/// The caller must have checked that the person and category exist.
pub(super) fn insert_transaction(
    id: TransactionId,
    description: &str,
    amount: Amount,
    kind: TransactionKind,
    category_id: CategoryId,
    person_id: PersonId,
    connection: &Connection,
) -> Result<(), Error> {
    connection.execute(
        "INSERT INTO \"transaction\" (id, description, amount, kind, category_id, person_id) \
        VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        (id, description, amount, kind, category_id, person_id),
    )?;

    Ok(())
}

/// Retrieve a transaction by its `id`.
///
/// # Errors
/// Returns [Error::NotFound] if no transaction has the ID `id`.
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    connection
        .prepare(&format!("{SELECT_TRANSACTION} WHERE t.id = :id"))?
        .query_row(&[(":id", &id)], map_row)
        .map_err(|error| error.into())
}

/// Retrieve every transaction, newest first.
pub fn get_all_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        &format!("{SELECT_TRANSACTION} {ORDER_NEWEST_FIRST}"),
        &[],
        connection,
    )
}

/// Retrieve the transactions of a single person, newest first.
pub fn get_transactions_by_person(
    person_id: PersonId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        &format!("{SELECT_TRANSACTION} WHERE t.person_id = :id {ORDER_NEWEST_FIRST}"),
        named_params! { ":id": person_id },
        connection,
    )
}

/// Retrieve the transactions labelled with a single category, newest first.
pub fn get_transactions_by_category(
    category_id: CategoryId,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        &format!("{SELECT_TRANSACTION} WHERE t.category_id = :id {ORDER_NEWEST_FIRST}"),
        named_params! { ":id": category_id },
        connection,
    )
}

fn query_transactions(
    query: &str,
    params: &[(&str, &dyn ToSql)],
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    connection
        .prepare(query)?
        .query_map(params, map_row)?
        .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
        .collect()
}

/// Create the transaction table.
///
/// Deleting a person removes their transactions, while a category cannot be
/// deleted while any transaction uses it. Both rules need
/// `PRAGMA foreign_keys = ON`.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute_batch(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
            id BLOB PRIMARY KEY NOT NULL,
            description TEXT NOT NULL CHECK (length(description) <= 500),
            amount TEXT NOT NULL,
            kind INTEGER NOT NULL CHECK (kind IN (1, 2)),
            category_id BLOB NOT NULL,
            person_id BLOB NOT NULL,
            FOREIGN KEY(category_id) REFERENCES category(id) ON UPDATE CASCADE ON DELETE RESTRICT,
            FOREIGN KEY(person_id) REFERENCES person(id) ON UPDATE CASCADE ON DELETE CASCADE
        );

        CREATE INDEX IF NOT EXISTS idx_transaction_person_id ON \"transaction\"(person_id);
        CREATE INDEX IF NOT EXISTS idx_transaction_category_id ON \"transaction\"(category_id);",
    )?;

    Ok(())
}

fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    Ok(Transaction {
        id: row.get(0)?,
        description: row.get(1)?,
        amount: row.get(2)?,
        kind: row.get(3)?,
        category_id: row.get(4)?,
        category_description: row.get(5)?,
        person_id: row.get(6)?,
        person_name: row.get(7)?,
    })
}
