//! Fixtures shared by the unit and HTTP tests.

#![allow(missing_docs)]

use axum_test::TestServer;
use rusqlite::Connection;
use rust_decimal::Decimal;

use crate::{
    AppState,
    category::{Category, CategoryPurpose, create_category},
    db::initialize,
    person::{Person, create_person},
    routing::build_router,
    transaction::{Transaction, TransactionKind, create_transaction},
};

/// An initialized in-memory database.
pub(crate) fn get_test_connection() -> Connection {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    initialize(&connection).expect("Could not initialize database");
    connection
}

/// App state backed by an in-memory database and a test server sharing it.
pub(crate) fn get_test_app_state() -> (AppState, TestServer) {
    let connection =
        Connection::open_in_memory().expect("Could not open in-memory SQLite database");
    let state = AppState::new(connection).expect("Could not create app state");
    let server =
        TestServer::try_new(build_router(state.clone())).expect("Could not create test server.");

    (state, server)
}

pub(crate) fn get_test_server() -> TestServer {
    get_test_app_state().1
}

pub(crate) fn must_create_person(name: &str, age: i64, connection: &Connection) -> Person {
    create_person(name, age, connection).expect("Could not create test person")
}

pub(crate) fn must_create_category(
    description: &str,
    purpose: CategoryPurpose,
    connection: &Connection,
) -> Category {
    create_category(description, i64::from(purpose), connection)
        .expect("Could not create test category")
}

pub(crate) fn must_create_transaction(
    description: &str,
    amount: Decimal,
    kind: TransactionKind,
    category: &Category,
    person: &Person,
    connection: &Connection,
) -> Transaction {
    create_transaction(
        description,
        amount,
        i64::from(kind),
        category.id,
        person.id,
        connection,
    )
    .expect("Could not create test transaction")
}
