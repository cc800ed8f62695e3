//! Person deletion endpoint.

use axum::{
    extract::{Path, State},
    http::StatusCode,
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    db::lock_connection,
    person::{PersonId, delete_person},
};

/// Handle person deletion, responds with 204 on success or 404 if the person
/// does not exist.
///
/// The person's transactions are deleted along with them.
pub async fn delete_person_endpoint(
    State(state): State<AppState>,
    WithRejection(Path(person_id), _): WithRejection<Path<PersonId>, Error>,
) -> Result<StatusCode, Error> {
    let connection = lock_connection(&state.db_connection)?;

    if delete_person(person_id, &connection)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(Error::NotFound)
    }
}

#[cfg(test)]
mod delete_person_endpoint_tests {
    use rust_decimal_macros::dec;
    use uuid::Uuid;

    use crate::{
        category::CategoryPurpose,
        endpoints::{self, format_endpoint},
        test_utils::{
            get_test_app_state, must_create_category, must_create_person,
            must_create_transaction,
        },
        transaction::{Transaction, TransactionKind},
    };

    #[tokio::test]
    async fn delete_person_endpoint_succeeds() {
        let (state, server) = get_test_app_state();
        let person = {
            let connection = state.db_connection.lock().unwrap();
            let person = must_create_person("João", 25, &connection);
            let category = must_create_category("Lazer", CategoryPurpose::Both, &connection);
            must_create_transaction(
                "Cinema",
                dec!(40),
                TransactionKind::Expense,
                &category,
                &person,
                &connection,
            );
            person
        };
        let person_endpoint = format_endpoint(endpoints::PERSON, person.id);

        server
            .delete(&person_endpoint)
            .await
            .assert_status(axum::http::StatusCode::NO_CONTENT);

        server.get(&person_endpoint).await.assert_status_not_found();
        let transactions = server
            .get(endpoints::TRANSACTIONS)
            .await
            .json::<Vec<Transaction>>();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn delete_missing_person_is_not_found() {
        let (_, server) = get_test_app_state();

        server
            .delete(&format_endpoint(endpoints::PERSON, Uuid::new_v4()))
            .await
            .assert_status_not_found();
    }
}
