//! Endpoints for reading transactions.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    db::lock_connection,
    transaction::{
        Transaction, TransactionFilter, TransactionId, get_all_transactions, get_transaction,
        get_transactions_by_category, get_transactions_by_person,
    },
};

/// Get transactions newest first.
///
/// The list can be narrowed with the `pessoaId` and `categoriaId` query
/// parameters.
pub async fn get_transactions_endpoint(
    State(state): State<AppState>,
    WithRejection(Query(filter), _): WithRejection<Query<TransactionFilter>, Error>,
) -> Result<Json<Vec<Transaction>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    let transactions = match (filter.person_id, filter.category_id) {
        (Some(person_id), Some(category_id)) => {
            get_transactions_by_person(person_id, &connection)?
                .into_iter()
                .filter(|transaction| transaction.category_id == category_id)
                .collect()
        }
        (Some(person_id), None) => get_transactions_by_person(person_id, &connection)?,
        (None, Some(category_id)) => get_transactions_by_category(category_id, &connection)?,
        (None, None) => get_all_transactions(&connection)?,
    };

    Ok(Json(transactions))
}

/// Get a single transaction, responds with 404 if it does not exist.
pub async fn get_transaction_endpoint(
    State(state): State<AppState>,
    WithRejection(Path(transaction_id), _): WithRejection<Path<TransactionId>, Error>,
) -> Result<Json<Transaction>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_transaction(transaction_id, &connection).map(Json)
}
