//! Transaction creation endpoint.

use axum::{Json, extract::State, response::Response};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    routing::created,
    transaction::{TransactionFormData, create_transaction},
};

/// Handle a request to record a transaction, responds with the transaction
/// including the person's name and the category's description.
pub async fn create_transaction_endpoint(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<TransactionFormData>, Error>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let transaction = create_transaction(
        &form.description,
        form.amount,
        form.kind,
        form.category_id,
        form.person_id,
        &connection,
    )?;

    Ok(created(
        format_endpoint(endpoints::TRANSACTION, transaction.id),
        transaction,
    ))
}
