//! Totals HTTP handlers.

use axum::{Json, extract::State};

use crate::{
    AppState, Error,
    db::lock_connection,
    totals::{TotalsByCategory, TotalsByPerson, get_totals_by_category, get_totals_by_person},
};

/// Get revenue, expense and balance totals for every person.
pub async fn get_totals_by_person_endpoint(
    State(state): State<AppState>,
) -> Result<Json<TotalsByPerson>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_totals_by_person(&connection).map(Json)
}

/// Get revenue, expense and balance totals for every category.
pub async fn get_totals_by_category_endpoint(
    State(state): State<AppState>,
) -> Result<Json<TotalsByCategory>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_totals_by_category(&connection).map(Json)
}
