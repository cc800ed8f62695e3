//! Application router configuration.

use axum::{
    Json, Router,
    http::{StatusCode, header::LOCATION},
    response::{IntoResponse, Response},
    routing::get,
};
use serde::Serialize;

use crate::{
    AppState,
    category::{create_category_endpoint, get_categories_endpoint, get_category_endpoint},
    endpoints,
    person::{
        create_person_endpoint, delete_person_endpoint, get_people_endpoint, get_person_endpoint,
    },
    totals::{get_totals_by_category_endpoint, get_totals_by_person_endpoint},
    transaction::{
        create_transaction_endpoint, get_transaction_endpoint, get_transactions_endpoint,
    },
};

/// Return a router with all the app's routes.
///
/// Categories have no delete route, so `DELETE /api/categorias/{id}` is
/// answered with 405 Method Not Allowed.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            endpoints::PEOPLE,
            get(get_people_endpoint).post(create_person_endpoint),
        )
        .route(
            endpoints::PERSON,
            get(get_person_endpoint).delete(delete_person_endpoint),
        )
        .route(
            endpoints::CATEGORIES,
            get(get_categories_endpoint).post(create_category_endpoint),
        )
        .route(endpoints::CATEGORY, get(get_category_endpoint))
        .route(
            endpoints::TRANSACTIONS,
            get(get_transactions_endpoint).post(create_transaction_endpoint),
        )
        .route(endpoints::TRANSACTION, get(get_transaction_endpoint))
        .route(
            endpoints::TOTALS_BY_PERSON,
            get(get_totals_by_person_endpoint),
        )
        .route(
            endpoints::TOTALS_BY_CATEGORY,
            get(get_totals_by_category_endpoint),
        )
        .with_state(state)
}

/// A 201 Created response with `body` as JSON and a `Location` header.
pub(crate) fn created<T: Serialize>(location: String, body: T) -> Response {
    (StatusCode::CREATED, [(LOCATION, location)], Json(body)).into_response()
}
