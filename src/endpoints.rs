//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/api/pessoas/{person_id}', use [format_endpoint].

use std::fmt::Display;

/// The route to list and create people.
pub const PEOPLE: &str = "/api/pessoas";
/// The route to get or delete a single person.
pub const PERSON: &str = "/api/pessoas/{person_id}";
/// The route to list and create categories.
pub const CATEGORIES: &str = "/api/categorias";
/// The route to get a single category.
pub const CATEGORY: &str = "/api/categorias/{category_id}";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/api/transacoes";
/// The route to get a single transaction.
pub const TRANSACTION: &str = "/api/transacoes/{transaction_id}";
/// The route for revenue, expense and balance totals per person.
pub const TOTALS_BY_PERSON: &str = "/api/consultas/totais-por-pessoa";
/// The route for revenue, expense and balance totals per category.
pub const TOTALS_BY_CATEGORY: &str = "/api/consultas/totais-por-categoria";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace and ends with a
/// right brace. For example, in the endpoint path '/api/pessoas/{person_id}',
/// '{person_id}' is the parameter.
///
/// This function assumes that an endpoint path contains at most a single
/// parameter. If no parameter is found in `endpoint_path`, the function
/// returns the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: impl Display) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_string();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map(|offset| param_start + offset + 1)
        .unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
