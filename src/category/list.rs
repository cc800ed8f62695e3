//! Endpoints for reading categories.

use axum::{
    Json,
    extract::{Path, State},
};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    category::{Category, CategoryId, get_all_categories, get_category},
    db::lock_connection,
};

/// Get every category ordered by description.
pub async fn get_categories_endpoint(
    State(state): State<AppState>,
) -> Result<Json<Vec<Category>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_categories(&connection).map(Json)
}

/// Get a single category, responds with 404 if the category does not exist.
pub async fn get_category_endpoint(
    State(state): State<AppState>,
    WithRejection(Path(category_id), _): WithRejection<Path<CategoryId>, Error>,
) -> Result<Json<Category>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_category(category_id, &connection).map(Json)
}
