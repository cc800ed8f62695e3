//! Category creation endpoint.

use axum::{Json, extract::State, response::Response};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    category::{CategoryFormData, create_category},
    db::lock_connection,
    endpoints::{self, format_endpoint},
    routing::created,
};

/// Handle a request to create a category, responds with the new category and
/// a `Location` header pointing at it.
pub async fn create_category_endpoint(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<CategoryFormData>, Error>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let category = create_category(&form.description, form.purpose, &connection)?;

    Ok(created(
        format_endpoint(endpoints::CATEGORY, category.id),
        category,
    ))
}
