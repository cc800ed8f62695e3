//! Endpoints for reading people.

use axum::{Json, extract::Path, extract::State};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    db::lock_connection,
    person::{Person, PersonId, get_all_people, get_person},
};

/// Get every person ordered by name.
pub async fn get_people_endpoint(State(state): State<AppState>) -> Result<Json<Vec<Person>>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_all_people(&connection).map(Json)
}

/// Get a single person, responds with 404 if the person does not exist.
pub async fn get_person_endpoint(
    State(state): State<AppState>,
    WithRejection(Path(person_id), _): WithRejection<Path<PersonId>, Error>,
) -> Result<Json<Person>, Error> {
    let connection = lock_connection(&state.db_connection)?;

    get_person(person_id, &connection).map(Json)
}
