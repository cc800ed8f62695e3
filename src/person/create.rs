//! Person creation endpoint.

use axum::{Json, extract::State, response::Response};
use axum_extra::extract::WithRejection;

use crate::{
    AppState, Error,
    db::lock_connection,
    endpoints::{self, format_endpoint},
    person::{PersonFormData, create_person},
    routing::created,
};

/// Handle a request to register a person, responds with the new person and
/// a `Location` header pointing at it.
pub async fn create_person_endpoint(
    State(state): State<AppState>,
    WithRejection(Json(form), _): WithRejection<Json<PersonFormData>, Error>,
) -> Result<Response, Error> {
    let connection = lock_connection(&state.db_connection)?;
    let person = create_person(&form.name, form.age, &connection)?;

    Ok(created(format_endpoint(endpoints::PERSON, person.id), person))
}

#[cfg(test)]
mod create_person_endpoint_tests {
    use axum::http::{StatusCode, header::LOCATION};
    use serde_json::json;

    use crate::{
        endpoints::{self, format_endpoint},
        error::ErrorMessage,
        person::Person,
        test_utils::get_test_server,
    };

    #[tokio::test]
    async fn can_create_person() {
        let server = get_test_server();

        let response = server
            .post(endpoints::PEOPLE)
            .json(&json!({ "nome": " João ", "idade": 25 }))
            .await;

        response.assert_status(StatusCode::CREATED);
        let person = response.json::<Person>();
        assert_eq!(person.name.as_ref(), "João");
        assert_eq!(person.age.years(), 25);
        assert_eq!(
            response.header(LOCATION),
            format_endpoint(endpoints::PERSON, person.id)
        );

        server
            .get(&format_endpoint(endpoints::PERSON, person.id))
            .await
            .assert_json(&person);
    }

    #[tokio::test]
    async fn create_person_fails_on_empty_name() {
        let server = get_test_server();

        let response = server
            .post(endpoints::PEOPLE)
            .json(&json!({ "nome": "   ", "idade": 25 }))
            .await;

        response.assert_status_bad_request();
        response.assert_json(&ErrorMessage {
            message: "the person's name is required and cannot be empty".to_owned(),
        });
    }

    #[tokio::test]
    async fn create_person_fails_on_negative_age() {
        let server = get_test_server();

        server
            .post(endpoints::PEOPLE)
            .json(&json!({ "nome": "João", "idade": -5 }))
            .await
            .assert_status_bad_request();
    }

    #[tokio::test]
    async fn create_person_fails_on_malformed_json() {
        let server = get_test_server();

        let response = server
            .post(endpoints::PEOPLE)
            .content_type("application/json")
            .text("{ not json")
            .await;

        response.assert_status_bad_request();
        assert!(
            response
                .json::<ErrorMessage>()
                .message
                .starts_with("invalid request")
        );
    }
}
