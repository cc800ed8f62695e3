//! Middleware for logging requests and responses.

use std::time::Instant;

use axum::{
    Json,
    body::{Body, Bytes, to_bytes},
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::error::ErrorMessage;

/// The number of bytes of a request or response body logged at `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level, along with
/// the response status and how long the request took.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated
/// and the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();
    let (parts, body) = request.into_parts();

    let body_bytes = match read_body(body).await {
        Some(bytes) => bytes,
        None => return error_response(StatusCode::BAD_REQUEST, "could not read request body"),
    };
    log_body(
        &format!("Received request: {} {}", parts.method, parts.uri),
        &String::from_utf8_lossy(&body_bytes),
    );

    let request = Request::from_parts(parts, Body::from(body_bytes));
    let response = next.run(request).await;

    let (parts, body) = response.into_parts();
    let body_bytes = match read_body(body).await {
        Some(bytes) => bytes,
        None => {
            return error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "could not read response body",
            );
        }
    };
    log_body(
        &format!(
            "Sending response: {} in {:?}",
            parts.status,
            start.elapsed()
        ),
        &String::from_utf8_lossy(&body_bytes),
    );

    Response::from_parts(parts, Body::from(body_bytes))
}

/// A response with the same JSON body as the handlers' errors.
fn error_response(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(ErrorMessage {
            message: message.to_owned(),
        }),
    )
        .into_response()
}

async fn read_body(body: Body) -> Option<Bytes> {
    match to_bytes(body, usize::MAX).await {
        Ok(bytes) => Some(bytes),
        Err(error) => {
            tracing::error!("Could not read body: {error}");
            None
        }
    }
}

fn log_body(summary: &str, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!("{summary}\nbody: {}...", truncate(body, LOG_BODY_LENGTH_LIMIT));
        tracing::debug!("Full body: {body:?}");
    } else {
        tracing::info!("{summary}\nbody: {body:?}");
    }
}

/// The longest prefix of `text` that is at most `limit` bytes and ends on a
/// character boundary.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}
