//! Error envelope for responses built outside the handlers.
//!
//! The body limit and the rate limiter answer with plain-text bodies. Any error response
//! that does not already carry JSON is rebuilt as an `ErrorDto` with the same status and
//! every other header kept, so `retry-after`, `x-ratelimit-*` and `allow` survive.

use axum::{
    http::{
        header::{CONTENT_LENGTH, CONTENT_TYPE},
        StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};

use crate::{model::api::ErrorDto, server::middleware::content_type::is_json};

/// Rewrites a non-JSON 4xx/5xx response into the error envelope.
pub async fn error_envelope(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) || carries_json(&response) {
        return response;
    }

    let (parts, _) = response.into_parts();

    let mut envelope = (status, Json(ErrorDto::new(status, message_for(status)))).into_response();

    for (name, value) in parts.headers.iter() {
        if name != CONTENT_TYPE && name != CONTENT_LENGTH {
            envelope.headers_mut().append(name.clone(), value.clone());
        }
    }

    envelope
}

fn carries_json(response: &Response) -> bool {
    response
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .map(is_json)
        .unwrap_or(false)
}

fn message_for(status: StatusCode) -> &'static str {
    match status {
        StatusCode::TOO_MANY_REQUESTS => "Too many requests, please try again later",
        StatusCode::PAYLOAD_TOO_LARGE => "Request body is too large",
        StatusCode::METHOD_NOT_ALLOWED => "Method not allowed",
        status => status.canonical_reason().unwrap_or("Request failed"),
    }
}
