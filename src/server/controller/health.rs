use axum::{http::StatusCode, response::IntoResponse};

use crate::server::error::AppError;

/// Tag for grouping service endpoints in OpenAPI documentation
pub static HEALTH_TAG: &str = "health";

/// Liveness check.
///
/// # Returns
/// - `200 OK` - Always, with an empty body
#[utoipa::path(
    get,
    path = "/v1/health",
    tag = HEALTH_TAG,
    responses(
        (status = 200, description = "Service is up")
    ),
)]
pub async fn health() -> StatusCode {
    StatusCode::OK
}

/// Answers browser requests for `favicon.ico` and `robots.txt` without a body.
pub async fn no_content() -> StatusCode {
    StatusCode::NO_CONTENT
}

/// Fallback for any route that is not registered.
///
/// # Returns
/// - `404 Not Found` - Error envelope
pub async fn route_not_found() -> impl IntoResponse {
    AppError::NotFound("Route not found".to_string())
}


/// Fallback for a registered path called with a method it does not answer.
///
/// # Returns
/// - `405 Method Not Allowed` - Error envelope; axum adds the `Allow` header
pub async fn method_not_allowed() -> impl IntoResponse {
    AppError::MethodNotAllowed
}
