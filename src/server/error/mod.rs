//! Error types and HTTP response handling.
//!
//! This module provides the application's error hierarchy and conversion logic for
//! transforming errors into envelope responses. The `AppError` enum is the single error
//! type returned by services and controllers; services classify storage failures into
//! its variants so controllers only ever branch on the classified kind.

pub mod auth;
pub mod config;
pub mod internal;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use sea_orm::{DbErr, SqlErr};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::{
        error::{auth::AuthError, config::ConfigError, internal::InternalError},
        validation::ValidationErrors,
    },
};

/// Top-level application error type.
///
/// Aggregates all possible error types that can occur in the application and provides
/// automatic conversion to HTTP responses. Domain-specific errors like `AuthError` handle
/// their own response mapping, while generic variants provide standard HTTP status codes.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Authentication or authorization error.
    ///
    /// Delegates to `AuthError::into_response()` for 401/403 mapping.
    #[error(transparent)]
    AuthErr(#[from] AuthError),

    /// One or more request fields failed their route rules.
    ///
    /// Results in 400 Bad Request listing every failing field.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// Unclassified database error from SeaORM.
    ///
    /// Constructed only through `From<DbErr>`, which first peels off uniqueness and
    /// not-found failures into `Conflict` and `NotFound`.
    #[error(transparent)]
    DbErr(DbErr),

    /// SQLx driver error, raised by the session store migration.
    #[error(transparent)]
    SqlxErr(#[from] sea_orm::SqlxError),

    /// Session store operation error.
    #[error(transparent)]
    SessionErr(#[from] tower_sessions::session::Error),

    /// Listener or socket error during startup.
    #[error(transparent)]
    IoErr(#[from] std::io::Error),

    /// Unexpected failure inside the codebase itself.
    #[error(transparent)]
    InternalErr(#[from] InternalError),

    /// Resource not found error.
    ///
    /// Results in 404 Not Found with the provided message.
    #[error("{0}")]
    NotFound(String),

    /// Uniqueness constraint violation.
    ///
    /// Results in 409 Conflict. The message never names the violated column.
    #[error("{0}")]
    Conflict(String),

    /// Invalid request error that is not tied to a single field rule.
    ///
    /// Results in 400 Bad Request with the provided message.
    #[error("{0}")]
    BadRequest(String),

    /// Request body declared or carried a content type other than JSON.
    #[error("Unsupported content type '{0}'")]
    UnsupportedMediaType(String),

    /// The path exists but does not answer the request method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Request body exceeded the body size limit.
    #[error("Request body is too large")]
    PayloadTooLarge,
}

/// Classifies SeaORM failures at the service boundary.
///
/// - unique constraint violation → `Conflict`
/// - `RecordNotFound`, `RecordNotUpdated` → `NotFound`
/// - anything else → `DbErr` (500)
impl From<DbErr> for AppError {
    fn from(err: DbErr) -> Self {
        if let Some(SqlErr::UniqueConstraintViolation(_)) = err.sql_err() {
            return AppError::Conflict("Resource already exists".to_string());
        }

        match err {
            DbErr::RecordNotFound(msg) => AppError::NotFound(msg),
            DbErr::RecordNotUpdated => AppError::NotFound("Record not found".to_string()),
            err => AppError::DbErr(err),
        }
    }
}

/// Converts application errors into HTTP responses.
///
/// Every body is an `ErrorDto` envelope. Internal errors are logged with full details
/// inside the current request span (which carries the client IP) and return a generic
/// message to avoid leaking implementation details.
///
/// # Returns
/// - 400 Bad Request - For `Validation` and `BadRequest`
/// - 404 Not Found - For `NotFound`
/// - 405 Method Not Allowed - For `MethodNotAllowed`
/// - 409 Conflict - For `Conflict`
/// - 413 Payload Too Large - For `PayloadTooLarge`
/// - 415 Unsupported Media Type - For `UnsupportedMediaType`
/// - Variable - For `AuthErr`, delegated to `AuthError::into_response()`
/// - 500 Internal Server Error - For all other error types
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthErr(err) => err.into_response(),
            Self::Validation(errors) => {
                tracing::debug!("Request validation failed: {}", errors);
                (
                    StatusCode::BAD_REQUEST,
                    Json(
                        ErrorDto::new(StatusCode::BAD_REQUEST, "Request validation failed")
                            .with_fields(errors.into_dto()),
                    ),
                )
                    .into_response()
            }
            Self::NotFound(msg) => {
                tracing::debug!("Not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    Json(ErrorDto::new(StatusCode::NOT_FOUND, msg)),
                )
                    .into_response()
            }
            Self::Conflict(msg) => {
                tracing::info!("Conflict: {}", msg);
                (
                    StatusCode::CONFLICT,
                    Json(ErrorDto::new(StatusCode::CONFLICT, msg)),
                )
                    .into_response()
            }
            Self::BadRequest(msg) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new(StatusCode::BAD_REQUEST, msg)),
            )
                .into_response(),
            Self::UnsupportedMediaType(content_type) => (
                StatusCode::UNSUPPORTED_MEDIA_TYPE,
                Json(ErrorDto::new(
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    format!("Content type '{}' is not supported, use application/json", content_type),
                )),
            )
                .into_response(),
            Self::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                Json(ErrorDto::new(StatusCode::METHOD_NOT_ALLOWED, "Method not allowed")),
            )
                .into_response(),
            Self::PayloadTooLarge => (
                StatusCode::PAYLOAD_TOO_LARGE,
                Json(ErrorDto::new(
                    StatusCode::PAYLOAD_TOO_LARGE,
                    "Request body is too large",
                )),
            )
                .into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// This struct logs the error message and returns a generic "Internal server error" message
/// to the client to avoid leaking implementation details. Used as a fallback for errors that
/// don't have specific HTTP response mappings.
pub struct InternalServerError<E>(pub E);

/// The generic 500 body, without logging.
pub fn internal_server_error() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorDto::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
        )),
    )
        .into_response()
}

/// Logs the full error message for debugging, then returns the generic 500 body.
impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        internal_server_error()
    }
}
