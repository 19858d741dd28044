use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user is attached to the session.
    ///
    /// Either no session cookie was sent, the session expired, or the session
    /// references a user that has since been deleted. Results in 401 Unauthorized.
    #[error("Request requires an authenticated session")]
    NotLoggedIn,

    /// Login attempted with an unknown username or a wrong password.
    ///
    /// Both cases share one variant so responses do not reveal which usernames exist.
    /// Results in 401 Unauthorized.
    #[error("Login failed for '{0}'")]
    InvalidCredentials(String),

    /// Authenticated user tried to mutate a resource owned by someone else.
    ///
    /// Results in 403 Forbidden. Nothing has been applied when this is returned.
    #[error("User {user_id} attempted to modify {resource} owned by user {owner_id}")]
    NotOwner {
        user_id: i32,
        owner_id: i32,
        resource: String,
    },
}

/// Converts authentication errors into HTTP responses.
///
/// All errors are logged at debug level for diagnostics while keeping client-facing messages
/// generic to avoid information leakage.
///
/// # Returns
/// - 401 Unauthorized - For `NotLoggedIn` and `InvalidCredentials`
/// - 403 Forbidden - For `NotOwner`
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("{}", self);

        let (status, message) = match self {
            Self::NotLoggedIn => (StatusCode::UNAUTHORIZED, "You must be logged in"),
            Self::InvalidCredentials(_) => {
                (StatusCode::UNAUTHORIZED, "Invalid username or password")
            }
            Self::NotOwner { .. } => (
                StatusCode::FORBIDDEN,
                "You do not have permission to modify this resource",
            ),
        };

        (status, Json(ErrorDto::new(status, message))).into_response()
    }
}
