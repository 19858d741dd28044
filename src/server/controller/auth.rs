use axum::{
    extract::State,
    http::{HeaderName, HeaderValue},
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        user::{LoginDto, UserDto},
    },
    server::{
        error::{internal::InternalError, AppError},
        extract::JsonBody,
        middleware::session::AuthSession,
        service::auth::AuthService,
        state::AppState,
    },
};

/// Tag for grouping authentication endpoints in OpenAPI documentation
pub static AUTH_TAG: &str = "auth";

/// Response header carrying the XSRF token issued at login and signup.
pub const XSRF_TOKEN_HEADER: HeaderName = HeaderName::from_static("xsrf-token");

/// Builds the `(header, value)` pair handed back alongside a fresh session.
pub fn xsrf_header(token: String) -> Result<[(HeaderName, HeaderValue); 1], AppError> {
    let value = HeaderValue::from_str(&token).map_err(|_| InternalError::InvalidHeaderValue {
        header: XSRF_TOKEN_HEADER.to_string(),
    })?;

    Ok([(XSRF_TOKEN_HEADER, value)])
}

/// Log in with a username or email address.
///
/// Verifies the credentials, cycles the session id and stores the user in the
/// session. The XSRF token for the new session is returned in the `XSRF-TOKEN`
/// response header.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to establish the login on
/// - `payload` - Username (or email) and password
///
/// # Returns
/// - `200 OK` - Logged in, body carries the user
/// - `400 Bad Request` - Missing or malformed credentials
/// - `401 Unauthorized` - Unknown user or wrong password
#[utoipa::path(
    post,
    path = "/v1/login",
    tag = AUTH_TAG,
    request_body = LoginDto,
    responses(
        (status = 200, description = "Logged in", body = UserDto,
            headers(("xsrf-token" = String, description = "XSRF token for the new session"))),
        (status = 400, description = "Invalid request body", body = ErrorDto),
        (status = 401, description = "Invalid username or password", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<LoginDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthService::new(&state.db)
        .login(&payload.username, &payload.password)
        .await?;

    let token = AuthSession::new(&session).login(user.id).await?;

    Ok((xsrf_header(token)?, Envelope::ok(user.into_dto())))
}

/// Log out of the current session.
///
/// Always succeeds; logging out of an anonymous session is a no-op.
///
/// # Returns
/// - `200 OK` - Session ended
#[utoipa::path(
    post,
    path = "/v1/logout",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).end().await?;

    Ok(Envelope::message("Logged out"))
}
