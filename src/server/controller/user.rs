use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        user::{CreateUserDto, SeedQuery, SeedResultDto, UpdateUserDto, UserDto},
    },
    server::{
        controller::auth::xsrf_header,
        error::AppError,
        extract::{JsonBody, PathParam, QueryParams},
        middleware::{
            auth::{require_owner, CurrentUser},
            session::AuthSession,
        },
        model::user::{CreateUserParam, UpdateUserParam, UserLookup},
        service::{seed::SeedService, user::UserService},
        state::AppState,
    },
};

/// Tag for grouping user endpoints in OpenAPI documentation
pub static USER_TAG: &str = "user";

/// List all users.
///
/// # Returns
/// - `200 OK` - Every user ordered by id
/// - `500 Internal Server Error` - Database error
#[utoipa::path(
    get,
    path = "/v1/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Successfully retrieved users", body = [UserDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_users(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let users = UserService::new(&state.db).find_all().await?;

    Ok(Envelope::ok(
        users.into_iter().map(|user| user.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Get the logged-in user.
///
/// # Access Control
/// - Requires an authenticated session
///
/// # Returns
/// - `200 OK` - The caller's user
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    get,
    path = "/v1/users/me",
    tag = USER_TAG,
    responses(
        (status = 200, description = "The authenticated user", body = UserDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn me(CurrentUser(user): CurrentUser) -> Result<impl IntoResponse, AppError> {
    Ok(Envelope::ok(user.into_dto()))
}

/// Sign up a new user.
///
/// Creates the user, then logs them in on the current session. The XSRF token for
/// the new session is returned in the `XSRF-TOKEN` response header.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `session` - Session to log the new user into
/// - `payload` - Username, email and password
///
/// # Returns
/// - `201 Created` - User created and logged in
/// - `400 Bad Request` - Invalid user data
/// - `409 Conflict` - Username or email already taken
/// - `500 Internal Server Error` - Database or hashing error
#[utoipa::path(
    post,
    path = "/v1/users",
    tag = USER_TAG,
    request_body = CreateUserDto,
    responses(
        (status = 201, description = "Successfully created user", body = UserDto,
            headers(("xsrf-token" = String, description = "XSRF token for the new session"))),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_user(
    State(state): State<AppState>,
    session: Session,
    JsonBody(payload): JsonBody<CreateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .create(CreateUserParam::from_dto(payload))
        .await?;

    let token = AuthSession::new(&session).login(user.id).await?;

    Ok((xsrf_header(token)?, Envelope::created(user.into_dto())))
}

/// Get a user by id, including their tracks.
///
/// # Returns
/// - `200 OK` - User with tracks
/// - `400 Bad Request` - Malformed id
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    get,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved user", body = UserDto),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = UserService::new(&state.db)
        .find_one(UserLookup::Id(id), true)
        .await?;

    Ok(Envelope::ok(user.into_dto()))
}

/// Update a user's username, email or password.
///
/// # Access Control
/// - Only the user themselves may update their account
///
/// # Returns
/// - `200 OK` - Updated user
/// - `400 Bad Request` - Invalid user data
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is a different user
/// - `404 Not Found` - No user with that id
/// - `409 Conflict` - Username or email already taken
#[utoipa::path(
    patch,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUserDto,
    responses(
        (status = 200, description = "Successfully updated user", body = UserDto),
        (status = 400, description = "Invalid user data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 409, description = "Username or email already taken", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let existing = service.find_one(UserLookup::Id(id), false).await?;
    require_owner(&caller, existing.id, "user")?;

    let user = service
        .update(existing, UpdateUserParam::from_dto(payload))
        .await?;

    Ok(Envelope::ok(user.into_dto()))
}

/// Delete a user account.
///
/// The account's tracks are removed with it. On success the session is ended, so
/// the client's cookie is anonymous from the next request on.
///
/// # Access Control
/// - Only the user themselves may delete their account
///
/// # Returns
/// - `200 OK` - User deleted and logged out
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller is a different user
/// - `404 Not Found` - No user with that id
#[utoipa::path(
    delete,
    path = "/v1/users/{id}",
    tag = USER_TAG,
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted user"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the account owner", body = ErrorDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_user(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = UserService::new(&state.db);

    let existing = service.find_one(UserLookup::Id(id), false).await?;
    require_owner(&caller, existing.id, "user")?;

    service.remove(existing.id).await?;

    tracing::info!("User {} deleted their account", existing.id);

    Ok(Envelope::message("User deleted"))
}

/// Create `amount` users with random names.
///
/// Development utility. Every seeded user shares the password `password123`.
///
/// # Returns
/// - `200 OK` - Summary of created and total users
/// - `400 Bad Request` - `amount` missing or outside 1..=100
/// - `404 Not Found` - Seeding is disabled in production
#[utoipa::path(
    post,
    path = "/v1/users/seed",
    tag = USER_TAG,
    params(
        ("amount" = u64, Query, description = "Number of users to create (1-100)")
    ),
    responses(
        (status = 200, description = "Users created", body = SeedResultDto),
        (status = 400, description = "Invalid amount", body = ErrorDto),
        (status = 404, description = "Seeding disabled", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn seed_users(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<SeedQuery>,
) -> Result<impl IntoResponse, AppError> {
    if !state.allow_seeding {
        return Err(AppError::NotFound("Route not found".to_string()));
    }

    let result = SeedService::new(&state.db).seed(query.amount).await?;

    Ok(Envelope::ok(SeedResultDto {
        created: result.created,
        total: result.total,
    })
    .with_message(format!(
        "{} users created. There are {} users now in DB.",
        result.created, result.total
    )))
}
