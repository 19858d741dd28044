use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
    },
    server::{
        error::AppError,
        extract::{JsonBody, PathParam},
        middleware::auth::CurrentUser,
        model::genre::{CreateGenreParam, UpdateGenreParam},
        service::genre::GenreService,
        state::AppState,
    },
};

/// Tag for grouping genre endpoints in OpenAPI documentation
pub static GENRE_TAG: &str = "genre";

/// List all genres ordered by name.
#[utoipa::path(
    get,
    path = "/v1/genres",
    tag = GENRE_TAG,
    responses(
        (status = 200, description = "Successfully retrieved genres", body = [GenreDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_genres(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let genres = GenreService::new(&state.db).find_all().await?;

    Ok(Envelope::ok(
        genres.into_iter().map(|genre| genre.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a genre.
///
/// # Access Control
/// - Requires an authenticated session
///
/// # Returns
/// - `201 Created` - The new genre
/// - `400 Bad Request` - Invalid genre data
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/v1/genres",
    tag = GENRE_TAG,
    request_body = CreateGenreDto,
    responses(
        (status = 201, description = "Successfully created genre", body = GenreDto),
        (status = 400, description = "Invalid genre data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_genre(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    JsonBody(payload): JsonBody<CreateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let genre = GenreService::new(&state.db)
        .create(CreateGenreParam::from_dto(payload))
        .await?;

    tracing::debug!("User {} created genre {}", caller.id, genre.id);

    Ok(Envelope::created(genre.into_dto()))
}

#[utoipa::path(
    get,
    path = "/v1/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved genre", body = GenreDto),
        (status = 400, description = "Invalid genre id", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_genre(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let genre = GenreService::new(&state.db).find_one(id).await?;

    Ok(Envelope::ok(genre.into_dto()))
}

/// Update a genre's name or description.
///
/// # Returns
/// - `200 OK` - Updated genre
/// - `400 Bad Request` - Invalid genre data
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No genre with that id
#[utoipa::path(
    patch,
    path = "/v1/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    request_body = UpdateGenreDto,
    responses(
        (status = 200, description = "Successfully updated genre", body = GenreDto),
        (status = 400, description = "Invalid genre data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_genre(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateGenreDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = GenreService::new(&state.db);

    let existing = service.find_one(id).await?;
    let genre = service
        .update(existing, UpdateGenreParam::from_dto(payload))
        .await?;

    Ok(Envelope::ok(genre.into_dto()))
}

/// Delete a genre. Links to tracks are removed with it.
///
/// # Returns
/// - `200 OK` - Genre deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No genre with that id
#[utoipa::path(
    delete,
    path = "/v1/genres/{id}",
    tag = GENRE_TAG,
    params(
        ("id" = i32, Path, description = "Genre ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted genre"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Genre not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_genre(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = GenreService::new(&state.db);

    let existing = service.find_one(id).await?;
    service.remove(existing.id).await?;

    Ok(Envelope::message("Genre deleted"))
}
