use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        album::{AlbumDto, CreateAlbumDto, UpdateAlbumDto},
        api::{Envelope, ErrorDto},
    },
    server::{
        error::AppError,
        extract::{JsonBody, PathParam},
        middleware::auth::CurrentUser,
        model::album::{CreateAlbumParam, UpdateAlbumParam},
        service::album::AlbumService,
        state::AppState,
    },
};

/// Tag for grouping album endpoints in OpenAPI documentation
pub static ALBUM_TAG: &str = "album";

/// List all albums ordered by id.
#[utoipa::path(
    get,
    path = "/v1/albums",
    tag = ALBUM_TAG,
    responses(
        (status = 200, description = "Successfully retrieved albums", body = [AlbumDto]),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_albums(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let albums = AlbumService::new(&state.db).find_all().await?;

    Ok(Envelope::ok(
        albums.into_iter().map(|album| album.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create an album.
///
/// # Access Control
/// - Requires an authenticated session
///
/// # Returns
/// - `201 Created` - The new album
/// - `400 Bad Request` - Invalid album data
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/v1/albums",
    tag = ALBUM_TAG,
    request_body = CreateAlbumDto,
    responses(
        (status = 201, description = "Successfully created album", body = AlbumDto),
        (status = 400, description = "Invalid album data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_album(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    JsonBody(payload): JsonBody<CreateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let album = AlbumService::new(&state.db)
        .create(CreateAlbumParam::from_dto(payload))
        .await?;

    Ok(Envelope::created(album.into_dto()))
}

/// Get an album by id, including its tracks.
#[utoipa::path(
    get,
    path = "/v1/albums/{id}",
    tag = ALBUM_TAG,
    params(
        ("id" = i32, Path, description = "Album ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved album", body = AlbumDto),
        (status = 400, description = "Invalid album id", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_album(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let album = AlbumService::new(&state.db).find_one(id, true).await?;

    Ok(Envelope::ok(album.into_dto()))
}

/// Update an album's title or description.
///
/// # Returns
/// - `200 OK` - Updated album
/// - `400 Bad Request` - Invalid album data
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No album with that id
#[utoipa::path(
    patch,
    path = "/v1/albums/{id}",
    tag = ALBUM_TAG,
    params(
        ("id" = i32, Path, description = "Album ID")
    ),
    request_body = UpdateAlbumDto,
    responses(
        (status = 200, description = "Successfully updated album", body = AlbumDto),
        (status = 400, description = "Invalid album data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_album(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateAlbumDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = AlbumService::new(&state.db);

    let existing = service.find_one(id, false).await?;
    let album = service
        .update(existing, UpdateAlbumParam::from_dto(payload))
        .await?;

    Ok(Envelope::ok(album.into_dto()))
}

/// Delete an album. Its tracks are kept and lose their album reference.
///
/// # Returns
/// - `200 OK` - Album deleted
/// - `401 Unauthorized` - Not logged in
/// - `404 Not Found` - No album with that id
#[utoipa::path(
    delete,
    path = "/v1/albums/{id}",
    tag = ALBUM_TAG,
    params(
        ("id" = i32, Path, description = "Album ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted album"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 404, description = "Album not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_album(
    State(state): State<AppState>,
    CurrentUser(_caller): CurrentUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = AlbumService::new(&state.db);

    let existing = service.find_one(id, false).await?;
    service.remove(existing.id).await?;

    Ok(Envelope::message("Album deleted"))
}
