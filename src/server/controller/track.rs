use axum::{extract::State, response::IntoResponse};

use crate::{
    model::{
        api::{Envelope, ErrorDto},
        track::{CreateTrackDto, TrackDto, TrackListQuery, UpdateTrackDto},
    },
    server::{
        error::AppError,
        extract::{JsonBody, PathParam, QueryParams},
        middleware::auth::{require_owner, CurrentUser},
        model::track::{CreateTrackParam, UpdateTrackParam},
        service::track::TrackService,
        state::AppState,
    },
};

/// Tag for grouping track endpoints in OpenAPI documentation
pub static TRACK_TAG: &str = "track";

/// List tracks, optionally only those of one user.
///
/// # Arguments
/// - `state` - Application state containing the database connection
/// - `query` - Optional `userId` filter
///
/// # Returns
/// - `200 OK` - Matching tracks ordered by id
/// - `400 Bad Request` - Malformed `userId`
#[utoipa::path(
    get,
    path = "/v1/tracks",
    tag = TRACK_TAG,
    params(
        ("userId" = Option<i32>, Query, description = "Only return tracks owned by this user")
    ),
    responses(
        (status = 200, description = "Successfully retrieved tracks", body = [TrackDto]),
        (status = 400, description = "Invalid user id", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn list_tracks(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<TrackListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackService::new(&state.db);

    let tracks = match query.user_id {
        Some(user_id) => service.find_all_by_owner(user_id).await?,
        None => service.find_all().await?,
    };

    Ok(Envelope::ok(
        tracks.into_iter().map(|track| track.into_dto()).collect::<Vec<_>>(),
    ))
}

/// Create a track owned by the caller.
///
/// # Access Control
/// - Requires an authenticated session; the caller becomes the owner
///
/// # Returns
/// - `201 Created` - Track with its genres
/// - `400 Bad Request` - Invalid track data or unknown album/genre
/// - `401 Unauthorized` - Not logged in
#[utoipa::path(
    post,
    path = "/v1/tracks",
    tag = TRACK_TAG,
    request_body = CreateTrackDto,
    responses(
        (status = 201, description = "Successfully created track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_track(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    JsonBody(payload): JsonBody<CreateTrackDto>,
) -> Result<impl IntoResponse, AppError> {
    let track = TrackService::new(&state.db)
        .create(CreateTrackParam::from_dto(caller.id, payload))
        .await?;

    Ok(Envelope::created(track.into_dto()))
}

/// Get a track by id, including its genres.
///
/// # Returns
/// - `200 OK` - Track with genres
/// - `404 Not Found` - No track with that id
#[utoipa::path(
    get,
    path = "/v1/tracks/{id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID")
    ),
    responses(
        (status = 200, description = "Successfully retrieved track", body = TrackDto),
        (status = 400, description = "Invalid track id", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_track(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let track = TrackService::new(&state.db).find_one(id, true).await?;

    Ok(Envelope::ok(track.into_dto()))
}

/// Update a track. `genreIds`, when present, replaces the full genre set.
///
/// # Access Control
/// - Only the track's owner
///
/// # Returns
/// - `200 OK` - Updated track with genres
/// - `400 Bad Request` - Invalid track data or unknown album/genre
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the track
/// - `404 Not Found` - No track with that id
#[utoipa::path(
    patch,
    path = "/v1/tracks/{id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID")
    ),
    request_body = UpdateTrackDto,
    responses(
        (status = 200, description = "Successfully updated track", body = TrackDto),
        (status = 400, description = "Invalid track data", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the track owner", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_track(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    PathParam(id): PathParam<i32>,
    JsonBody(payload): JsonBody<UpdateTrackDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackService::new(&state.db);

    let existing = service.find_one(id, false).await?;
    require_owner(&caller, existing.user_id, "track")?;

    let track = service
        .update(existing, UpdateTrackParam::from_dto(payload))
        .await?;

    Ok(Envelope::ok(track.into_dto()))
}

/// Delete a track.
///
/// # Access Control
/// - Only the track's owner
///
/// # Returns
/// - `200 OK` - Track deleted
/// - `401 Unauthorized` - Not logged in
/// - `403 Forbidden` - Caller does not own the track
/// - `404 Not Found` - No track with that id
#[utoipa::path(
    delete,
    path = "/v1/tracks/{id}",
    tag = TRACK_TAG,
    params(
        ("id" = i32, Path, description = "Track ID")
    ),
    responses(
        (status = 200, description = "Successfully deleted track"),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "Not the track owner", body = ErrorDto),
        (status = 404, description = "Track not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_track(
    State(state): State<AppState>,
    CurrentUser(caller): CurrentUser,
    PathParam(id): PathParam<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = TrackService::new(&state.db);

    let existing = service.find_one(id, false).await?;
    require_owner(&caller, existing.user_id, "track")?;

    service.remove(existing.id).await?;

    Ok(Envelope::message("Track deleted"))
}
