//! OpenAPI document for the HTTP API, served at `/v1/openapi.json`.

use axum::Json;
use utoipa::OpenApi;

use crate::{
    model::{
        album::{AlbumDto, CreateAlbumDto, UpdateAlbumDto},
        api::{ErrorDto, FieldErrorDto},
        genre::{CreateGenreDto, GenreDto, UpdateGenreDto},
        track::{CreateTrackDto, TrackDto, UpdateTrackDto},
        user::{CreateUserDto, LoginDto, SeedResultDto, UpdateUserDto, UserDto},
    },
    server::controller::{album, auth, genre, health, track, user},
};

#[derive(OpenApi)]
#[openapi(
    info(title = "Tracklist API", description = "Users, tracks, genres and albums"),
    paths(
        health::health,
        auth::login,
        auth::logout,
        user::list_users,
        user::me,
        user::create_user,
        user::get_user,
        user::update_user,
        user::delete_user,
        user::seed_users,
        track::list_tracks,
        track::create_track,
        track::get_track,
        track::update_track,
        track::delete_track,
        genre::list_genres,
        genre::create_genre,
        genre::get_genre,
        genre::update_genre,
        genre::delete_genre,
        album::list_albums,
        album::create_album,
        album::get_album,
        album::update_album,
        album::delete_album,
    ),
    components(schemas(
        ErrorDto,
        FieldErrorDto,
        UserDto,
        CreateUserDto,
        UpdateUserDto,
        LoginDto,
        SeedResultDto,
        TrackDto,
        CreateTrackDto,
        UpdateTrackDto,
        GenreDto,
        CreateGenreDto,
        UpdateGenreDto,
        AlbumDto,
        CreateAlbumDto,
        UpdateAlbumDto,
    )),
    tags(
        (name = "health", description = "Service status and browser housekeeping"),
        (name = "auth", description = "Session login and logout"),
        (name = "user", description = "Accounts"),
        (name = "track", description = "Tracks owned by users"),
        (name = "genre", description = "Genres tracks can be tagged with"),
        (name = "album", description = "Albums grouping tracks"),
    )
)]
pub struct ApiDoc;

pub async fn openapi() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn documents_every_route() {
        let doc = ApiDoc::openapi();

        for path in [
            "/v1/health",
            "/v1/login",
            "/v1/logout",
            "/v1/users",
            "/v1/users/me",
            "/v1/users/{id}",
            "/v1/users/seed",
            "/v1/tracks",
            "/v1/tracks/{id}",
            "/v1/genres",
            "/v1/genres/{id}",
            "/v1/albums",
            "/v1/albums/{id}",
        ] {
            assert!(doc.paths.paths.contains_key(path), "missing {}", path);
        }
    }
}
