//! Track domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::track::{CreateTrackDto, TrackDto, UpdateTrackDto},
    server::{
        model::{
            check_length, genre::Genre, into_result, merged, MAX_DESCRIPTION_LENGTH,
            MAX_TITLE_LENGTH,
        },
        validation::{FieldError, Location, ValidationErrors},
    },
};

/// Longest accepted track, in seconds.
pub const MAX_DURATION_SECS: i32 = 86_400;

#[derive(Debug, Clone, PartialEq)]
pub struct Track {
    pub id: i32,
    /// Owner of the track.
    pub user_id: i32,
    pub album_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Linked genres, only loaded when relations were requested.
    pub genres: Option<Vec<Genre>>,
}

impl Track {
    pub fn from_entity(entity: entity::track::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            album_id: entity.album_id,
            title: entity.title,
            description: entity.description,
            duration: entity.duration,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            genres: None,
        }
    }

    pub fn with_genres(mut self, genres: Vec<Genre>) -> Self {
        self.genres = Some(genres);
        self
    }

    pub fn into_dto(self) -> TrackDto {
        TrackDto {
            id: self.id,
            user_id: self.user_id,
            album_id: self.album_id,
            title: self.title,
            description: self.description,
            duration: self.duration,
            created_at: self.created_at,
            updated_at: self.updated_at,
            genres: self
                .genres
                .map(|genres| genres.into_iter().map(Genre::into_dto).collect()),
        }
    }
}

/// Parameters for creating a track owned by `user_id`.
#[derive(Debug, Clone)]
pub struct CreateTrackParam {
    pub user_id: i32,
    pub title: String,
    pub description: Option<String>,
    pub duration: Option<i32>,
    pub album_id: Option<i32>,
    /// Distinct genre ids to link, sorted ascending.
    pub genre_ids: Vec<i32>,
}

impl CreateTrackParam {
    pub fn from_dto(user_id: i32, dto: CreateTrackDto) -> Self {
        Self {
            user_id,
            title: dto.title.trim().to_string(),
            description: dto.description,
            duration: dto.duration,
            album_id: dto.album_id,
            genre_ids: distinct(dto.genre_ids.unwrap_or_default()),
        }
    }

    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_track(
            &mut errors,
            &self.title,
            self.description.as_deref(),
            self.duration,
        );
        into_result(errors)
    }
}

/// Partial track update. `None` fields are left unchanged, `Some(None)` clears a
/// nullable column.
#[derive(Debug, Clone, Default)]
pub struct UpdateTrackParam {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub duration: Option<Option<i32>>,
    pub album_id: Option<Option<i32>>,
    /// Replaces the full genre set when present.
    pub genre_ids: Option<Vec<i32>>,
}

impl UpdateTrackParam {
    pub fn from_dto(dto: UpdateTrackDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
            duration: dto.duration,
            album_id: dto.album_id,
            genre_ids: dto.genre_ids.map(distinct),
        }
    }

    pub fn validate(&self, existing: &Track) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_track(
            &mut errors,
            self.title.as_deref().unwrap_or(&existing.title),
            merged(&self.description, &existing.description).as_deref(),
            *merged(&self.duration, &existing.duration),
        );
        into_result(errors)
    }
}

fn check_track(
    errors: &mut ValidationErrors,
    title: &str,
    description: Option<&str>,
    duration: Option<i32>,
) {
    check_length(errors, "title", title, 1, MAX_TITLE_LENGTH);
    if let Some(description) = description {
        check_length(errors, "description", description, 0, MAX_DESCRIPTION_LENGTH);
    }
    if let Some(duration) = duration {
        if !(0..=MAX_DURATION_SECS).contains(&duration) {
            errors.push(FieldError {
                location: Location::Body,
                field: "duration".to_string(),
                message: format!(
                    "duration must be an integer between 0 and {}",
                    MAX_DURATION_SECS
                ),
            });
        }
    }
}

fn distinct(mut ids: Vec<i32>) -> Vec<i32> {
    ids.sort_unstable();
    ids.dedup();
    ids
}
