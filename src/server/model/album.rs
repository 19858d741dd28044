//! Album domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::album::{AlbumDto, CreateAlbumDto, UpdateAlbumDto},
    server::{
        model::{
            check_length, into_result, merged, track::Track, MAX_DESCRIPTION_LENGTH,
            MAX_TITLE_LENGTH,
        },
        validation::ValidationErrors,
    },
};

#[derive(Debug, Clone, PartialEq)]
pub struct Album {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Tracks on the album, only loaded when relations were requested.
    pub tracks: Option<Vec<Track>>,
}

impl Album {
    pub fn from_entity(entity: entity::album::Model) -> Self {
        Self {
            id: entity.id,
            title: entity.title,
            description: entity.description,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            tracks: None,
        }
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    pub fn into_dto(self) -> AlbumDto {
        AlbumDto {
            id: self.id,
            title: self.title,
            description: self.description,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tracks: self
                .tracks
                .map(|tracks| tracks.into_iter().map(Track::into_dto).collect()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAlbumParam {
    pub title: String,
    pub description: Option<String>,
}

impl CreateAlbumParam {
    pub fn from_dto(dto: CreateAlbumDto) -> Self {
        Self {
            title: dto.title.trim().to_string(),
            description: dto.description,
        }
    }

    /// Checks run before an album row is inserted.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_album(&mut errors, &self.title, self.description.as_deref());
        into_result(errors)
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateAlbumParam {
    pub title: Option<String>,
    /// `Some(None)` clears the description.
    pub description: Option<Option<String>>,
}

impl UpdateAlbumParam {
    pub fn from_dto(dto: UpdateAlbumDto) -> Self {
        Self {
            title: dto.title.map(|t| t.trim().to_string()),
            description: dto.description,
        }
    }

    /// Checks run before an album row is updated, against the merged result.
    pub fn validate(&self, existing: &Album) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();
        check_album(
            &mut errors,
            self.title.as_deref().unwrap_or(&existing.title),
            merged(&self.description, &existing.description).as_deref(),
        );
        into_result(errors)
    }
}

fn check_album(errors: &mut ValidationErrors, title: &str, description: Option<&str>) {
    check_length(errors, "title", title, 1, MAX_TITLE_LENGTH);
    if let Some(description) = description {
        check_length(errors, "description", description, 0, MAX_DESCRIPTION_LENGTH);
    }
}
