//! Track service for business logic.
//!
//! Besides the entity checks, track writes verify that the referenced album and genres
//! exist so a bad reference is reported as a field error instead of a foreign key
//! failure.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{album::AlbumRepository, genre::GenreRepository, track::TrackRepository},
    error::AppError,
    model::track::{CreateTrackParam, Track, UpdateTrackParam},
    validation::{FieldError, Location, ValidationErrors},
};

pub struct TrackService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a track, optionally with its genres.
    ///
    /// # Returns
    /// - `Ok(Track)` - Track found
    /// - `Err(AppError::NotFound)` - No track with that id
    pub async fn find_one(&self, id: i32, include_relations: bool) -> Result<Track, AppError> {
        let track_repo = TrackRepository::new(self.db);

        let track = if include_relations {
            track_repo.find_by_id_with_genres(id).await?
        } else {
            track_repo.find_by_id(id).await?
        };

        track.ok_or_else(|| not_found(id))
    }

    pub async fn find_all(&self) -> Result<Vec<Track>, AppError> {
        Ok(TrackRepository::new(self.db).find_all().await?)
    }

    pub async fn find_all_by_owner(&self, user_id: i32) -> Result<Vec<Track>, AppError> {
        Ok(TrackRepository::new(self.db)
            .find_all_by_owner(user_id)
            .await?)
    }

    /// Creates a track with its genre links.
    ///
    /// # Returns
    /// - `Ok(Track)` - The created track with genres loaded
    /// - `Err(AppError::Validation)` - Entity checks failed or a reference does not exist
    pub async fn create(&self, param: CreateTrackParam) -> Result<Track, AppError> {
        param.validate()?;
        self.check_references(param.album_id, &param.genre_ids)
            .await?;

        let track = TrackRepository::new(self.db).create(param).await?;

        tracing::info!("User {} created track {}", track.user_id, track.id);

        self.find_one(track.id, true).await
    }

    /// Applies a partial update to a previously loaded track.
    ///
    /// # Returns
    /// - `Ok(Track)` - The updated track with genres loaded
    /// - `Err(AppError::Validation)` - The merged track fails the checks or a reference
    ///   does not exist
    /// - `Err(AppError::NotFound)` - The track was deleted since it was loaded
    pub async fn update(&self, existing: Track, patch: UpdateTrackParam) -> Result<Track, AppError> {
        patch.validate(&existing)?;
        self.check_references(patch.album_id.flatten(), patch.genre_ids.as_deref().unwrap_or_default())
            .await?;

        let track = TrackRepository::new(self.db)
            .update(existing.id, patch)
            .await?;

        self.find_one(track.id, true).await
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        if TrackRepository::new(self.db).delete(id).await? == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }

    async fn check_references(&self, album_id: Option<i32>, genre_ids: &[i32]) -> Result<(), AppError> {
        let mut errors = ValidationErrors::default();

        if let Some(album_id) = album_id {
            if AlbumRepository::new(self.db)
                .find_by_id(album_id)
                .await?
                .is_none()
            {
                errors.push(FieldError {
                    location: Location::Body,
                    field: "albumId".to_string(),
                    message: format!("Album with id {} does not exist", album_id),
                });
            }
        }

        let existing = GenreRepository::new(self.db)
            .find_existing_ids(genre_ids)
            .await?;
        let missing: Vec<String> = genre_ids
            .iter()
            .filter(|id| !existing.contains(id))
            .map(|id| id.to_string())
            .collect();
        if !missing.is_empty() {
            errors.push(FieldError {
                location: Location::Body,
                field: "genreIds".to_string(),
                message: format!("Unknown genre ids: {}", missing.join(", ")),
            });
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors.into())
        }
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Track with id {} not found", id))
}
