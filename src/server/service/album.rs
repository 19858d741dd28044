//! Album service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{album::AlbumRepository, track::TrackRepository},
    error::AppError,
    model::album::{Album, CreateAlbumParam, UpdateAlbumParam},
};

pub struct AlbumService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlbumService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves an album, optionally with its tracks.
    ///
    /// # Returns
    /// - `Ok(Album)` - Album found
    /// - `Err(AppError::NotFound)` - No album with that id
    pub async fn find_one(&self, id: i32, include_relations: bool) -> Result<Album, AppError> {
        let Some(album) = AlbumRepository::new(self.db).find_by_id(id).await? else {
            return Err(not_found(id));
        };

        if !include_relations {
            return Ok(album);
        }

        let tracks = TrackRepository::new(self.db).find_all_by_album(id).await?;

        Ok(album.with_tracks(tracks))
    }

    pub async fn find_all(&self) -> Result<Vec<Album>, AppError> {
        Ok(AlbumRepository::new(self.db).find_all().await?)
    }

    /// Validates then inserts an album.
    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, AppError> {
        param.validate()?;
        Ok(AlbumRepository::new(self.db).create(param).await?)
    }

    /// Validates the merged album then writes the changed columns.
    pub async fn update(&self, existing: Album, patch: UpdateAlbumParam) -> Result<Album, AppError> {
        patch.validate(&existing)?;
        Ok(AlbumRepository::new(self.db).update(existing.id, patch).await?)
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        if AlbumRepository::new(self.db).delete(id).await? == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Album with id {} not found", id))
}
