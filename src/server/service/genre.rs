use sea_orm::DatabaseConnection;

use crate::server::{
    data::genre::GenreRepository,
    error::AppError,
    model::genre::{CreateGenreParam, Genre, UpdateGenreParam},
};

pub struct GenreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn find_one(&self, id: i32) -> Result<Genre, AppError> {
        GenreRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn find_all(&self) -> Result<Vec<Genre>, AppError> {
        Ok(GenreRepository::new(self.db).find_all().await?)
    }

    pub async fn create(&self, param: CreateGenreParam) -> Result<Genre, AppError> {
        param.validate()?;
        Ok(GenreRepository::new(self.db).create(param).await?)
    }

    pub async fn update(&self, existing: Genre, patch: UpdateGenreParam) -> Result<Genre, AppError> {
        patch.validate(&existing)?;
        Ok(GenreRepository::new(self.db).update(existing.id, patch).await?)
    }

    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        if GenreRepository::new(self.db).delete(id).await? == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}

fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Genre with id {} not found", id))
}
