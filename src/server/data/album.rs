//! Album data repository for database operations.
//!
//! Album writes are logged at debug level so lifecycle events can be followed in the
//! request span.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait, QueryOrder,
};

use crate::server::model::album::{Album, CreateAlbumParam, UpdateAlbumParam};

pub struct AlbumRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AlbumRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateAlbumParam) -> Result<Album, DbErr> {
        let now = Utc::now();

        let entity = entity::album::ActiveModel {
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        tracing::debug!("Inserted album {} '{}'", entity.id, entity.title);

        Ok(Album::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Album>, DbErr> {
        let entity = entity::prelude::Album::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Album::from_entity))
    }

    pub async fn find_all(&self) -> Result<Vec<Album>, DbErr> {
        let entities = entity::prelude::Album::find()
            .order_by_asc(entity::album::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Album::from_entity).collect())
    }

    /// Writes only the fields present in `param`, keyed by `id`.
    pub async fn update(&self, id: i32, param: UpdateAlbumParam) -> Result<Album, DbErr> {
        let mut model = entity::album::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(title) = param.title {
            model.title = ActiveValue::Set(title);
        }
        if let Some(description) = param.description {
            model.description = ActiveValue::Set(description);
        }

        let entity = model.update(self.db).await?;

        tracing::debug!("Updated album {}", entity.id);

        Ok(Album::from_entity(entity))
    }

    /// Deletes an album. Its tracks stay and lose their album reference.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Album::delete_by_id(id).exec(self.db).await?;

        if result.rows_affected > 0 {
            tracing::debug!("Removed album {}", id);
        }

        Ok(result.rows_affected)
    }
}
