//! Genre data repository for database operations.

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::genre::{CreateGenreParam, Genre, UpdateGenreParam};

pub struct GenreRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GenreRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, param: CreateGenreParam) -> Result<Genre, DbErr> {
        let entity = entity::genre::ActiveModel {
            name: ActiveValue::Set(param.name),
            description: ActiveValue::Set(param.description),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Genre::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Genre>, DbErr> {
        let entity = entity::prelude::Genre::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Genre::from_entity))
    }

    /// Gets all genres ordered by name.
    pub async fn find_all(&self) -> Result<Vec<Genre>, DbErr> {
        let entities = entity::prelude::Genre::find()
            .order_by_asc(entity::genre::Column::Name)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Genre::from_entity).collect())
    }

    /// Returns which of `ids` exist, in ascending order.
    pub async fn find_existing_ids(&self, ids: &[i32]) -> Result<Vec<i32>, DbErr> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        entity::prelude::Genre::find()
            .select_only()
            .column(entity::genre::Column::Id)
            .filter(entity::genre::Column::Id.is_in(ids.iter().copied()))
            .order_by_asc(entity::genre::Column::Id)
            .into_tuple::<i32>()
            .all(self.db)
            .await
    }

    /// Writes only the fields present in `param`, keyed by `id`.
    pub async fn update(&self, id: i32, param: UpdateGenreParam) -> Result<Genre, DbErr> {
        let mut model = entity::genre::ActiveModel {
            id: ActiveValue::Unchanged(id),
            ..Default::default()
        };

        if let Some(name) = param.name {
            model.name = ActiveValue::Set(name);
        }
        if let Some(description) = param.description {
            model.description = ActiveValue::Set(description);
        }

        // Nothing changed, so there is nothing to write.
        if !model.is_changed() {
            return entity::prelude::Genre::find_by_id(id)
                .one(self.db)
                .await?
                .map(Genre::from_entity)
                .ok_or_else(|| DbErr::RecordNotFound(format!("Genre with id {} not found", id)));
        }

        let entity = model.update(self.db).await?;

        Ok(Genre::from_entity(entity))
    }

    /// Deletes a genre and, through the cascade, its track links.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Genre::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
