//! Album factory for creating test album entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct AlbumFactory<'a> {
    db: &'a DatabaseConnection,
    title: String,
    description: Option<String>,
}

impl<'a> AlbumFactory<'a> {
    /// Defaults to title `"Album {id}"` and no description.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            title: format!("Album {}", next_id()),
            description: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub async fn build(self) -> Result<entity::album::Model, DbErr> {
        let now = Utc::now();
        entity::album::ActiveModel {
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_album(db: &DatabaseConnection) -> Result<entity::album::Model, DbErr> {
    AlbumFactory::new(db).build().await
}
