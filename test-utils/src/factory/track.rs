//! Track factory for creating test track entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr, EntityTrait};

/// Factory for creating tracks owned by a given user.
///
/// # Example
///
/// ```rust,ignore
/// let track = TrackFactory::new(&db, user.id)
///     .title("So What")
///     .album_id(album.id)
///     .build()
///     .await?;
/// ```
pub struct TrackFactory<'a> {
    db: &'a DatabaseConnection,
    user_id: i32,
    album_id: Option<i32>,
    title: String,
    description: Option<String>,
    duration: Option<i32>,
}

impl<'a> TrackFactory<'a> {
    /// Defaults to title `"Track {id}"`, a 180 second duration and no album.
    pub fn new(db: &'a DatabaseConnection, user_id: i32) -> Self {
        Self {
            db,
            user_id,
            album_id: None,
            title: format!("Track {}", next_id()),
            description: None,
            duration: Some(180),
        }
    }

    pub fn album_id(mut self, album_id: i32) -> Self {
        self.album_id = Some(album_id);
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn duration(mut self, duration: Option<i32>) -> Self {
        self.duration = duration;
        self
    }

    pub async fn build(self) -> Result<entity::track::Model, DbErr> {
        let now = Utc::now();
        entity::track::ActiveModel {
            user_id: ActiveValue::Set(self.user_id),
            album_id: ActiveValue::Set(self.album_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            duration: ActiveValue::Set(self.duration),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

pub async fn create_track(
    db: &DatabaseConnection,
    user_id: i32,
) -> Result<entity::track::Model, DbErr> {
    TrackFactory::new(db, user_id).build().await
}

/// Links an existing track to an existing genre.
pub async fn link_genre(db: &DatabaseConnection, track_id: i32, genre_id: i32) -> Result<(), DbErr> {
    entity::prelude::TrackGenre::insert(entity::track_genre::ActiveModel {
        track_id: ActiveValue::Set(track_id),
        genre_id: ActiveValue::Set(genre_id),
    })
    .exec_without_returning(db)
    .await?;

    Ok(())
}
