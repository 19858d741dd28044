//! Track data repository for database operations.
//!
//! Tracks are linked to genres through the `track_genre` join table. Writes that touch
//! both the track row and its genre links run inside a single transaction.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::{
    genre::Genre,
    track::{CreateTrackParam, Track, UpdateTrackParam},
};

pub struct TrackRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> TrackRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a track and its genre links in one transaction.
    ///
    /// # Returns
    /// - `Ok(Track)` - The created track, without genres loaded
    /// - `Err(DbErr)` - Insert failed; neither the track nor any link is kept
    pub async fn create(&self, param: CreateTrackParam) -> Result<Track, DbErr> {
        let now = Utc::now();
        let txn = self.db.begin().await?;

        let entity = entity::track::ActiveModel {
            user_id: ActiveValue::Set(param.user_id),
            album_id: ActiveValue::Set(param.album_id),
            title: ActiveValue::Set(param.title),
            description: ActiveValue::Set(param.description),
            duration: ActiveValue::Set(param.duration),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(&txn)
        .await?;

        link_genres(&txn, entity.id, &param.genre_ids).await?;

        txn.commit().await?;

        Ok(Track::from_entity(entity))
    }

    pub async fn find_by_id(&self, id: i32) -> Result<Option<Track>, DbErr> {
        let entity = entity::prelude::Track::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Track::from_entity))
    }

    /// Finds a track together with its genres.
    pub async fn find_by_id_with_genres(&self, id: i32) -> Result<Option<Track>, DbErr> {
        let result = entity::prelude::Track::find_by_id(id)
            .find_with_related(entity::prelude::Genre)
            .all(self.db)
            .await?;

        Ok(result.into_iter().next().map(|(track, genres)| {
            Track::from_entity(track)
                .with_genres(genres.into_iter().map(Genre::from_entity).collect())
        }))
    }

    /// Gets all tracks ordered by id.
    pub async fn find_all(&self) -> Result<Vec<Track>, DbErr> {
        let entities = entity::prelude::Track::find()
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Track::from_entity).collect())
    }

    /// Gets every track owned by `user_id`, ordered by id.
    pub async fn find_all_by_owner(&self, user_id: i32) -> Result<Vec<Track>, DbErr> {
        let entities = entity::prelude::Track::find()
            .filter(entity::track::Column::UserId.eq(user_id))
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Track::from_entity).collect())
    }

    /// Gets every track on `album_id`, ordered by id.
    pub async fn find_all_by_album(&self, album_id: i32) -> Result<Vec<Track>, DbErr> {
        let entities = entity::prelude::Track::find()
            .filter(entity::track::Column::AlbumId.eq(album_id))
            .order_by_asc(entity::track::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Track::from_entity).collect())
    }

    /// Writes the fields present in `param` and, when `genre_ids` is present, replaces
    /// the genre links. Both happen in one transaction.
    ///
    /// # Returns
    /// - `Ok(Track)` - The updated track, without genres loaded
    /// - `Err(DbErr::RecordNotUpdated)` - No track with that id
    /// - `Err(DbErr)` - Update failed; nothing is kept
    pub async fn update(&self, id: i32, param: UpdateTrackParam) -> Result<Track, DbErr> {
        let txn = self.db.begin().await?;

        let mut model = entity::track::ActiveModel {
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
        if let Some(duration) = param.duration {
            model.duration = ActiveValue::Set(duration);
        }
        if let Some(album_id) = param.album_id {
            model.album_id = ActiveValue::Set(album_id);
        }

        let entity = model.update(&txn).await?;

        if let Some(genre_ids) = param.genre_ids {
            entity::prelude::TrackGenre::delete_many()
                .filter(entity::track_genre::Column::TrackId.eq(id))
                .exec(&txn)
                .await?;

            link_genres(&txn, id, &genre_ids).await?;
        }

        txn.commit().await?;

        Ok(Track::from_entity(entity))
    }

    /// Deletes a track and, through the cascade, its genre links.
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::Track::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}

async fn link_genres<C>(db: &C, track_id: i32, genre_ids: &[i32]) -> Result<(), DbErr>
where
    C: ConnectionTrait,
{
    if genre_ids.is_empty() {
        return Ok(());
    }

    let links = genre_ids
        .iter()
        .map(|genre_id| entity::track_genre::ActiveModel {
            track_id: ActiveValue::Set(track_id),
            genre_id: ActiveValue::Set(*genre_id),
        });

    entity::prelude::TrackGenre::insert_many(links)
        .exec_without_returning(db)
        .await?;

    Ok(())
}
