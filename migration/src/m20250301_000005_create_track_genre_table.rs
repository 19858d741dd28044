use sea_orm_migration::{prelude::*, schema::*};

use super::{
    m20250301_000003_create_genre_table::Genre, m20250301_000004_create_track_table::Track,
};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(TrackGenre::Table)
                    .if_not_exists()
                    .col(integer(TrackGenre::TrackId))
                    .col(integer(TrackGenre::GenreId))
                    .primary_key(
                        Index::create()
                            .col(TrackGenre::TrackId)
                            .col(TrackGenre::GenreId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_genre_track_id")
                            .from(TrackGenre::Table, TrackGenre::TrackId)
                            .to(Track::Table, Track::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_genre_genre_id")
                            .from(TrackGenre::Table, TrackGenre::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(TrackGenre::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum TrackGenre {
    Table,
    TrackId,
    GenreId,
}
