use sea_orm_migration::{prelude::*, schema::*};

use super::{m20250301_000001_create_user_table::User, m20250301_000002_create_album_table::Album};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Track::Table)
                    .if_not_exists()
                    .col(pk_auto(Track::Id))
                    .col(integer(Track::UserId))
                    .col(integer_null(Track::AlbumId))
                    .col(string(Track::Title))
                    .col(text_null(Track::Description))
                    .col(integer_null(Track::Duration))
                    .col(timestamp_with_time_zone(Track::CreatedAt))
                    .col(timestamp_with_time_zone(Track::UpdatedAt))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_user_id")
                            .from(Track::Table, Track::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_track_album_id")
                            .from(Track::Table, Track::AlbumId)
                            .to(Album::Table, Album::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_track_user_id")
                    .table(Track::Table)
                    .col(Track::UserId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Track::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Track {
    Table,
    Id,
    UserId,
    AlbumId,
    Title,
    Description,
    Duration,
    CreatedAt,
    UpdatedAt,
}
