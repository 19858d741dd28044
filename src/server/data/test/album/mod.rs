use crate::server::{
    data::album::AlbumRepository,
    model::album::{CreateAlbumParam, UpdateAlbumParam},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and fetching an album.
///
/// Expected: stored album found by id
#[tokio::test]
async fn creates_and_finds_album() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AlbumRepository::new(db);
    let album = repo
        .create(CreateAlbumParam {
            title: "Kind of Blue".to_string(),
            description: Some("1959".to_string()),
        })
        .await?;

    let found = repo.find_by_id(album.id).await?.unwrap();

    assert_eq!(found.title, "Kind of Blue");
    assert_eq!(found.description.as_deref(), Some("1959"));

    Ok(())
}

/// Tests a partial album update.
///
/// Expected: description replaced, title kept
#[tokio::test]
async fn updates_description_only() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::album::AlbumFactory::new(db)
        .title("Kind of Blue")
        .build()
        .await?;

    let updated = AlbumRepository::new(db)
        .update(
            album.id,
            UpdateAlbumParam {
                description: Some(Some("Remastered".to_string())),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Kind of Blue");
    assert_eq!(updated.description.as_deref(), Some("Remastered"));

    Ok(())
}

/// Tests that an explicit null clears the description.
///
/// Expected: description None, title kept
#[tokio::test]
async fn clears_description() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::album::AlbumFactory::new(db)
        .title("Kind of Blue")
        .description("1959")
        .build()
        .await?;

    let updated = AlbumRepository::new(db)
        .update(
            album.id,
            UpdateAlbumParam {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Kind of Blue");
    assert_eq!(updated.description, None);

    Ok(())
}

/// Tests that deleting an album keeps its tracks.
///
/// Expected: album gone, track kept with no album
#[tokio::test]
async fn delete_detaches_tracks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    let track = factory::track::TrackFactory::new(db, user.id)
        .album_id(album.id)
        .build()
        .await?;

    let deleted = AlbumRepository::new(db).delete(album.id).await?;

    assert_eq!(deleted, 1);
    let stored = entity::prelude::Track::find_by_id(track.id).one(db).await?.unwrap();
    assert_eq!(stored.album_id, None);

    Ok(())
}
