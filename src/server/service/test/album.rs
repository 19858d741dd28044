use crate::server::{
    error::AppError,
    model::album::{CreateAlbumParam, UpdateAlbumParam},
    service::album::AlbumService,
};
use test_utils::{builder::TestBuilder, factory};

/// Tests that album checks run before insert.
///
/// Expected: Validation error for a blank title
#[tokio::test]
async fn create_validates_before_insert() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let service = AlbumService::new(db);
    let result = service
        .create(CreateAlbumParam {
            title: "   ".to_string(),
            description: None,
        })
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert!(service.find_all().await?.is_empty());

    Ok(())
}

/// Tests that album checks run against the merged update.
///
/// Expected: Validation error for an empty title, stored album unchanged
#[tokio::test]
async fn update_validates_merged_album() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let album = factory::create_album(db).await?;
    let service = AlbumService::new(db);
    let existing = service.find_one(album.id, false).await?;

    let result = service
        .update(
            existing,
            UpdateAlbumParam {
                title: Some(String::new()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(result, Err(AppError::Validation(_))));
    assert_eq!(service.find_one(album.id, false).await?.title, album.title);

    Ok(())
}

/// Tests loading an album with its tracks.
///
/// Expected: tracks on the album attached
#[tokio::test]
async fn find_one_includes_tracks() -> Result<(), AppError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    factory::track::TrackFactory::new(db, user.id)
        .album_id(album.id)
        .build()
        .await?;

    let found = AlbumService::new(db).find_one(album.id, true).await?;

    assert_eq!(found.tracks.map(|t| t.len()), Some(1));

    Ok(())
}
