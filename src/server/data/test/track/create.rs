use super::*;

/// Tests creating a track with genre links.
///
/// Expected: Ok with the track stored and one link row per genre
#[tokio::test]
async fn creates_track_with_genre_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let jazz = factory::create_genre(db).await?;
    let modal = factory::create_genre(db).await?;

    let track = TrackRepository::new(db)
        .create(create_param(user.id, vec![jazz.id, modal.id]))
        .await?;

    assert_eq!(track.user_id, user.id);
    assert_eq!(track.title, "Blue in Green");
    assert_eq!(track.duration, Some(337));

    let links = entity::prelude::TrackGenre::find()
        .filter(entity::track_genre::Column::TrackId.eq(track.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 2);

    Ok(())
}

/// Tests that a failing genre link rolls back the track insert.
///
/// Expected: Err and no track row left behind
#[tokio::test]
async fn rolls_back_when_genre_link_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = TrackRepository::new(db)
        .create(create_param(user.id, vec![999]))
        .await;

    assert!(result.is_err());
    assert!(entity::prelude::Track::find().all(db).await?.is_empty());

    Ok(())
}
