use super::*;

/// Tests deleting a track with genre links.
///
/// Expected: one row affected and its links removed by the cascade
#[tokio::test]
async fn deletes_track_and_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, track) = factory::helpers::create_track_with_owner(db).await?;
    let genre = factory::create_genre(db).await?;
    factory::link_genre(db, track.id, genre.id).await?;

    let deleted = TrackRepository::new(db).delete(track.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::TrackGenre::find().all(db).await?.is_empty());
    assert!(entity::prelude::Genre::find_by_id(genre.id).one(db).await?.is_some());

    Ok(())
}
