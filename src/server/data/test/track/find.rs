use super::*;

/// Tests loading a track with its genres.
///
/// Expected: the linked genre is included
#[tokio::test]
async fn finds_track_with_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, track) = factory::helpers::create_track_with_owner(db).await?;
    let genre = factory::create_genre(db).await?;
    factory::link_genre(db, track.id, genre.id).await?;

    let found = TrackRepository::new(db)
        .find_by_id_with_genres(track.id)
        .await?
        .unwrap();

    let genres = found.genres.unwrap();
    assert_eq!(genres.len(), 1);
    assert_eq!(genres[0].id, genre.id);

    Ok(())
}

/// Tests loading a track without genre links.
///
/// Expected: an empty genre list rather than None
#[tokio::test]
async fn finds_track_with_no_genres() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, track) = factory::helpers::create_track_with_owner(db).await?;

    let found = TrackRepository::new(db)
        .find_by_id_with_genres(track.id)
        .await?
        .unwrap();

    assert_eq!(found.genres, Some(Vec::new()));

    Ok(())
}

/// Tests filtering tracks by owner and by album.
///
/// Expected: only matching tracks are returned
#[tokio::test]
async fn filters_by_owner_and_album() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ann = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    let on_album = factory::track::TrackFactory::new(db, ann.id)
        .album_id(album.id)
        .build()
        .await?;
    factory::create_track(db, ann.id).await?;
    factory::create_track(db, bob.id).await?;

    let repo = TrackRepository::new(db);

    assert_eq!(repo.find_all().await?.len(), 3);
    assert_eq!(repo.find_all_by_owner(ann.id).await?.len(), 2);
    assert_eq!(repo.find_all_by_owner(bob.id).await?.len(), 1);

    let album_tracks = repo.find_all_by_album(album.id).await?;
    assert_eq!(album_tracks.len(), 1);
    assert_eq!(album_tracks[0].id, on_album.id);

    Ok(())
}
