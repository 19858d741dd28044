use super::*;

/// Tests that a partial update leaves omitted fields alone.
///
/// Expected: title changed, duration kept
#[tokio::test]
async fn updates_only_changed_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let track = factory::track::TrackFactory::new(db, user.id)
        .duration(Some(200))
        .build()
        .await?;

    let updated = TrackRepository::new(db)
        .update(
            track.id,
            UpdateTrackParam {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "Renamed");
    assert_eq!(updated.duration, Some(200));

    Ok(())
}

/// Tests replacing the genre set.
///
/// Expected: old links removed, new links inserted
#[tokio::test]
async fn replaces_genre_links() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, track) = factory::helpers::create_track_with_owner(db).await?;
    let old = factory::create_genre(db).await?;
    let new = factory::create_genre(db).await?;
    factory::link_genre(db, track.id, old.id).await?;

    TrackRepository::new(db)
        .update(
            track.id,
            UpdateTrackParam {
                genre_ids: Some(vec![new.id]),
                ..Default::default()
            },
        )
        .await?;

    let links = entity::prelude::TrackGenre::find()
        .filter(entity::track_genre::Column::TrackId.eq(track.id))
        .all(db)
        .await?;
    assert_eq!(links.len(), 1);
    assert_eq!(links[0].genre_id, new.id);

    Ok(())
}

/// Tests that an update without `genre_ids` keeps existing links.
///
/// Expected: link still present
#[tokio::test]
async fn keeps_genre_links_when_not_provided() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, track) = factory::helpers::create_track_with_owner(db).await?;
    let genre = factory::create_genre(db).await?;
    factory::link_genre(db, track.id, genre.id).await?;

    TrackRepository::new(db)
        .update(
            track.id,
            UpdateTrackParam {
                duration: Some(Some(10)),
                ..Default::default()
            },
        )
        .await?;

    let links = entity::prelude::TrackGenre::find().all(db).await?;
    assert_eq!(links.len(), 1);

    Ok(())
}

/// Tests that explicit nulls clear the nullable columns.
///
/// Expected: description, duration and album all None, title kept
#[tokio::test]
async fn clears_nullable_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let album = factory::create_album(db).await?;
    let track = factory::track::TrackFactory::new(db, user.id)
        .title("So What")
        .description("Modal")
        .duration(Some(545))
        .album_id(album.id)
        .build()
        .await?;

    let updated = TrackRepository::new(db)
        .update(
            track.id,
            UpdateTrackParam {
                description: Some(None),
                duration: Some(None),
                album_id: Some(None),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.title, "So What");
    assert_eq!(updated.description, None);
    assert_eq!(updated.duration, None);
    assert_eq!(updated.album_id, None);

    Ok(())
}
