use crate::server::{
    data::genre::GenreRepository,
    model::genre::{CreateGenreParam, UpdateGenreParam},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

/// Tests creating and listing genres.
///
/// Expected: genres listed in name order
#[tokio::test]
async fn creates_and_lists_genres_by_name() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = GenreRepository::new(db);
    repo.create(CreateGenreParam {
        name: "Jazz".to_string(),
        description: None,
    })
    .await?;
    repo.create(CreateGenreParam {
        name: "Blues".to_string(),
        description: Some("12 bars".to_string()),
    })
    .await?;

    let names: Vec<String> = repo.find_all().await?.into_iter().map(|g| g.name).collect();

    assert_eq!(names, vec!["Blues".to_string(), "Jazz".to_string()]);

    Ok(())
}

/// Tests filtering a list of ids down to existing genres.
///
/// Expected: only stored ids returned, ascending
#[tokio::test]
async fn finds_existing_ids() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_genre(db).await?;
    let second = factory::create_genre(db).await?;

    let repo = GenreRepository::new(db);
    let existing = repo
        .find_existing_ids(&[second.id, 999, first.id])
        .await?;

    assert_eq!(existing, vec![first.id, second.id]);
    assert!(repo.find_existing_ids(&[]).await?.is_empty());

    Ok(())
}

/// Tests an update with no fields.
///
/// Expected: stored genre returned unchanged
#[tokio::test]
async fn empty_update_returns_stored_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::genre::GenreFactory::new(db)
        .name("Jazz")
        .build()
        .await?;

    let updated = GenreRepository::new(db)
        .update(genre.id, UpdateGenreParam::default())
        .await?;

    assert_eq!(updated.name, "Jazz");

    Ok(())
}

/// Tests renaming and deleting a genre.
///
/// Expected: rename stored, delete affects one row
#[tokio::test]
async fn updates_and_deletes_genre() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let genre = factory::create_genre(db).await?;
    let repo = GenreRepository::new(db);

    let updated = repo
        .update(
            genre.id,
            UpdateGenreParam {
                name: Some("Bebop".to_string()),
                ..Default::default()
            },
        )
        .await?;
    assert_eq!(updated.name, "Bebop");

    assert_eq!(repo.delete(genre.id).await?, 1);
    assert!(repo.find_by_id(genre.id).await?.is_none());

    Ok(())
}
