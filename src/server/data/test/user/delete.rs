use super::*;

/// Tests deleting a user with tracks.
///
/// Expected: one row affected and the user's tracks removed by the cascade
#[tokio::test]
async fn deletes_user_and_owned_tracks() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _track) = factory::helpers::create_track_with_owner(db).await?;

    let deleted = UserRepository::new(db).delete(user.id).await?;

    assert_eq!(deleted, 1);
    assert!(entity::prelude::User::find_by_id(user.id).one(db).await?.is_none());
    assert!(entity::prelude::Track::find().all(db).await?.is_empty());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(0)
#[tokio::test]
async fn delete_missing_user_affects_nothing() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let deleted = UserRepository::new(db).delete(42).await?;

    assert_eq!(deleted, 0);

    Ok(())
}
