use super::*;

/// Tests looking a user up by each unique key.
///
/// Expected: the same user for id, username and email lookups
#[tokio::test]
async fn finds_user_by_every_lookup() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("ann")
        .email("a@x.com")
        .build()
        .await?;

    let repo = UserRepository::new(db);
    for lookup in [
        UserLookup::Id(created.id),
        UserLookup::Username("ann".to_string()),
        UserLookup::Email("a@x.com".to_string()),
    ] {
        let user = repo.find(&lookup).await?;
        assert_eq!(user.map(|u| u.id), Some(created.id));
    }

    Ok(())
}

/// Tests looking up a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = UserRepository::new(db).find(&UserLookup::Id(999)).await?;

    assert!(user.is_none());

    Ok(())
}

/// Tests listing all users.
///
/// Expected: every user, ordered by id
#[tokio::test]
async fn finds_all_users_in_id_order() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let first = factory::create_user(db).await?;
    let second = factory::create_user(db).await?;

    let users = UserRepository::new(db).find_all().await?;

    let ids: Vec<i32> = users.iter().map(|u| u.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}
