use super::*;

fn param(username: &str, email: &str) -> CreateUserParam {
    CreateUserParam {
        username: username.to_string(),
        email: email.to_string(),
        password: "$argon2id$stored-as-given".to_string(),
    }
}

/// Tests creating a new user.
///
/// Expected: Ok with id assigned and the password column stored verbatim
#[tokio::test]
async fn creates_user() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(param("ann", "a@x.com")).await?;

    assert!(user.id > 0);
    assert_eq!(user.username, "ann");
    assert_eq!(user.email, "a@x.com");
    assert_eq!(user.password_hash, "$argon2id$stored-as-given");
    assert!(user.tracks.is_none());

    Ok(())
}

/// Tests that a duplicate username is rejected by the unique constraint.
///
/// Expected: Err with a unique constraint violation and one row in the table
#[tokio::test]
async fn rejects_duplicate_username() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(param("ann", "a@x.com")).await?;
    let result = repo.create(param("ann", "other@x.com")).await;

    let err = result.unwrap_err();
    assert!(matches!(
        err.sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    assert_eq!(repo.count().await?, 1);

    Ok(())
}

/// Tests bulk creation.
///
/// Expected: Ok with the number of inserted rows
#[tokio::test]
async fn creates_many_users() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let inserted = repo
        .create_many(vec![param("ann", "a@x.com"), param("bob", "b@x.com")])
        .await?;

    assert_eq!(inserted, 2);
    assert_eq!(repo.count().await?, 2);

    Ok(())
}

/// Tests that an empty batch is a no-op.
///
/// Expected: Ok(0) without touching the database
#[tokio::test]
async fn create_many_with_empty_batch() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let inserted = UserRepository::new(db).create_many(Vec::new()).await?;

    assert_eq!(inserted, 0);

    Ok(())
}
