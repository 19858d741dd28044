use super::*;

/// Tests that only the provided fields are written.
///
/// Expected: email changed, username and password untouched
#[tokio::test]
async fn updates_only_changed_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let created = factory::user::UserFactory::new(db)
        .username("ann")
        .email("a@x.com")
        .password_hash("hash-1")
        .build()
        .await?;

    let updated = UserRepository::new(db)
        .update(
            created.id,
            UpdateUserParam {
                email: Some("new@x.com".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert_eq!(updated.username, "ann");
    assert_eq!(updated.email, "new@x.com");
    assert_eq!(updated.password_hash, "hash-1");
    assert!(updated.updated_at >= created.updated_at);

    Ok(())
}

/// Tests that updating into an existing email violates the unique constraint.
///
/// Expected: Err with a unique constraint violation, original row unchanged
#[tokio::test]
async fn rejects_update_to_taken_email() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let ann = factory::user::UserFactory::new(db)
        .email("a@x.com")
        .build()
        .await?;
    let bob = factory::user::UserFactory::new(db)
        .email("b@x.com")
        .build()
        .await?;

    let result = UserRepository::new(db)
        .update(
            bob.id,
            UpdateUserParam {
                email: Some(ann.email.clone()),
                ..Default::default()
            },
        )
        .await;

    assert!(matches!(
        result.unwrap_err().sql_err(),
        Some(sea_orm::SqlErr::UniqueConstraintViolation(_))
    ));
    let stored = entity::prelude::User::find_by_id(bob.id).one(db).await?.unwrap();
    assert_eq!(stored.email, "b@x.com");

    Ok(())
}
