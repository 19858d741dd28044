use super::*;

/// Tests a logged-in user passes the guard.
///
/// Verifies that the AuthGuard resolves the session's user id to the stored user.
///
/// Expected: Ok(User) matching the created row
#[tokio::test]
async fn grants_access_to_logged_in_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .username("guarded")
        .email("guarded@example.com")
        .build()
        .await?;

    AuthSession::new(session).login(user.id).await?;

    let returned_user = AuthGuard::new(db, session).require().await?;

    assert_eq!(returned_user.id, user.id);
    assert_eq!(returned_user.username, "guarded");

    Ok(())
}

/// Tests an anonymous session is rejected.
///
/// Expected: Err(AuthError::NotLoggedIn)
#[tokio::test]
async fn denies_anonymous_session() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));

    Ok(())
}

/// Tests a session pointing at a deleted user is rejected and ended.
///
/// Verifies the stale session no longer carries a user id afterwards, so the
/// next request is anonymous without hitting the database.
///
/// Expected: Err(AuthError::NotLoggedIn) and an empty session
#[tokio::test]
async fn denies_and_ends_session_of_deleted_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let auth_session = AuthSession::new(session);
    auth_session.login(9999).await?;

    let result = AuthGuard::new(db, session).require().await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::NotLoggedIn))
    ));
    assert_eq!(auth_session.get_user_id().await?, None);

    Ok(())
}
