//! Authentication gate and ownership checks.
//!
//! `AuthGuard` resolves the session's user against the database. The `require_login`
//! middleware runs it in front of protected handlers and hands the loaded user down
//! as a `CurrentUser` request extension.

use axum::{
    extract::{FromRequestParts, Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    middleware::session::AuthSession,
    model::user::{User, UserLookup},
    state::AppState,
};

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Loads the user the session belongs to.
    ///
    /// A session pointing at a user that no longer exists is ended before the
    /// request is rejected, so the stale cookie stops resolving to anything.
    ///
    /// # Returns
    /// - `Ok(User)` - The authenticated user
    /// - `Err(AuthError::NotLoggedIn)` - Anonymous session or deleted user
    /// - `Err(AppError::SessionErr | AppError::DbErr)` - Store failure
    pub async fn require(&self) -> Result<User, AppError> {
        let auth_session = AuthSession::new(self.session);

        let Some(user_id) = auth_session.get_user_id().await? else {
            return Err(AuthError::NotLoggedIn.into());
        };

        let user_repo = UserRepository::new(self.db);
        let Some(user) = user_repo.find(&UserLookup::Id(user_id)).await? else {
            tracing::debug!("Session references deleted user {}, ending session", user_id);
            auth_session.end().await?;
            return Err(AuthError::NotLoggedIn.into());
        };

        Ok(user)
    }
}

/// The authenticated caller, placed in request extensions by `require_login`.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub User);

impl<S> FromRequestParts<S> for CurrentUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<CurrentUser>()
            .cloned()
            .ok_or_else(|| AuthError::NotLoggedIn.into())
    }
}

/// Rejects anonymous requests with 401 before the handler runs.
pub async fn require_login(
    State(state): State<AppState>,
    session: Session,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let user = AuthGuard::new(&state.db, &session).require().await?;

    request.extensions_mut().insert(CurrentUser(user));

    Ok(next.run(request).await)
}

/// Fails with `NotOwner` unless `caller` owns the resource.
pub fn require_owner(caller: &User, owner_id: i32, resource: &str) -> Result<(), AuthError> {
    if caller.id != owner_id {
        return Err(AuthError::NotOwner {
            user_id: caller.id,
            owner_id,
            resource: resource.to_string(),
        });
    }

    Ok(())
}

/// Post-handler step that ends the session once the handler has succeeded.
///
/// Used after account deletion so the cookie the client still holds is anonymous
/// from the next request on.
pub async fn end_session_on_success(
    session: Session,
    request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let response = next.run(request).await;

    if response.status().is_success() {
        AuthSession::new(&session).end().await?;
    }

    Ok(response)
}
