//! Type-safe session management wrapper.
//!
//! Wraps the tower-sessions `Session` so handlers and middleware never touch raw
//! session keys. The authenticated user id and the XSRF token issued at login are
//! the only values stored per session.

use tower_sessions::Session;

use crate::server::{
    error::AppError,
    util::token::{random_token, XSRF_TOKEN_LENGTH},
};

// Session key constants
const SESSION_AUTH_USER_ID: &str = "auth:user";
pub(crate) const SESSION_AUTH_XSRF_TOKEN: &str = "auth:xsrf_token";

/// Authentication session management.
///
/// Handles storing and retrieving the authenticated user's id along with the
/// session lifecycle operations (login and logout).
pub struct AuthSession<'a> {
    /// The underlying tower-sessions Session instance.
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    /// Creates a new AuthSession wrapper.
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Establishes a logged-in session for `user_id`.
    ///
    /// The session id is cycled first so a cookie issued before login can never be
    /// reused to ride the authenticated session. A fresh XSRF token is generated and
    /// stored alongside the user id.
    ///
    /// # Returns
    /// - `Ok(token)` - The XSRF token to hand back to the client
    /// - `Err(AppError::SessionErr(_))` - Failed to write to the session store
    pub async fn login(&self, user_id: i32) -> Result<String, AppError> {
        self.session.cycle_id().await?;
        self.session.insert(SESSION_AUTH_USER_ID, user_id).await?;

        let token = random_token(XSRF_TOKEN_LENGTH);
        self.session
            .insert(SESSION_AUTH_XSRF_TOKEN, token.clone())
            .await?;

        Ok(token)
    }

    /// Retrieves the authenticated user's id from the session.
    ///
    /// # Returns
    /// - `Ok(Some(user_id))` - A user is logged in
    /// - `Ok(None)` - Anonymous session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_user_id(&self) -> Result<Option<i32>, AppError> {
        Ok(self.session.get::<i32>(SESSION_AUTH_USER_ID).await?)
    }

    /// Ends the session.
    ///
    /// Flushing clears all data and deletes the session row from the store, so the
    /// cookie the client still holds resolves to an anonymous session afterwards.
    pub async fn end(&self) -> Result<(), AppError> {
        self.session.flush().await?;
        Ok(())
    }
}
