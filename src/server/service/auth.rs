//! Credential checks for session login.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    model::user::{User, UserLookup},
    util::password::{verify_dummy, verify_password},
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username or email and password pair.
    ///
    /// Unknown users and wrong passwords produce the same error, and both pay for one
    /// Argon2 verification.
    ///
    /// # Returns
    /// - `Ok(User)` - Credentials are valid
    /// - `Err(AppError::AuthErr(InvalidCredentials))` - Unknown user or wrong password
    pub async fn login(&self, identifier: &str, password: &str) -> Result<User, AppError> {
        let lookup = UserLookup::from_identifier(identifier);

        let Some(user) = UserRepository::new(self.db).find(&lookup).await? else {
            verify_dummy(password);
            return Err(AuthError::InvalidCredentials(identifier.to_string()).into());
        };

        // Rows without a parseable hash can never log in.
        let valid = verify_password(password, &user.password_hash).unwrap_or(false);
        if !valid {
            return Err(AuthError::InvalidCredentials(identifier.to_string()).into());
        }

        tracing::info!("User {} logged in", user.id);

        Ok(user)
    }
}
