//! User service for business logic.
//!
//! Orchestrates user lookups, signup and profile updates while working with domain
//! models rather than DTOs. Passwords are hashed here before anything reaches the
//! repository.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{track::TrackRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParam, UpdateUserParam, User, UserLookup},
    util::password::hash_password,
};

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Retrieves a single user.
    ///
    /// # Arguments
    /// - `lookup` - Id, username or email to look the user up by
    /// - `include_relations` - Whether to load the user's tracks
    ///
    /// # Returns
    /// - `Ok(User)` - User found
    /// - `Err(AppError::NotFound)` - No user matches the lookup
    /// - `Err(AppError::DbErr)` - Database error during query
    pub async fn find_one(&self, lookup: UserLookup, include_relations: bool) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find(&lookup).await? else {
            return Err(AppError::NotFound(lookup.to_string()));
        };

        if !include_relations {
            return Ok(user);
        }

        let tracks = TrackRepository::new(self.db)
            .find_all_by_owner(user.id)
            .await?;

        Ok(user.with_tracks(tracks))
    }

    /// Retrieves all users ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let users = UserRepository::new(self.db).find_all().await?;
        Ok(users)
    }

    /// Creates a new user with a hashed password.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::Validation)` - Entity checks failed
    /// - `Err(AppError::Conflict)` - Username or email already taken
    /// - `Err(AppError::InternalErr)` - Password hashing failed
    pub async fn create(&self, param: CreateUserParam) -> Result<User, AppError> {
        param.validate()?;

        let password = hash_password(&param.password)?;
        let user = UserRepository::new(self.db)
            .create(CreateUserParam { password, ..param })
            .await?;

        tracing::info!("Created user {} '{}'", user.id, user.username);

        Ok(user)
    }

    /// Applies a partial update to a previously loaded user.
    ///
    /// Only the columns present in `patch` are written, keyed by `existing.id`.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::Validation)` - The merged user fails the entity checks
    /// - `Err(AppError::Conflict)` - New username or email already taken
    /// - `Err(AppError::NotFound)` - The user was deleted since it was loaded
    pub async fn update(&self, existing: User, patch: UpdateUserParam) -> Result<User, AppError> {
        patch.validate(&existing)?;

        let password = match patch.password {
            Some(ref password) => Some(hash_password(password)?),
            None => None,
        };

        let user = UserRepository::new(self.db)
            .update(existing.id, UpdateUserParam { password, ..patch })
            .await?;

        Ok(user)
    }

    /// Deletes a user and, through the cascade, their tracks.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that id
    pub async fn remove(&self, id: i32) -> Result<(), AppError> {
        let deleted = UserRepository::new(self.db).delete(id).await?;

        if deleted == 0 {
            return Err(AppError::NotFound(UserLookup::Id(id).to_string()));
        }

        tracing::info!("Removed user {}", id);

        Ok(())
    }
}
