//! Development seeder that bulk-creates random users.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::AppError,
    model::user::CreateUserParam,
    util::{password::hash_password, token::random_username},
};

/// Password shared by every seeded user.
pub const SEED_PASSWORD: &str = "password123";

const SEED_USERNAME_SUFFIX_LENGTH: usize = 10;

/// Outcome of a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedResult {
    pub created: u64,
    pub total: u64,
}

pub struct SeedService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SeedService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts `amount` users with random usernames in a single statement.
    ///
    /// The password is hashed once and shared by the whole batch.
    ///
    /// # Returns
    /// - `Ok(SeedResult)` - Number of users created and the new total
    /// - `Err(AppError::Conflict)` - A random username collided with an existing one
    pub async fn seed(&self, amount: u64) -> Result<SeedResult, AppError> {
        let password = hash_password(SEED_PASSWORD)?;

        let users = (0..amount)
            .map(|_| {
                let username = format!("seed_{}", random_username(SEED_USERNAME_SUFFIX_LENGTH));
                CreateUserParam {
                    email: format!("{}@example.com", username),
                    username,
                    password: password.clone(),
                }
            })
            .collect();

        let user_repo = UserRepository::new(self.db);
        let created = user_repo.create_many(users).await?;
        let total = user_repo.count().await?;

        tracing::info!("Seeded {} users, {} total", created, total);

        Ok(SeedResult { created, total })
    }
}
