//! User data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::user::{CreateUserParam, UpdateUserParam, User, UserLookup};

/// Repository providing database operations for user management.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// `param.password` must already be a password hash; it is stored as given.
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Insert failed, including unique constraint violations on
    ///   username or email
    pub async fn create(&self, param: CreateUserParam) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Inserts several users in one statement.
    ///
    /// Every `password` must already be hashed.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows inserted
    /// - `Err(DbErr)` - Insert failed; no rows from the batch are kept
    pub async fn create_many(&self, params: Vec<CreateUserParam>) -> Result<u64, DbErr> {
        if params.is_empty() {
            return Ok(0);
        }

        let now = Utc::now();
        let models = params.into_iter().map(|param| entity::user::ActiveModel {
            username: ActiveValue::Set(param.username),
            email: ActiveValue::Set(param.email),
            password: ActiveValue::Set(param.password),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        });

        let inserted = entity::prelude::User::insert_many(models)
            .exec_without_returning(self.db)
            .await?;

        Ok(inserted)
    }

    /// Finds a single user by id, username or email.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user matches the lookup
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, lookup: &UserLookup) -> Result<Option<User>, DbErr> {
        let query = match lookup {
            UserLookup::Id(id) => entity::prelude::User::find_by_id(*id),
            UserLookup::Username(username) => entity::prelude::User::find()
                .filter(entity::user::Column::Username.eq(username.as_str())),
            UserLookup::Email(email) => entity::prelude::User::find()
                .filter(entity::user::Column::Email.eq(email.as_str())),
        };

        let entity = query.one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Gets all users ordered by id.
    pub async fn find_all(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    pub async fn count(&self) -> Result<u64, DbErr> {
        entity::prelude::User::find().count(self.db).await
    }

    /// Writes only the fields present in `param`, keyed by `id`.
    ///
    /// `param.password`, when present, must already be hashed.
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(DbErr::RecordNotUpdated)` - No user with that id
    /// - `Err(DbErr)` - Update failed, including unique constraint violations
    pub async fn update(&self, id: i32, param: UpdateUserParam) -> Result<User, DbErr> {
        let mut model = entity::user::ActiveModel {
            id: ActiveValue::Unchanged(id),
            updated_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        };

        if let Some(username) = param.username {
            model.username = ActiveValue::Set(username);
        }
        if let Some(email) = param.email {
            model.email = ActiveValue::Set(email);
        }
        if let Some(password) = param.password {
            model.password = ActiveValue::Set(password);
        }

        let entity = model.update(self.db).await?;

        Ok(User::from_entity(entity))
    }

    /// Deletes a user. Owned tracks are removed by the foreign key cascade.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of rows deleted, 0 when no user had that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected)
    }
}
