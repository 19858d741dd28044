//! User domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::user::{CreateUserDto, UpdateUserDto, UserDto},
    server::{
        model::{check_length, into_result, track::Track},
        validation::{FieldError, Location, ValidationErrors},
    },
};

pub const MIN_USERNAME_LENGTH: usize = 3;
pub const MAX_USERNAME_LENGTH: usize = 32;
pub const MAX_EMAIL_LENGTH: usize = 254;
pub const MIN_PASSWORD_LENGTH: usize = 8;
pub const MAX_PASSWORD_LENGTH: usize = 128;

/// A registered user.
///
/// `password_hash` is the stored Argon2id PHC string and never leaves the server.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Owned tracks, only loaded when relations were requested.
    pub tracks: Option<Vec<Track>>,
}

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            email: entity.email,
            password_hash: entity.password,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            tracks: None,
        }
    }

    pub fn with_tracks(mut self, tracks: Vec<Track>) -> Self {
        self.tracks = Some(tracks);
        self
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            username: self.username,
            email: self.email,
            created_at: self.created_at,
            updated_at: self.updated_at,
            tracks: self
                .tracks
                .map(|tracks| tracks.into_iter().map(Track::into_dto).collect()),
        }
    }
}

/// Unique key a single user can be looked up by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserLookup {
    Id(i32),
    Username(String),
    Email(String),
}

impl UserLookup {
    /// Picks email or username lookup for a login identifier.
    pub fn from_identifier(identifier: &str) -> Self {
        let identifier = identifier.trim();

        if identifier.contains('@') {
            Self::Email(identifier.to_lowercase())
        } else {
            Self::Username(identifier.to_string())
        }
    }
}

impl std::fmt::Display for UserLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Id(id) => write!(f, "User with id {} not found", id),
            Self::Username(username) => write!(f, "User '{}' not found", username),
            Self::Email(email) => write!(f, "User with email '{}' not found", email),
        }
    }
}

/// Parameters for creating a user. `password` is plaintext until the service hashes it.
#[derive(Debug, Clone)]
pub struct CreateUserParam {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl CreateUserParam {
    pub fn from_dto(dto: CreateUserDto) -> Self {
        Self {
            username: dto.username.trim().to_string(),
            email: dto.email.trim().to_lowercase(),
            password: dto.password,
        }
    }

    /// Checks run before a user row is inserted.
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_identity(&mut errors, &self.username, &self.email);
        check_password(&mut errors, &self.password);

        into_result(errors)
    }
}

/// Partial user update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserParam {
    pub username: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
}

impl UpdateUserParam {
    pub fn from_dto(dto: UpdateUserDto) -> Self {
        Self {
            username: dto.username.map(|u| u.trim().to_string()),
            email: dto.email.map(|e| e.trim().to_lowercase()),
            password: dto.password,
        }
    }

    /// Checks the user that would result from applying this update to `existing`.
    pub fn validate(&self, existing: &User) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::default();

        check_identity(
            &mut errors,
            self.username.as_deref().unwrap_or(&existing.username),
            self.email.as_deref().unwrap_or(&existing.email),
        );
        if let Some(password) = &self.password {
            check_password(&mut errors, password);
        }

        into_result(errors)
    }
}

fn check_identity(errors: &mut ValidationErrors, username: &str, email: &str) {
    check_length(
        errors,
        "username",
        username,
        MIN_USERNAME_LENGTH,
        MAX_USERNAME_LENGTH,
    );
    if !email.contains('@') {
        errors.push(FieldError {
            location: Location::Body,
            field: "email".to_string(),
            message: "email must be a valid email address".to_string(),
        });
    } else {
        check_length(errors, "email", email, 3, MAX_EMAIL_LENGTH);
    }
}

fn check_password(errors: &mut ValidationErrors, password: &str) {
    check_length(
        errors,
        "password",
        password,
        MIN_PASSWORD_LENGTH,
        MAX_PASSWORD_LENGTH,
    );
}
