use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::track::TrackDto;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserDto {
    pub id: i32,
    pub username: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Only present when the user was loaded with relations.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tracks: Option<Vec<TrackDto>>,
}

#[derive(Deserialize, Debug, ToSchema)]
pub struct CreateUserDto {
    pub username: String,
    pub email: String,
    pub password: String,
}

#[derive(Deserialize, Debug, Default, ToSchema)]
pub struct UpdateUserDto {
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub password: Option<String>,
}

/// Credentials for `POST /v1/login`. `username` also accepts an email address.
#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginDto {
    pub username: String,
    pub password: String,
}

#[derive(Deserialize, Debug)]
pub struct SeedQuery {
    pub amount: u64,
}

#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct SeedResultDto {
    pub created: u64,
    pub total: u64,
}
