use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{deserialize_nullable, genre::GenreDto};

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TrackDto {
    pub id: i32,
    pub user_id: i32,
    pub album_id: Option<i32>,
    pub title: String,
    pub description: Option<String>,
    /// Length in seconds.
    pub duration: Option<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genres: Option<Vec<GenreDto>>,
}

#[derive(Deserialize, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateTrackDto {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub duration: Option<i32>,
    #[serde(default)]
    pub album_id: Option<i32>,
    #[serde(default)]
    pub genre_ids: Option<Vec<i32>>,
}

/// Partial track update. Absent fields are left unchanged; `null` clears a
/// nullable field.
#[derive(Deserialize, Debug, Default, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateTrackDto {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<String>)]
    pub description: Option<Option<String>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub duration: Option<Option<i32>>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    #[schema(value_type = Option<i32>)]
    pub album_id: Option<Option<i32>>,
    /// Replaces the full genre set when present.
    #[serde(default)]
    pub genre_ids: Option<Vec<i32>>,
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TrackListQuery {
    #[serde(default)]
    pub user_id: Option<i32>,
}
