//! Request and response DTOs exchanged over the HTTP API.
//!
//! Field names are serialized in camelCase. Domain models in `server::model`
//! convert into these types at the controller boundary.

pub mod album;
pub mod api;
pub mod genre;
pub mod track;
pub mod user;

use serde::{Deserialize, Deserializer};

/// Deserializes a field that distinguishes "absent" from "explicitly null".
///
/// Use with `#[serde(default)]`: an absent field stays `None`, `null` becomes
/// `Some(None)` and a value becomes `Some(Some(value))`.
fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}
