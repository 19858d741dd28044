//! HTTP handlers.
//!
//! Handlers receive requests that already passed validation and, where required,
//! the auth gate. Each one converts DTOs into server params, calls the service
//! layer and wraps the result in an `Envelope`.

pub mod album;
pub mod auth;
pub mod genre;
pub mod health;
pub mod track;
pub mod user;
