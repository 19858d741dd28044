//! Service layer between controllers and repositories.
//!
//! Services run the entity checks, call one or more repositories and classify every
//! storage failure into an `AppError`, so controllers only branch on error kinds.

pub mod album;
pub mod auth;
pub mod genre;
pub mod seed;
pub mod track;
pub mod user;

#[cfg(test)]
mod test;
