//! SeaORM entity models for the tracklist schema.
//!
//! Each module maps one table. Relations mirror the foreign keys created by the
//! `migration` crate so `Schema::create_table_from_entity` produces an equivalent
//! schema for tests.

pub mod prelude;

pub mod album;
pub mod genre;
pub mod track;
pub mod track_genre;
pub mod user;
