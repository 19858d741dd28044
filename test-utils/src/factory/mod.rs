//! Factory methods for creating test data.
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation. Defaults are made
//! unique with a shared counter so factories never collide on unique columns.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::user::create_user(&db).await?;
//! let track = factory::track::TrackFactory::new(&db, user.id)
//!     .title("Blue in Green")
//!     .duration(337)
//!     .build()
//!     .await?;
//! ```

pub mod album;
pub mod genre;
pub mod helpers;
pub mod track;
pub mod user;

pub use album::create_album;
pub use genre::create_genre;
pub use track::{create_track, link_genre};
pub use user::create_user;
