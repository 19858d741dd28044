pub use super::album::Entity as Album;
pub use super::genre::Entity as Genre;
pub use super::track::Entity as Track;
pub use super::track_genre::Entity as TrackGenre;
pub use super::user::Entity as User;
