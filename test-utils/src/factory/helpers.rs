//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a user and one track owned by that user.
///
/// # Returns
/// - `Ok((user, track))` - Created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_track_with_owner(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::track::Model), DbErr> {
    let user = crate::factory::user::create_user(db).await?;
    let track = crate::factory::track::create_track(db, user.id).await?;

    Ok((user, track))
}
