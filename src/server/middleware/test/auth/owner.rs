use chrono::Utc;

use super::*;

fn user(id: i32) -> User {
    let now = Utc::now();
    User {
        id,
        username: format!("user{}", id),
        email: format!("user{}@example.com", id),
        password_hash: "!unusable".to_string(),
        created_at: now,
        updated_at: now,
        tracks: None,
    }
}

/// Tests the owner passes the ownership check.
#[test]
fn allows_owner() {
    assert!(require_owner(&user(4), 4, "track").is_ok());
}

/// Tests any other user is refused with both ids recorded.
///
/// Expected: Err(AuthError::NotOwner) naming caller, owner and resource
#[test]
fn refuses_other_user() {
    let result = require_owner(&user(4), 5, "track");

    match result {
        Err(AuthError::NotOwner {
            user_id,
            owner_id,
            resource,
        }) => {
            assert_eq!(user_id, 4);
            assert_eq!(owner_id, 5);
            assert_eq!(resource, "track");
        }
        other => panic!("expected NotOwner, got {:?}", other),
    }
}
