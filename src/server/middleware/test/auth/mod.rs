use crate::server::{
    error::{auth::AuthError, AppError},
    middleware::{
        auth::{require_owner, AuthGuard},
        session::AuthSession,
    },
    model::user::User,
};
use test_utils::{builder::TestBuilder, factory};

mod owner;
mod require;
