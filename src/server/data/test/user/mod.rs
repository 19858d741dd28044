use crate::server::{
    data::user::UserRepository,
    model::user::{CreateUserParam, UpdateUserParam, UserLookup},
};
use sea_orm::{DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update;
