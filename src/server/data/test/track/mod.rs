use crate::server::{
    data::track::TrackRepository,
    model::track::{CreateTrackParam, UpdateTrackParam},
};
use sea_orm::{ColumnTrait, DbErr, EntityTrait, QueryFilter};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find;
mod update;

fn create_param(user_id: i32, genre_ids: Vec<i32>) -> CreateTrackParam {
    CreateTrackParam {
        user_id,
        title: "Blue in Green".to_string(),
        description: None,
        duration: Some(337),
        album_id: None,
        genre_ids,
    }
}
