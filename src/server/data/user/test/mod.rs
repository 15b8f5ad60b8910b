use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        model::user::{CreateUserParams, UpdateProfileParams},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod get_providers;
mod get_suitable_providers;
