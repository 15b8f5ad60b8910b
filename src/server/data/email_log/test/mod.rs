use crate::server::{
    data::email_log::EmailLogRepository,
    model::email_log::{CreateEmailLogParams, EmailType},
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod create_queued;
