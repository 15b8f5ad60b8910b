use crate::server::{
    data::availability::AvailabilityRepository, model::availability::AvailabilitySlotParams,
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod replace_for_provider;
