use chrono::{Duration, Utc};
use sea_orm::EntityTrait;

use crate::{
    model::{
        provider_admin::{
            AssignReferralDto, BulkAssignDto, CreatePerformanceReviewDto,
            DeactivateProviderDto, ReassignReferralDto,
        },
        referral::ReferralPriority,
    },
    server::{error::AppError, service::provider_admin::ProviderAdminService},
};
use test_utils::{
    builder::TestBuilder,
    factory::{self, referral::ReferralFactory, user::UserFactory},
};

mod analytics;
mod assignment;
mod deactivation;
mod oversight;

fn assign_to(provider_id: i32) -> AssignReferralDto {
    AssignReferralDto {
        provider_id,
        priority: None,
        notes: None,
    }
}
