use chrono::{Duration, Utc};

use crate::{
    model::{
        appointment::{CreateAppointmentDto, CreateSessionNoteDto, RiskLevel},
        provider::{AvailabilitySlotDto, SetAvailabilityDto, UpdateReferralStatusDto},
        referral::ReferralStatus,
    },
    server::{error::AppError, service::provider::ProviderService},
};
use test_utils::{builder::TestBuilder, factory};

mod dashboard;
mod referral;
