use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::referral::ReferralStatus;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityDto {
    #[serde(rename = "type")]
    pub activity_type: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub referral_id: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderDashboardDto {
    pub total_referrals: u64,
    pub new_referrals: u64,
    pub accepted_referrals: u64,
    pub completed_referrals: u64,
    pub active_participants: u64,
    pub recent_activity: Vec<ActivityDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateReferralStatusDto {
    pub status: ReferralStatus,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeclineReferralDto {
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderPerformanceDto {
    pub total_referrals: u64,
    pub accepted_referrals: u64,
    pub completed_referrals: u64,
    pub declined_referrals: u64,
    pub acceptance_rate: f64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateProviderProfileDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    pub provider_bio: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AvailabilityDto {
    pub id: i32,
    pub provider_id: i32,
    /// 0 = Monday ... 6 = Sunday
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    pub is_available: bool,
    pub max_appointments: i32,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AvailabilitySlotDto {
    pub day_of_week: i32,
    pub start_time: String,
    pub end_time: String,
    #[serde(default = "default_true")]
    pub is_available: bool,
    #[serde(default = "default_max_appointments")]
    pub max_appointments: i32,
    #[serde(default)]
    pub location: Option<String>,
}

/// Replaces the provider's weekly availability with the given slots.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SetAvailabilityDto {
    pub slots: Vec<AvailabilitySlotDto>,
}

fn default_true() -> bool {
    true
}

fn default_max_appointments() -> i32 {
    8
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ParticipantDto {
    pub referral_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub referred_for: String,
    pub status: String,
    pub accepted_at: Option<DateTime<Utc>>,
}
