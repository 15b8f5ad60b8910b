use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct EmailLogDto {
    pub id: i32,
    pub referral_id: Option<i32>,
    pub user_id: Option<i32>,
    pub email_type: String,
    pub to_address: String,
    pub subject: String,
    pub status: String,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct EmailCountsDto {
    pub total: u64,
    pub sent: u64,
    pub failed: u64,
    pub pending: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReferralEmailsDto {
    pub referral_id: i32,
    pub statistics: EmailCountsDto,
    pub emails: Vec<EmailLogDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct EmailStatisticsDto {
    pub total_emails: u64,
    pub sent: u64,
    pub failed: u64,
    pub pending: u64,
    pub success_rate: f64,
    pub by_type: BTreeMap<String, u64>,
}

/// Outcome of dispatching the three referral notifications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
pub struct NotificationResultsDto {
    pub provider_notification: bool,
    pub participant_confirmation: bool,
    pub referrer_notification: bool,
}
