use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Referral lifecycle: `new -> assigned -> accepted -> in_progress -> completed`,
/// with `declined` and `cancelled` as exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferralStatus {
    New,
    Assigned,
    Accepted,
    InProgress,
    Completed,
    Declined,
    Cancelled,
}

impl ReferralStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Assigned => "assigned",
            Self::Accepted => "accepted",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Declined => "declined",
            Self::Cancelled => "cancelled",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ReferralPriority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

impl ReferralPriority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

/// Public web form submission. Field names follow the form's camelCase keys.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateReferralDto {
    // Client details
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    #[serde(default)]
    pub email_address: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    #[serde(default = "default_preferred_contact")]
    pub preferred_contact: String,

    // Representative details
    #[serde(default)]
    pub rep_first_name: Option<String>,
    #[serde(default)]
    pub rep_last_name: Option<String>,
    #[serde(default)]
    pub rep_phone_number: Option<String>,
    #[serde(default)]
    pub rep_email_address: Option<String>,
    #[serde(default)]
    pub rep_street_address: Option<String>,
    #[serde(default)]
    pub rep_city: Option<String>,
    #[serde(default)]
    pub rep_state: Option<String>,
    #[serde(default)]
    pub rep_postcode: Option<String>,
    #[serde(default)]
    pub rep_relationship: Option<String>,

    // Plan details
    pub plan_type: String,
    #[serde(default)]
    pub plan_manager_name: Option<String>,
    #[serde(default)]
    pub plan_manager_agency: Option<String>,
    #[serde(default)]
    pub ndis_number: Option<String>,
    #[serde(default)]
    pub available_funding: Option<String>,
    pub plan_start_date: String,
    pub plan_review_date: String,
    pub client_goals: String,

    // Referrer details
    pub referrer_first_name: String,
    pub referrer_last_name: String,
    #[serde(default)]
    pub referrer_agency: Option<String>,
    #[serde(default)]
    pub referrer_role: Option<String>,
    pub referrer_email: String,
    pub referrer_phone: String,

    pub referred_for: String,
    pub reason_for_referral: String,
    pub consent_checkbox: bool,
    #[serde(default)]
    pub disability_type: Option<String>,
    #[serde(default)]
    pub urgency_level: Option<String>,
}

fn default_preferred_contact() -> String {
    "phone".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReferralDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub phone_number: String,
    pub email_address: Option<String>,
    pub street_address: String,
    pub city: String,
    pub state: String,
    pub postcode: String,
    pub preferred_contact: String,
    pub rep_first_name: Option<String>,
    pub rep_last_name: Option<String>,
    pub rep_phone_number: Option<String>,
    pub rep_email_address: Option<String>,
    pub rep_street_address: Option<String>,
    pub rep_city: Option<String>,
    pub rep_state: Option<String>,
    pub rep_postcode: Option<String>,
    pub rep_relationship: Option<String>,
    pub plan_type: String,
    pub plan_manager_name: Option<String>,
    pub plan_manager_agency: Option<String>,
    pub ndis_number: Option<String>,
    pub available_funding: Option<String>,
    pub plan_start_date: String,
    pub plan_review_date: String,
    pub client_goals: String,
    pub referrer_first_name: String,
    pub referrer_last_name: String,
    pub referrer_agency: Option<String>,
    pub referrer_role: Option<String>,
    pub referrer_email: String,
    pub referrer_phone: String,
    pub referred_for: String,
    pub reason_for_referral: String,
    pub consent_checkbox: bool,
    pub disability_type: Option<String>,
    pub urgency_level: Option<String>,
    pub status: String,
    pub priority: String,
    pub notes: Option<String>,
    pub assigned_provider_id: Option<i32>,
    pub accepted_at: Option<DateTime<Utc>>,
    #[schema(value_type = Object)]
    pub form_metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Admin partial update. Absent fields are left untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct UpdateReferralDto {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub date_of_birth: Option<String>,
    pub phone_number: Option<String>,
    pub email_address: Option<String>,
    pub street_address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub postcode: Option<String>,
    pub preferred_contact: Option<String>,
    pub rep_first_name: Option<String>,
    pub rep_last_name: Option<String>,
    pub rep_phone_number: Option<String>,
    pub rep_email_address: Option<String>,
    pub rep_street_address: Option<String>,
    pub rep_city: Option<String>,
    pub rep_state: Option<String>,
    pub rep_postcode: Option<String>,
    pub rep_relationship: Option<String>,
    pub plan_type: Option<String>,
    pub plan_manager_name: Option<String>,
    pub plan_manager_agency: Option<String>,
    pub ndis_number: Option<String>,
    pub available_funding: Option<String>,
    pub plan_start_date: Option<String>,
    pub plan_review_date: Option<String>,
    pub client_goals: Option<String>,
    pub referrer_first_name: Option<String>,
    pub referrer_last_name: Option<String>,
    pub referrer_agency: Option<String>,
    pub referrer_role: Option<String>,
    pub referrer_email: Option<String>,
    pub referrer_phone: Option<String>,
    pub referred_for: Option<String>,
    pub reason_for_referral: Option<String>,
    pub consent_checkbox: Option<bool>,
    pub disability_type: Option<String>,
    pub urgency_level: Option<String>,
    pub status: Option<ReferralStatus>,
    pub priority: Option<ReferralPriority>,
    pub notes: Option<String>,
    pub assigned_provider_id: Option<i32>,
}
