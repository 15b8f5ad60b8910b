use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Scheduled,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Scheduled => "scheduled",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

impl RiskLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AppointmentDto {
    pub id: i32,
    pub referral_id: i32,
    pub provider_id: i32,
    pub appointment_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub status: String,
    pub service_type: String,
    pub location: Option<String>,
    pub appointment_notes: Option<String>,
    pub cancellation_reason: Option<String>,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateAppointmentDto {
    pub referral_id: i32,
    pub appointment_date: DateTime<Utc>,
    #[serde(default = "default_duration")]
    pub duration_minutes: i32,
    /// Defaults to the referral's `referred_for`.
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub appointment_notes: Option<String>,
}

fn default_duration() -> i32 {
    60
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct UpdateAppointmentStatusDto {
    pub status: AppointmentStatus,
    #[serde(default)]
    pub cancellation_reason: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct SessionNoteDto {
    pub id: i32,
    pub appointment_id: i32,
    pub referral_id: i32,
    pub provider_id: i32,
    pub session_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub session_type: Option<String>,
    pub participant_response: String,
    pub progress_notes: String,
    pub goals_addressed: Vec<String>,
    pub homework_assigned: Option<String>,
    pub next_session_focus: Option<String>,
    pub risk_level: String,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreateSessionNoteDto {
    /// Defaults to the appointment date.
    #[serde(default)]
    pub session_date: Option<DateTime<Utc>>,
    /// Defaults to the appointment duration.
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    #[serde(default)]
    pub session_type: Option<String>,
    pub participant_response: String,
    pub progress_notes: String,
    #[serde(default)]
    pub goals_addressed: Vec<String>,
    #[serde(default)]
    pub homework_assigned: Option<String>,
    #[serde(default)]
    pub next_session_focus: Option<String>,
    #[serde(default)]
    pub risk_level: RiskLevel,
}
