use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account role stored in `users.role`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum UserRole {
    Admin,
    Provider,
    #[default]
    Participant,
    Referrer,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "admin",
            Self::Provider => "provider",
            Self::Participant => "participant",
            Self::Referrer => "referrer",
        }
    }
}

/// Service a provider delivers, stored in `users.service_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    Physiotherapy,
    Chiro,
    Psychologist,
    OccupationalTherapy,
    SpeechPathology,
    SupportCoordination,
    General,
    /// Matches every referral.
    All,
}

impl ServiceType {
    pub const ALL: [ServiceType; 8] = [
        Self::Physiotherapy,
        Self::Chiro,
        Self::Psychologist,
        Self::OccupationalTherapy,
        Self::SpeechPathology,
        Self::SupportCoordination,
        Self::General,
        Self::All,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Physiotherapy => "physiotherapy",
            Self::Chiro => "chiro",
            Self::Psychologist => "psychologist",
            Self::OccupationalTherapy => "occupational_therapy",
            Self::SpeechPathology => "speech_pathology",
            Self::SupportCoordination => "support_coordination",
            Self::General => "general",
            Self::All => "all",
        }
    }

    /// Parses a stored or submitted value, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Option<Self> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|service_type| service_type.as_str().eq_ignore_ascii_case(value))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub id: i32,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub role: String,
    pub is_active: bool,
    pub is_verified: bool,
    pub service_type: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    pub provider_bio: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// Registration payload, also used by admins to create provider accounts.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegisterUserDto {
    pub email: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    #[serde(default)]
    pub phone_number: Option<String>,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub service_type: Option<String>,
    #[serde(default)]
    pub provider_license: Option<String>,
    #[serde(default)]
    pub provider_agency: Option<String>,
    #[serde(default)]
    pub provider_bio: Option<String>,
    /// One-time bootstrap code, required when `role` is `admin`.
    #[serde(default)]
    pub admin_code: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginDto {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginResponseDto {
    pub user: UserDto,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderSummaryDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub service_type: Option<String>,
    pub provider_agency: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CheckAuthDto {
    pub authenticated: bool,
    pub user_id: Option<i32>,
    pub email: Option<String>,
    pub role: Option<String>,
    pub is_active: Option<bool>,
}
