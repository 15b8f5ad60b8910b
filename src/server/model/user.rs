//! User domain models and parameters.
//!
//! Users cover every account role. Provider accounts additionally carry a service type
//! that determines which referrals they can be assigned.

use chrono::{DateTime, Utc};

use crate::model::user::{ProviderSummaryDto, UserDto, UserRole};

/// Service type that lets a provider accept any referral.
pub const SERVICE_TYPE_ALL: &str = "all";

/// Application user account.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: i32,
    pub email: String,
    /// Argon2 PHC string. Never leaves the server.
    pub hashed_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    /// One of `admin`, `provider`, `participant`, `referrer`.
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

impl User {
    /// Converts an entity model to a user domain model at the repository boundary.
    pub fn from_entity(entity: entity::user::Model) -> Self {
        Self {
            id: entity.id,
            email: entity.email,
            hashed_password: entity.hashed_password,
            first_name: entity.first_name,
            last_name: entity.last_name,
            phone_number: entity.phone_number,
            role: entity.role,
            is_active: entity.is_active,
            is_verified: entity.is_verified,
            service_type: entity.service_type,
            provider_license: entity.provider_license,
            provider_agency: entity.provider_agency,
            provider_bio: entity.provider_bio,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
            last_login: entity.last_login,
        }
    }

    /// Converts the user domain model to a DTO for API responses.
    pub fn into_dto(self) -> UserDto {
        UserDto {
            id: self.id,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            phone_number: self.phone_number,
            role: self.role,
            is_active: self.is_active,
            is_verified: self.is_verified,
            service_type: self.service_type,
            provider_license: self.provider_license,
            provider_agency: self.provider_agency,
            provider_bio: self.provider_bio,
            created_at: self.created_at,
            updated_at: self.updated_at,
            last_login: self.last_login,
        }
    }

    pub fn into_provider_summary_dto(self) -> ProviderSummaryDto {
        ProviderSummaryDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            email: self.email,
            service_type: self.service_type,
            provider_agency: self.provider_agency,
            is_active: self.is_active,
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_role(&self, role: UserRole) -> bool {
        self.role == role.as_str()
    }

    /// Whether this provider can take a referral for `referred_for`.
    ///
    /// Providers with service type `all` handle everything; otherwise the service type
    /// must equal the referral's service case-insensitively.
    pub fn handles_service_type(&self, referred_for: &str) -> bool {
        match self.service_type.as_deref() {
            Some(SERVICE_TYPE_ALL) => true,
            Some(service_type) => service_type.eq_ignore_ascii_case(referred_for),
            None => false,
        }
    }
}

/// Parameters for inserting a new user.
#[derive(Debug, Clone)]
pub struct CreateUserParams {
    pub email: String,
    pub hashed_password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: Option<String>,
    pub role: UserRole,
    pub service_type: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    pub provider_bio: Option<String>,
}

/// Partial profile update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileParams {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    pub provider_bio: Option<String>,
}

impl UpdateProfileParams {
    pub fn from_dto(dto: crate::model::provider::UpdateProviderProfileDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            phone_number: dto.phone_number,
            provider_license: dto.provider_license,
            provider_agency: dto.provider_agency,
            provider_bio: dto.provider_bio,
        }
    }
}
