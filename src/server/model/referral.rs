//! Referral domain models and parameters.

use chrono::{DateTime, Utc};

use crate::model::{
    provider::ParticipantDto,
    referral::{CreateReferralDto, ReferralDto, UpdateReferralDto},
};

/// A submitted referral and its workflow state.
#[derive(Debug, Clone, PartialEq)]
pub struct Referral {
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
    pub raw_submission: serde_json::Value,
    pub form_metadata: serde_json::Value,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Referral {
    /// Converts an entity model to a referral domain model at the repository boundary.
    pub fn from_entity(entity: entity::referral::Model) -> Self {
        Self {
            id: entity.id,
            first_name: entity.first_name,
            last_name: entity.last_name,
            date_of_birth: entity.date_of_birth,
            phone_number: entity.phone_number,
            email_address: entity.email_address,
            street_address: entity.street_address,
            city: entity.city,
            state: entity.state,
            postcode: entity.postcode,
            preferred_contact: entity.preferred_contact,
            rep_first_name: entity.rep_first_name,
            rep_last_name: entity.rep_last_name,
            rep_phone_number: entity.rep_phone_number,
            rep_email_address: entity.rep_email_address,
            rep_street_address: entity.rep_street_address,
            rep_city: entity.rep_city,
            rep_state: entity.rep_state,
            rep_postcode: entity.rep_postcode,
            rep_relationship: entity.rep_relationship,
            plan_type: entity.plan_type,
            plan_manager_name: entity.plan_manager_name,
            plan_manager_agency: entity.plan_manager_agency,
            ndis_number: entity.ndis_number,
            available_funding: entity.available_funding,
            plan_start_date: entity.plan_start_date,
            plan_review_date: entity.plan_review_date,
            client_goals: entity.client_goals,
            referrer_first_name: entity.referrer_first_name,
            referrer_last_name: entity.referrer_last_name,
            referrer_agency: entity.referrer_agency,
            referrer_role: entity.referrer_role,
            referrer_email: entity.referrer_email,
            referrer_phone: entity.referrer_phone,
            referred_for: entity.referred_for,
            reason_for_referral: entity.reason_for_referral,
            consent_checkbox: entity.consent_checkbox,
            disability_type: entity.disability_type,
            urgency_level: entity.urgency_level,
            status: entity.status,
            priority: entity.priority,
            notes: entity.notes,
            assigned_provider_id: entity.assigned_provider_id,
            accepted_at: entity.accepted_at,
            raw_submission: entity.raw_submission,
            form_metadata: entity.form_metadata,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    /// Converts the referral to a DTO. The raw submission stays server-side.
    pub fn into_dto(self) -> ReferralDto {
        ReferralDto {
            id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email_address: self.email_address,
            street_address: self.street_address,
            city: self.city,
            state: self.state,
            postcode: self.postcode,
            preferred_contact: self.preferred_contact,
            rep_first_name: self.rep_first_name,
            rep_last_name: self.rep_last_name,
            rep_phone_number: self.rep_phone_number,
            rep_email_address: self.rep_email_address,
            rep_street_address: self.rep_street_address,
            rep_city: self.rep_city,
            rep_state: self.rep_state,
            rep_postcode: self.rep_postcode,
            rep_relationship: self.rep_relationship,
            plan_type: self.plan_type,
            plan_manager_name: self.plan_manager_name,
            plan_manager_agency: self.plan_manager_agency,
            ndis_number: self.ndis_number,
            available_funding: self.available_funding,
            plan_start_date: self.plan_start_date,
            plan_review_date: self.plan_review_date,
            client_goals: self.client_goals,
            referrer_first_name: self.referrer_first_name,
            referrer_last_name: self.referrer_last_name,
            referrer_agency: self.referrer_agency,
            referrer_role: self.referrer_role,
            referrer_email: self.referrer_email,
            referrer_phone: self.referrer_phone,
            referred_for: self.referred_for,
            reason_for_referral: self.reason_for_referral,
            consent_checkbox: self.consent_checkbox,
            disability_type: self.disability_type,
            urgency_level: self.urgency_level,
            status: self.status,
            priority: self.priority,
            notes: self.notes,
            assigned_provider_id: self.assigned_provider_id,
            accepted_at: self.accepted_at,
            form_metadata: self.form_metadata,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    pub fn into_participant_dto(self) -> ParticipantDto {
        ParticipantDto {
            referral_id: self.id,
            first_name: self.first_name,
            last_name: self.last_name,
            date_of_birth: self.date_of_birth,
            phone_number: self.phone_number,
            email_address: self.email_address,
            referred_for: self.referred_for,
            status: self.status,
            accepted_at: self.accepted_at,
        }
    }

    pub fn participant_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Email address for participant correspondence: the client's, else the representative's.
    pub fn participant_contact_email(&self) -> Option<&str> {
        self.email_address
            .as_deref()
            .filter(|email| !email.is_empty())
            .or(self
                .rep_email_address
                .as_deref()
                .filter(|email| !email.is_empty()))
    }
}

/// Parameters for inserting a referral from the public form.
#[derive(Debug, Clone)]
pub struct CreateReferralParams {
    pub form: CreateReferralDto,
    pub raw_submission: serde_json::Value,
    pub form_metadata: serde_json::Value,
}

/// Partial referral update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default)]
pub struct UpdateReferralParams {
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
    pub status: Option<String>,
    pub priority: Option<String>,
    pub notes: Option<String>,
    /// `Some(None)` clears the assignment.
    pub assigned_provider_id: Option<Option<i32>>,
    pub accepted_at: Option<DateTime<Utc>>,
}

impl UpdateReferralParams {
    pub fn from_dto(dto: UpdateReferralDto) -> Self {
        Self {
            first_name: dto.first_name,
            last_name: dto.last_name,
            date_of_birth: dto.date_of_birth,
            phone_number: dto.phone_number,
            email_address: dto.email_address,
            street_address: dto.street_address,
            city: dto.city,
            state: dto.state,
            postcode: dto.postcode,
            preferred_contact: dto.preferred_contact,
            rep_first_name: dto.rep_first_name,
            rep_last_name: dto.rep_last_name,
            rep_phone_number: dto.rep_phone_number,
            rep_email_address: dto.rep_email_address,
            rep_street_address: dto.rep_street_address,
            rep_city: dto.rep_city,
            rep_state: dto.rep_state,
            rep_postcode: dto.rep_postcode,
            rep_relationship: dto.rep_relationship,
            plan_type: dto.plan_type,
            plan_manager_name: dto.plan_manager_name,
            plan_manager_agency: dto.plan_manager_agency,
            ndis_number: dto.ndis_number,
            available_funding: dto.available_funding,
            plan_start_date: dto.plan_start_date,
            plan_review_date: dto.plan_review_date,
            client_goals: dto.client_goals,
            referrer_first_name: dto.referrer_first_name,
            referrer_last_name: dto.referrer_last_name,
            referrer_agency: dto.referrer_agency,
            referrer_role: dto.referrer_role,
            referrer_email: dto.referrer_email,
            referrer_phone: dto.referrer_phone,
            referred_for: dto.referred_for,
            reason_for_referral: dto.reason_for_referral,
            consent_checkbox: dto.consent_checkbox,
            disability_type: dto.disability_type,
            urgency_level: dto.urgency_level,
            status: dto.status.map(|s| s.as_str().to_string()),
            priority: dto.priority.map(|p| p.as_str().to_string()),
            notes: dto.notes,
            assigned_provider_id: dto.assigned_provider_id.map(Some),
            accepted_at: None,
        }
    }
}

/// Filters for listing referrals. Empty filters match everything.
#[derive(Debug, Clone, Default)]
pub struct ReferralFilter {
    pub status: Option<String>,
    pub service_type: Option<String>,
    pub priority: Option<String>,
    pub assigned_provider_id: Option<i32>,
    pub created_from: Option<DateTime<Utc>>,
    pub created_before: Option<DateTime<Utc>>,
    pub updated_from: Option<DateTime<Utc>>,
}
