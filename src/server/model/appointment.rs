//! Appointment and session note domain models.

use chrono::{DateTime, Utc};

use crate::model::appointment::{AppointmentDto, SessionNoteDto};

#[derive(Debug, Clone, PartialEq)]
pub struct Appointment {
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

impl Appointment {
    pub fn from_entity(entity: entity::appointment::Model) -> Self {
        Self {
            id: entity.id,
            referral_id: entity.referral_id,
            provider_id: entity.provider_id,
            appointment_date: entity.appointment_date,
            duration_minutes: entity.duration_minutes,
            status: entity.status,
            service_type: entity.service_type,
            location: entity.location,
            appointment_notes: entity.appointment_notes,
            cancellation_reason: entity.cancellation_reason,
            completed_at: entity.completed_at,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> AppointmentDto {
        AppointmentDto {
            id: self.id,
            referral_id: self.referral_id,
            provider_id: self.provider_id,
            appointment_date: self.appointment_date,
            duration_minutes: self.duration_minutes,
            status: self.status,
            service_type: self.service_type,
            location: self.location,
            appointment_notes: self.appointment_notes,
            cancellation_reason: self.cancellation_reason,
            completed_at: self.completed_at,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateAppointmentParams {
    pub referral_id: i32,
    pub provider_id: i32,
    pub appointment_date: DateTime<Utc>,
    pub duration_minutes: i32,
    pub service_type: String,
    pub location: Option<String>,
    pub appointment_notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionNote {
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

impl SessionNote {
    /// Converts an entity, reading `goals_addressed` from its JSON array column.
    ///
    /// Non-string entries in the array are skipped.
    pub fn from_entity(entity: entity::session_note::Model) -> Self {
        let goals_addressed = entity
            .goals_addressed
            .and_then(|value| value.as_array().cloned())
            .unwrap_or_default()
            .into_iter()
            .filter_map(|goal| goal.as_str().map(str::to_string))
            .collect();

        Self {
            id: entity.id,
            appointment_id: entity.appointment_id,
            referral_id: entity.referral_id,
            provider_id: entity.provider_id,
            session_date: entity.session_date,
            duration_minutes: entity.duration_minutes,
            session_type: entity.session_type,
            participant_response: entity.participant_response,
            progress_notes: entity.progress_notes,
            goals_addressed,
            homework_assigned: entity.homework_assigned,
            next_session_focus: entity.next_session_focus,
            risk_level: entity.risk_level,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> SessionNoteDto {
        SessionNoteDto {
            id: self.id,
            appointment_id: self.appointment_id,
            referral_id: self.referral_id,
            provider_id: self.provider_id,
            session_date: self.session_date,
            duration_minutes: self.duration_minutes,
            session_type: self.session_type,
            participant_response: self.participant_response,
            progress_notes: self.progress_notes,
            goals_addressed: self.goals_addressed,
            homework_assigned: self.homework_assigned,
            next_session_focus: self.next_session_focus,
            risk_level: self.risk_level,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateSessionNoteParams {
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
}
