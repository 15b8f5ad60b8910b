//! Email delivery log domain model.

use chrono::{DateTime, Utc};

use crate::model::email::EmailLogDto;

pub const EMAIL_STATUS_QUEUED: &str = "queued";
pub const EMAIL_STATUS_SENT: &str = "sent";
pub const EMAIL_STATUS_FAILED: &str = "failed";

/// Kind of outbound email, stored in `email_logs.email_type`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailType {
    ProviderNotification,
    ParticipantConfirmation,
    ReferrerNotification,
    ProviderMessage,
}

impl EmailType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ProviderNotification => "provider_notification",
            Self::ParticipantConfirmation => "participant_confirmation",
            Self::ReferrerNotification => "referrer_notification",
            Self::ProviderMessage => "provider_message",
        }
    }
}

/// One recorded send attempt.
#[derive(Debug, Clone, PartialEq)]
pub struct EmailLog {
    pub id: i32,
    pub referral_id: Option<i32>,
    pub user_id: Option<i32>,
    pub email_type: String,
    pub to_address: String,
    pub subject: String,
    pub body: Option<String>,
    pub status: String,
    pub error: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl EmailLog {
    pub fn from_entity(entity: entity::email_log::Model) -> Self {
        Self {
            id: entity.id,
            referral_id: entity.referral_id,
            user_id: entity.user_id,
            email_type: entity.email_type,
            to_address: entity.to_address,
            subject: entity.subject,
            body: entity.body,
            status: entity.status,
            error: entity.error,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EmailLogDto {
        EmailLogDto {
            id: self.id,
            referral_id: self.referral_id,
            user_id: self.user_id,
            email_type: self.email_type,
            to_address: self.to_address,
            subject: self.subject,
            status: self.status,
            error: self.error,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for recording a queued email.
#[derive(Debug, Clone)]
pub struct CreateEmailLogParams {
    pub referral_id: Option<i32>,
    pub user_id: Option<i32>,
    pub email_type: EmailType,
    pub to_address: String,
    pub subject: String,
    pub body: Option<String>,
}
