//! Provider notification domain model.

use chrono::{DateTime, Utc};

use crate::model::notification::NotificationDto;

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: i32,
    pub provider_id: i32,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub action_required: bool,
    pub is_read: bool,
    pub read_at: Option<DateTime<Utc>>,
    pub related_referral_id: Option<i32>,
    pub sent_by_user_id: Option<i32>,
    pub created_at: DateTime<Utc>,
}

impl Notification {
    pub fn from_entity(entity: entity::provider_notification::Model) -> Self {
        Self {
            id: entity.id,
            provider_id: entity.provider_id,
            notification_type: entity.notification_type,
            title: entity.title,
            message: entity.message,
            priority: entity.priority,
            action_required: entity.action_required,
            is_read: entity.is_read,
            read_at: entity.read_at,
            related_referral_id: entity.related_referral_id,
            sent_by_user_id: entity.sent_by_user_id,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> NotificationDto {
        NotificationDto {
            id: self.id,
            provider_id: self.provider_id,
            notification_type: self.notification_type,
            title: self.title,
            message: self.message,
            priority: self.priority,
            action_required: self.action_required,
            is_read: self.is_read,
            read_at: self.read_at,
            related_referral_id: self.related_referral_id,
            sent_by_user_id: self.sent_by_user_id,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateNotificationParams {
    pub provider_id: i32,
    pub notification_type: String,
    pub title: String,
    pub message: String,
    pub priority: String,
    pub action_required: bool,
    pub related_referral_id: Option<i32>,
    pub sent_by_user_id: Option<i32>,
}
