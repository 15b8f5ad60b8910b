//! Provider notification repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::notification::{CreateNotificationParams, Notification};

/// Repository providing database operations for provider notifications.
pub struct NotificationRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> NotificationRepository<'a> {
    /// Creates a new NotificationRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `NotificationRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts an unread notification.
    pub async fn create(&self, params: CreateNotificationParams) -> Result<Notification, DbErr> {
        let now = Utc::now();

        let entity = entity::provider_notification::ActiveModel {
            provider_id: ActiveValue::Set(params.provider_id),
            notification_type: ActiveValue::Set(params.notification_type),
            title: ActiveValue::Set(params.title),
            message: ActiveValue::Set(params.message),
            priority: ActiveValue::Set(params.priority),
            action_required: ActiveValue::Set(params.action_required),
            is_read: ActiveValue::Set(false),
            read_at: ActiveValue::Set(None),
            related_referral_id: ActiveValue::Set(params.related_referral_id),
            sent_by_user_id: ActiveValue::Set(params.sent_by_user_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Notification::from_entity(entity))
    }

    /// Gets a provider's notifications, newest first.
    pub async fn get_by_provider(
        &self,
        provider_id: i32,
        unread_only: bool,
    ) -> Result<Vec<Notification>, DbErr> {
        let mut query = entity::prelude::ProviderNotification::find()
            .filter(entity::provider_notification::Column::ProviderId.eq(provider_id));

        if unread_only {
            query = query.filter(entity::provider_notification::Column::IsRead.eq(false));
        }

        let entities = query
            .order_by_desc(entity::provider_notification::Column::CreatedAt)
            .order_by_desc(entity::provider_notification::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Notification::from_entity).collect())
    }

    /// Marks a provider's notification as read.
    ///
    /// # Returns
    /// - `Ok(Some(Notification))` - Updated notification
    /// - `Ok(None)` - Not found or owned by another provider
    pub async fn mark_read(
        &self,
        id: i32,
        provider_id: i32,
    ) -> Result<Option<Notification>, DbErr> {
        let Some(entity) = entity::prelude::ProviderNotification::find_by_id(id)
            .filter(entity::provider_notification::Column::ProviderId.eq(provider_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::provider_notification::ActiveModel = entity.into();
        active.is_read = ActiveValue::Set(true);
        active.read_at = ActiveValue::Set(Some(now));
        active.updated_at = ActiveValue::Set(now);

        let updated = active.update(self.db).await?;

        Ok(Some(Notification::from_entity(updated)))
    }
}

#[cfg(test)]
mod test;
