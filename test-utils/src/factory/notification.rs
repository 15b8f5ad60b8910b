//! Provider notification factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an unread `general` notification for the provider.
///
/// # Arguments
/// - `db` - Database connection
/// - `provider_id` - Provider receiving the notification
/// - `priority` - Notification priority (`low`, `medium`, `high`, `urgent`)
///
/// # Returns
/// - `Ok(entity::provider_notification::Model)` - Created notification
/// - `Err(DbErr)` - Database error during insert
pub async fn create_notification(
    db: &DatabaseConnection,
    provider_id: i32,
    priority: &str,
) -> Result<entity::provider_notification::Model, DbErr> {
    let now = Utc::now();
    entity::provider_notification::ActiveModel {
        provider_id: ActiveValue::Set(provider_id),
        notification_type: ActiveValue::Set("general".to_string()),
        title: ActiveValue::Set("Test notification".to_string()),
        message: ActiveValue::Set("Please review your referrals".to_string()),
        priority: ActiveValue::Set(priority.to_string()),
        action_required: ActiveValue::Set(false),
        is_read: ActiveValue::Set(false),
        read_at: ActiveValue::Set(None),
        related_referral_id: ActiveValue::Set(None),
        sent_by_user_id: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
