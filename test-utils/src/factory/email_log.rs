//! Email log factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an email log row for a referral.
///
/// # Arguments
/// - `db` - Database connection
/// - `referral_id` - Referral the email belongs to
/// - `email_type` - Email type such as `referral_notification`
/// - `status` - Delivery status (`queued`, `sent`, `failed`)
///
/// # Returns
/// - `Ok(entity::email_log::Model)` - Created email log
/// - `Err(DbErr)` - Database error during insert
pub async fn create_email_log(
    db: &DatabaseConnection,
    referral_id: i32,
    email_type: &str,
    status: &str,
) -> Result<entity::email_log::Model, DbErr> {
    let now = Utc::now();
    entity::email_log::ActiveModel {
        referral_id: ActiveValue::Set(Some(referral_id)),
        user_id: ActiveValue::Set(None),
        email_type: ActiveValue::Set(email_type.to_string()),
        to_address: ActiveValue::Set("recipient@example.com".to_string()),
        subject: ActiveValue::Set(format!("Test email for referral {}", referral_id)),
        body: ActiveValue::Set(None),
        status: ActiveValue::Set(status.to_string()),
        error: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
