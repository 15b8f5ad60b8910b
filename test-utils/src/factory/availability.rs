//! Provider availability factory.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an available 09:00-17:00 slot for the provider on `day_of_week` (0 = Monday).
pub async fn create_availability(
    db: &DatabaseConnection,
    provider_id: i32,
    day_of_week: i32,
) -> Result<entity::provider_availability::Model, DbErr> {
    let now = Utc::now();
    entity::provider_availability::ActiveModel {
        provider_id: ActiveValue::Set(provider_id),
        day_of_week: ActiveValue::Set(day_of_week),
        start_time: ActiveValue::Set("09:00".to_string()),
        end_time: ActiveValue::Set("17:00".to_string()),
        is_available: ActiveValue::Set(true),
        max_appointments: ActiveValue::Set(8),
        location: ActiveValue::Set(None),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
    .insert(db)
    .await
}
