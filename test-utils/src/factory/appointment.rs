//! Appointment factory for creating test appointment entities.

use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test appointments.
///
/// Defaults to a 60 minute `scheduled` physiotherapy appointment one day from now.
pub struct AppointmentFactory<'a> {
    db: &'a DatabaseConnection,
    referral_id: i32,
    provider_id: i32,
    appointment_date: DateTime<Utc>,
    duration_minutes: i32,
    status: String,
}

impl<'a> AppointmentFactory<'a> {
    pub fn new(db: &'a DatabaseConnection, referral_id: i32, provider_id: i32) -> Self {
        Self {
            db,
            referral_id,
            provider_id,
            appointment_date: Utc::now() + Duration::days(1),
            duration_minutes: 60,
            status: "scheduled".to_string(),
        }
    }

    pub fn appointment_date(mut self, date: DateTime<Utc>) -> Self {
        self.appointment_date = date;
        self
    }

    pub fn duration_minutes(mut self, minutes: i32) -> Self {
        self.duration_minutes = minutes;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub async fn build(self) -> Result<entity::appointment::Model, DbErr> {
        let now = Utc::now();
        entity::appointment::ActiveModel {
            referral_id: ActiveValue::Set(self.referral_id),
            provider_id: ActiveValue::Set(self.provider_id),
            appointment_date: ActiveValue::Set(self.appointment_date),
            duration_minutes: ActiveValue::Set(self.duration_minutes),
            status: ActiveValue::Set(self.status),
            service_type: ActiveValue::Set("physiotherapy".to_string()),
            location: ActiveValue::Set(None),
            appointment_notes: ActiveValue::Set(None),
            cancellation_reason: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a scheduled appointment with default values.
pub async fn create_appointment(
    db: &DatabaseConnection,
    referral_id: i32,
    provider_id: i32,
) -> Result<entity::appointment::Model, DbErr> {
    AppointmentFactory::new(db, referral_id, provider_id)
        .build()
        .await
}
