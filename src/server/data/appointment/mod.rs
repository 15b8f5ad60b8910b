//! Appointment and session note repositories.

pub mod session_note;

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::appointment::{Appointment, CreateAppointmentParams};

/// Repository providing database operations for appointments.
pub struct AppointmentRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AppointmentRepository<'a> {
    /// Creates a new AppointmentRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AppointmentRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a scheduled appointment.
    pub async fn create(&self, params: CreateAppointmentParams) -> Result<Appointment, DbErr> {
        let now = Utc::now();

        let entity = entity::appointment::ActiveModel {
            referral_id: ActiveValue::Set(params.referral_id),
            provider_id: ActiveValue::Set(params.provider_id),
            appointment_date: ActiveValue::Set(params.appointment_date),
            duration_minutes: ActiveValue::Set(params.duration_minutes),
            status: ActiveValue::Set("scheduled".to_string()),
            service_type: ActiveValue::Set(params.service_type),
            location: ActiveValue::Set(params.location),
            appointment_notes: ActiveValue::Set(params.appointment_notes),
            cancellation_reason: ActiveValue::Set(None),
            completed_at: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Appointment::from_entity(entity))
    }

    /// Finds an appointment only if it belongs to the given provider.
    pub async fn find_for_provider(
        &self,
        id: i32,
        provider_id: i32,
    ) -> Result<Option<Appointment>, DbErr> {
        let entity = entity::prelude::Appointment::find_by_id(id)
            .filter(entity::appointment::Column::ProviderId.eq(provider_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Appointment::from_entity))
    }

    /// Gets a provider's appointments in `[start, end)`, earliest first.
    pub async fn get_by_provider_between(
        &self,
        provider_id: i32,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Appointment>, DbErr> {
        let entities = entity::prelude::Appointment::find()
            .filter(entity::appointment::Column::ProviderId.eq(provider_id))
            .filter(entity::appointment::Column::AppointmentDate.gte(start))
            .filter(entity::appointment::Column::AppointmentDate.lt(end))
            .order_by_asc(entity::appointment::Column::AppointmentDate)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Appointment::from_entity).collect())
    }

    /// Sets the status of an appointment.
    ///
    /// Completing an appointment stamps `completed_at`; a cancellation reason is
    /// stored when given.
    ///
    /// # Returns
    /// - `Ok(Some(Appointment))` - Updated appointment
    /// - `Ok(None)` - No appointment with that id
    pub async fn update_status(
        &self,
        id: i32,
        status: &str,
        cancellation_reason: Option<String>,
    ) -> Result<Option<Appointment>, DbErr> {
        let Some(entity) = entity::prelude::Appointment::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let now = Utc::now();
        let mut active: entity::appointment::ActiveModel = entity.into();
        active.status = ActiveValue::Set(status.to_string());
        if status == "completed" {
            active.completed_at = ActiveValue::Set(Some(now));
        }
        if let Some(reason) = cancellation_reason {
            active.cancellation_reason = ActiveValue::Set(Some(reason));
        }
        active.updated_at = ActiveValue::Set(now);

        let updated = active.update(self.db).await?;

        Ok(Some(Appointment::from_entity(updated)))
    }
}

#[cfg(test)]
mod test;
