//! Provider availability repository.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, TransactionTrait,
};

use crate::server::model::availability::{Availability, AvailabilitySlotParams};

/// Repository providing database operations for provider availability.
pub struct AvailabilityRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AvailabilityRepository<'a> {
    /// Creates a new AvailabilityRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `AvailabilityRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets a provider's weekly slots ordered by day, then start time.
    pub async fn get_by_provider(&self, provider_id: i32) -> Result<Vec<Availability>, DbErr> {
        let entities = entity::prelude::ProviderAvailability::find()
            .filter(entity::provider_availability::Column::ProviderId.eq(provider_id))
            .order_by_asc(entity::provider_availability::Column::DayOfWeek)
            .order_by_asc(entity::provider_availability::Column::StartTime)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Availability::from_entity).collect())
    }

    /// Replaces all of a provider's slots in one transaction.
    ///
    /// # Arguments
    /// - `provider_id` - Provider whose availability is replaced
    /// - `slots` - New weekly slots; an empty list clears availability
    ///
    /// # Returns
    /// - `Ok(Vec<Availability>)` - The stored slots, ordered by day and start time
    /// - `Err(DbErr)` - Database error; no changes are kept
    pub async fn replace_for_provider(
        &self,
        provider_id: i32,
        slots: Vec<AvailabilitySlotParams>,
    ) -> Result<Vec<Availability>, DbErr> {
        let txn = self.db.begin().await?;

        entity::prelude::ProviderAvailability::delete_many()
            .filter(entity::provider_availability::Column::ProviderId.eq(provider_id))
            .exec(&txn)
            .await?;

        let now = Utc::now();
        for slot in slots {
            entity::provider_availability::ActiveModel {
                provider_id: ActiveValue::Set(provider_id),
                day_of_week: ActiveValue::Set(slot.day_of_week),
                start_time: ActiveValue::Set(slot.start_time),
                end_time: ActiveValue::Set(slot.end_time),
                is_available: ActiveValue::Set(slot.is_available),
                max_appointments: ActiveValue::Set(slot.max_appointments),
                location: ActiveValue::Set(slot.location),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            }
            .insert(&txn)
            .await?;
        }

        txn.commit().await?;

        self.get_by_provider(provider_id).await
    }
}

#[cfg(test)]
mod test;
