//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including ID generation and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique IDs in tests.
///
/// This atomic counter ensures each factory-created entity gets a unique
/// identifier to prevent collisions in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// This function provides monotonically increasing values for use in
/// generating unique test identifiers across all factories.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a provider and a referral assigned to them.
///
/// The referral is created with status `in_progress` and `accepted_at` set to now,
/// matching the state a referral is left in after a provider accepts it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((provider, referral))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_assigned_referral(
    db: &DatabaseConnection,
) -> Result<(entity::user::Model, entity::referral::Model), DbErr> {
    let provider = crate::factory::user::create_provider(db).await?;
    let referral = create_referral_for_provider(db, &provider).await?;

    Ok((provider, referral))
}

/// Creates an accepted referral assigned to a specific provider.
///
/// # Arguments
/// - `db` - Database connection
/// - `provider` - Provider user the referral is assigned to
///
/// # Returns
/// - `Ok(entity::referral::Model)` - Created referral
/// - `Err(DbErr)` - Database error during creation
pub async fn create_referral_for_provider(
    db: &DatabaseConnection,
    provider: &entity::user::Model,
) -> Result<entity::referral::Model, DbErr> {
    crate::factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .accepted_at(chrono::Utc::now())
        .build()
        .await
}

/// Creates a provider, an assigned referral, and an appointment between them.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((provider, referral, appointment))` - Tuple of created entities
/// - `Err(DbErr)` - Database error during creation
pub async fn create_appointment_with_dependencies(
    db: &DatabaseConnection,
) -> Result<
    (
        entity::user::Model,
        entity::referral::Model,
        entity::appointment::Model,
    ),
    DbErr,
> {
    let (provider, referral) = create_assigned_referral(db).await?;
    let appointment =
        crate::factory::appointment::create_appointment(db, referral.id, provider.id).await?;

    Ok((provider, referral, appointment))
}
