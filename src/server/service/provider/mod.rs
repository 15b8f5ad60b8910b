//! Self-service operations for the logged-in provider.
//!
//! Every operation is scoped to the provider's own referrals; a referral assigned to
//! someone else is reported as not found.

pub mod schedule;

use chrono::Utc;
use sea_orm::DatabaseConnection;

use crate::{
    model::{
        provider::{
            ActivityDto, ProviderDashboardDto, ProviderPerformanceDto, UpdateProviderProfileDto,
            UpdateReferralStatusDto,
        },
        referral::ReferralStatus,
    },
    server::{
        data::{referral::ReferralRepository, user::UserRepository},
        error::AppError,
        model::{
            referral::{Referral, ReferralFilter, UpdateReferralParams},
            user::{UpdateProfileParams, User},
        },
        util::text::{percentage, title_case},
    },
};

/// Number of referrals shown in the dashboard activity feed.
const RECENT_ACTIVITY_LIMIT: u64 = 5;

pub struct ProviderService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProviderService<'a> {
    /// Creates a new ProviderService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `ProviderService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Builds the provider's dashboard counters and recent activity feed.
    ///
    /// `accepted_referrals` covers both accepted and in-progress referrals, and each of
    /// those counts as an active participant.
    pub async fn get_dashboard(&self, provider_id: i32) -> Result<ProviderDashboardDto, AppError> {
        let repo = ReferralRepository::new(self.db);

        let referrals = repo.get_by_provider(provider_id).await?;
        let count_status = |statuses: &[ReferralStatus]| {
            referrals
                .iter()
                .filter(|r| statuses.iter().any(|s| s.as_str() == r.status))
                .count() as u64
        };

        let new_referrals = count_status(&[ReferralStatus::New]);
        let accepted_referrals =
            count_status(&[ReferralStatus::Accepted, ReferralStatus::InProgress]);
        let completed_referrals = count_status(&[ReferralStatus::Completed]);

        let recent_activity = repo
            .get_recently_updated_by_provider(provider_id, None, RECENT_ACTIVITY_LIMIT)
            .await?
            .into_iter()
            .map(|referral| ActivityDto {
                activity_type: "referral_update".to_string(),
                title: format!(
                    "Referral #{} - {}",
                    referral.id,
                    referral.participant_name()
                ),
                description: format!("Status: {}", title_case(&referral.status)),
                timestamp: referral.updated_at,
                referral_id: referral.id,
            })
            .collect();

        Ok(ProviderDashboardDto {
            total_referrals: referrals.len() as u64,
            new_referrals,
            accepted_referrals,
            completed_referrals,
            active_participants: accepted_referrals,
            recent_activity,
        })
    }

    /// Lists the provider's referrals newest first.
    pub async fn get_referrals(
        &self,
        provider_id: i32,
        status: Option<ReferralStatus>,
        service_type: Option<String>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, AppError> {
        let filter = ReferralFilter {
            status: status.map(|status| status.as_str().to_string()),
            service_type,
            assigned_provider_id: Some(provider_id),
            ..Default::default()
        };

        Ok(ReferralRepository::new(self.db)
            .list(&filter, skip, limit)
            .await?)
    }

    /// Gets one of the provider's referrals.
    ///
    /// # Returns
    /// - `Ok(Referral)` - Referral assigned to the provider
    /// - `Err(AppError::NotFound)` - Missing or assigned to someone else
    pub async fn get_referral(&self, provider_id: i32, id: i32) -> Result<Referral, AppError> {
        ReferralRepository::new(self.db)
            .find_for_provider(id, provider_id)
            .await?
            .ok_or_else(referral_not_found)
    }

    /// Sets a referral's status, replacing the notes when given.
    ///
    /// Moving to `accepted` stamps `accepted_at`.
    pub async fn update_referral_status(
        &self,
        provider_id: i32,
        id: i32,
        dto: UpdateReferralStatusDto,
    ) -> Result<Referral, AppError> {
        let accepted_at = (dto.status == ReferralStatus::Accepted).then(Utc::now);

        self.update_own_referral(
            provider_id,
            id,
            UpdateReferralParams {
                status: Some(dto.status.as_str().to_string()),
                notes: dto.notes.filter(|notes| !notes.is_empty()),
                accepted_at,
                ..Default::default()
            },
        )
        .await
    }

    /// Accepts an assigned referral.
    pub async fn accept_referral(&self, provider_id: i32, id: i32) -> Result<Referral, AppError> {
        self.update_own_referral(
            provider_id,
            id,
            UpdateReferralParams {
                status: Some(ReferralStatus::Accepted.as_str().to_string()),
                accepted_at: Some(Utc::now()),
                ..Default::default()
            },
        )
        .await
    }

    /// Declines an assigned referral, recording the reason in the notes.
    pub async fn decline_referral(
        &self,
        provider_id: i32,
        id: i32,
        reason: &str,
    ) -> Result<Referral, AppError> {
        self.update_own_referral(
            provider_id,
            id,
            UpdateReferralParams {
                status: Some(ReferralStatus::Declined.as_str().to_string()),
                notes: Some(format!("Declined: {}", reason)),
                ..Default::default()
            },
        )
        .await
    }

    /// Computes the provider's lifetime acceptance and completion rates.
    ///
    /// A referral counts as accepted once it reaches accepted, in progress or completed.
    pub async fn get_performance(
        &self,
        provider_id: i32,
    ) -> Result<ProviderPerformanceDto, AppError> {
        let referrals = ReferralRepository::new(self.db)
            .get_by_provider(provider_id)
            .await?;

        let total_referrals = referrals.len() as u64;
        let mut accepted_referrals = 0;
        let mut completed_referrals = 0;
        let mut declined_referrals = 0;

        for referral in &referrals {
            if referral.status == ReferralStatus::Accepted.as_str()
                || referral.status == ReferralStatus::InProgress.as_str()
                || referral.status == ReferralStatus::Completed.as_str()
            {
                accepted_referrals += 1;
            }
            if referral.status == ReferralStatus::Completed.as_str() {
                completed_referrals += 1;
            }
            if referral.status == ReferralStatus::Declined.as_str() {
                declined_referrals += 1;
            }
        }

        Ok(ProviderPerformanceDto {
            total_referrals,
            accepted_referrals,
            completed_referrals,
            declined_referrals,
            acceptance_rate: percentage(accepted_referrals, total_referrals),
            completion_rate: percentage(completed_referrals, accepted_referrals),
        })
    }

    /// Updates the provider's own profile fields.
    pub async fn update_profile(
        &self,
        provider_id: i32,
        dto: UpdateProviderProfileDto,
    ) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .update_profile(provider_id, UpdateProfileParams::from_dto(dto))
            .await?
            .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))
    }

    async fn update_own_referral(
        &self,
        provider_id: i32,
        id: i32,
        params: UpdateReferralParams,
    ) -> Result<Referral, AppError> {
        let repo = ReferralRepository::new(self.db);

        if repo.find_for_provider(id, provider_id).await?.is_none() {
            return Err(referral_not_found());
        }

        let referral = repo.update(id, params).await?.ok_or_else(referral_not_found)?;

        tracing::info!(
            "Provider {} set referral #{} to {}",
            provider_id,
            referral.id,
            referral.status
        );

        Ok(referral)
    }
}

fn referral_not_found() -> AppError {
    AppError::NotFound("Referral not found or access denied".to_string())
}

#[cfg(test)]
mod test;
