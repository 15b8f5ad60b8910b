//! Admin oversight of providers: assignment, deactivation, alerts and reviews.
//!
//! Read-only analytics live in [`analytics`].

pub mod analytics;

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        notification::{SendNotificationDto, SendNotificationResultDto},
        provider_admin::{
            AdminDashboardSummaryDto, AdminProviderDashboardDto, AssignReferralDto,
            BulkAssignDto, BulkAssignResultDto, CreatePerformanceReviewDto,
            DeactivateProviderDto, DeactivationResultDto, FailedAssignmentDto,
            ProviderAlertDto, ProviderCountsDto, ProviderInfoDto, ProviderStatsDto,
            ProviderWithStatsDto, ReassignReferralDto, ReferralCountsDto,
        },
        referral::{ReferralPriority, ReferralStatus},
        user::UserRole,
    },
    server::{
        data::{
            notification::NotificationRepository,
            performance_review::PerformanceReviewRepository,
            referral::{ReferralRepository, ACTIVE_STATUSES},
            user::UserRepository,
        },
        error::{internal::InternalError, AppError},
        model::{
            notification::CreateNotificationParams,
            performance_review::{CreatePerformanceReviewParams, PerformanceReview},
            referral::{Referral, ReferralFilter, UpdateReferralParams},
            user::User,
        },
        service::{
            email::{mailer::Mailer, EmailService},
            provider::ProviderService,
        },
        util::{date::start_of_day, text::percentage},
    },
};

/// A `new` referral older than this many days is overdue for a response.
const RESPONSE_OVERDUE_DAYS: i64 = 3;
/// An `in_progress` referral accepted longer ago than this is long-running.
const LONG_RUNNING_DAYS: i64 = 30;
/// More overdue referrals than this raises the alert severity to high.
const HIGH_SEVERITY_OVERDUE: u64 = 5;

pub struct ProviderAdminService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ProviderAdminService<'a> {
    /// Creates a new ProviderAdminService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `ProviderAdminService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists providers with their referral statistics and latest activity.
    ///
    /// # Arguments
    /// - `active_only` - Leave out deactivated providers
    /// - `service_type` - Only providers offering exactly this service
    pub async fn list_providers(
        &self,
        active_only: bool,
        service_type: Option<&str>,
    ) -> Result<Vec<ProviderWithStatsDto>, AppError> {
        let providers = UserRepository::new(self.db)
            .get_providers(active_only, service_type)
            .await?;
        let referral_repo = ReferralRepository::new(self.db);

        let mut result = Vec::with_capacity(providers.len());
        for provider in providers {
            let referrals = referral_repo.get_by_provider(provider.id).await?;

            let total_referrals = referrals.len() as u64;
            let active_referrals = count_in(
                &referrals,
                &[ReferralStatus::Accepted, ReferralStatus::InProgress],
            );
            let completed_referrals = count_in(&referrals, &[ReferralStatus::Completed]);
            let latest_activity = referrals.iter().map(|r| r.updated_at).max();

            result.push(ProviderWithStatsDto {
                id: provider.id,
                first_name: provider.first_name,
                last_name: provider.last_name,
                email: provider.email,
                phone_number: provider.phone_number,
                service_type: provider.service_type,
                provider_license: provider.provider_license,
                provider_agency: provider.provider_agency,
                is_active: provider.is_active,
                created_at: provider.created_at,
                last_login: provider.last_login,
                stats: ProviderStatsDto {
                    total_referrals,
                    active_referrals,
                    completed_referrals,
                    completion_rate: percentage(completed_referrals, total_referrals),
                },
                latest_activity,
            });
        }

        Ok(result)
    }

    /// Gets a provider's own dashboard together with profile details and alerts.
    pub async fn get_provider_dashboard(
        &self,
        provider_id: i32,
    ) -> Result<AdminProviderDashboardDto, AppError> {
        let provider = self.find_provider(provider_id).await?;

        let dashboard = ProviderService::new(self.db)
            .get_dashboard(provider_id)
            .await?;
        let alerts = self.provider_alerts(&provider).await?;

        Ok(AdminProviderDashboardDto {
            provider_info: ProviderInfoDto {
                id: provider.id,
                name: provider.full_name(),
                email: provider.email,
                service_type: provider.service_type,
                agency: provider.provider_agency,
                license: provider.provider_license,
                is_active: provider.is_active,
                last_login: provider.last_login,
            },
            dashboard,
            alerts,
        })
    }

    /// Lists referrals waiting for a provider, newest first.
    ///
    /// Declined referrals are included because they need a new assignment.
    pub async fn get_unassigned_referrals(
        &self,
        service_type: Option<&str>,
        priority: Option<ReferralPriority>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, AppError> {
        Ok(ReferralRepository::new(self.db)
            .get_unassigned(
                service_type,
                priority.as_ref().map(ReferralPriority::as_str),
                skip,
                limit,
            )
            .await?)
    }

    /// Assigns a referral to a provider and notifies them.
    ///
    /// # Returns
    /// - `Ok(Referral)` - Referral with status `assigned`
    /// - `Err(AppError::BadRequest)` - Missing referral, unusable provider or service mismatch
    pub async fn assign_referral(
        &self,
        referral_id: i32,
        dto: AssignReferralDto,
        assigned_by: i32,
    ) -> Result<Referral, AppError> {
        let notes = dto
            .notes
            .filter(|notes| !notes.trim().is_empty())
            .map(|notes| format!("Assigned by admin: {}", notes));

        self.assign(
            referral_id,
            dto.provider_id,
            dto.priority.unwrap_or_default(),
            notes,
            assigned_by,
        )
        .await
    }

    /// Moves a referral to another provider with medium priority.
    pub async fn reassign_referral(
        &self,
        referral_id: i32,
        dto: ReassignReferralDto,
        reassigned_by: i32,
    ) -> Result<Referral, AppError> {
        self.assign(
            referral_id,
            dto.new_provider_id,
            ReferralPriority::Medium,
            Some(format!("Reassigned: {}", dto.reason)),
            reassigned_by,
        )
        .await
    }

    /// Assigns each referral in turn, collecting failures instead of stopping.
    pub async fn bulk_assign(
        &self,
        dto: BulkAssignDto,
        assigned_by: i32,
    ) -> Result<BulkAssignResultDto, AppError> {
        let total_requested = dto.referral_ids.len();
        let mut successfully_assigned = 0;
        let mut failed_assignments = Vec::new();

        for referral_id in dto.referral_ids {
            let result = self
                .assign_referral(
                    referral_id,
                    AssignReferralDto {
                        provider_id: dto.provider_id,
                        priority: dto.priority,
                        notes: dto.notes.clone(),
                    },
                    assigned_by,
                )
                .await;

            match result {
                Ok(_) => successfully_assigned += 1,
                Err(AppError::BadRequest(error)) => {
                    failed_assignments.push(FailedAssignmentDto { referral_id, error })
                }
                Err(e) => return Err(e),
            }
        }

        tracing::info!(
            "Bulk assigned {}/{} referrals to provider {}",
            successfully_assigned,
            total_requested,
            dto.provider_id
        );

        Ok(BulkAssignResultDto {
            total_requested,
            successfully_assigned,
            failed_assignments,
            success_rate: percentage(successfully_assigned as u64, total_requested as u64),
        })
    }

    /// Reactivates a provider account.
    pub async fn activate_provider(&self, provider_id: i32) -> Result<User, AppError> {
        self.find_provider(provider_id).await?;

        let provider = UserRepository::new(self.db)
            .set_active(provider_id, true)
            .await?
            .ok_or_else(provider_not_found)?;

        tracing::info!("Activated provider {}", provider_id);

        Ok(provider)
    }

    /// Deactivates a provider, optionally handing their open referrals to others.
    ///
    /// Each assigned, accepted or in-progress referral goes to the first other active
    /// provider able to take it, or back to `new` without a provider when none can.
    /// All changes commit together.
    pub async fn deactivate_provider(
        &self,
        provider_id: i32,
        dto: DeactivateProviderDto,
    ) -> Result<DeactivationResultDto, AppError> {
        self.find_provider(provider_id).await?;

        let txn = self.db.begin().await?;
        let referral_repo = ReferralRepository::new(&txn);
        let user_repo = UserRepository::new(&txn);

        let active_referrals = referral_repo
            .get_by_provider_and_statuses(provider_id, &ACTIVE_STATUSES)
            .await?;

        let mut reassigned = 0;
        let mut unassigned = 0;

        if dto.reassign_referrals {
            for referral in &active_referrals {
                let suitable = user_repo
                    .get_suitable_providers(&referral.referred_for, Some(provider_id))
                    .await?;

                let params = match suitable.first() {
                    Some(new_provider) => {
                        reassigned += 1;
                        UpdateReferralParams {
                            assigned_provider_id: Some(Some(new_provider.id)),
                            status: Some(ReferralStatus::Assigned.as_str().to_string()),
                            notes: Some(format!(
                                "Reassigned due to provider deactivation: {}",
                                dto.reason
                            )),
                            ..Default::default()
                        }
                    }
                    None => {
                        unassigned += 1;
                        UpdateReferralParams {
                            assigned_provider_id: Some(None),
                            status: Some(ReferralStatus::New.as_str().to_string()),
                            notes: Some(format!(
                                "Unassigned due to provider deactivation: {}",
                                dto.reason
                            )),
                            ..Default::default()
                        }
                    }
                };

                referral_repo.update(referral.id, params).await?;
            }
        }

        user_repo.set_active(provider_id, false).await?;

        txn.commit().await?;

        tracing::info!(
            "Deactivated provider {}: {} referrals reassigned, {} unassigned",
            provider_id,
            reassigned,
            unassigned
        );

        Ok(DeactivationResultDto {
            success: true,
            message: "Provider deactivated successfully".to_string(),
            active_referrals_found: active_referrals.len() as u64,
            reassigned,
            unassigned,
        })
    }

    /// Lists a provider's referrals newest first, filtered by status and creation date.
    pub async fn get_provider_referrals(
        &self,
        provider_id: i32,
        status: Option<ReferralStatus>,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, AppError> {
        let filter = ReferralFilter {
            status: status.map(|status| status.as_str().to_string()),
            assigned_provider_id: Some(provider_id),
            created_from: start_date.map(start_of_day),
            created_before: end_date.map(|date| start_of_day(date) + Duration::days(1)),
            ..Default::default()
        };

        Ok(ReferralRepository::new(self.db)
            .list(&filter, skip, limit)
            .await?)
    }

    /// Stores a notification for a provider and emails them a copy.
    ///
    /// Email delivery is best-effort; `email_sent` reports the outcome.
    pub async fn send_notification<M: Mailer>(
        &self,
        provider_id: i32,
        dto: SendNotificationDto,
        sent_by: i32,
        email: &EmailService<'_, M>,
    ) -> Result<SendNotificationResultDto, AppError> {
        if dto.title.trim().is_empty() || dto.message.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Notification title and message are required".to_string(),
            ));
        }

        let provider = self.find_provider(provider_id).await?;

        let notification = NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                provider_id,
                notification_type: dto.notification_type,
                title: dto.title,
                message: dto.message,
                priority: dto.priority.as_str().to_string(),
                action_required: dto.action_required,
                related_referral_id: None,
                sent_by_user_id: Some(sent_by),
            })
            .await?;

        let email_sent = email.send_provider_message(&provider, &notification).await;

        Ok(SendNotificationResultDto {
            notification: notification.into_dto(),
            email_sent,
        })
    }

    /// Records a performance review with a snapshot of the provider's current metrics.
    pub async fn create_performance_review(
        &self,
        provider_id: i32,
        dto: CreatePerformanceReviewDto,
        reviewed_by: i32,
    ) -> Result<PerformanceReview, AppError> {
        if !(1..=5).contains(&dto.rating) {
            return Err(AppError::BadRequest(
                "Rating must be between 1 and 5".to_string(),
            ));
        }

        self.find_provider(provider_id).await?;

        let performance = ProviderService::new(self.db)
            .get_performance(provider_id)
            .await?;
        let metrics_snapshot =
            serde_json::to_value(&performance).map_err(|source| InternalError::Serialize {
                what: "performance metrics",
                source,
            })?;

        let review = PerformanceReviewRepository::new(self.db)
            .create(CreatePerformanceReviewParams {
                provider_id,
                reviewed_by_user_id: reviewed_by,
                rating: dto.rating,
                comments: dto.comments,
                goals: dto.goals,
                metrics_snapshot,
            })
            .await?;

        tracing::info!(
            "Recorded performance review #{} for provider {}",
            review.id,
            provider_id
        );

        Ok(review)
    }

    /// Gets the counts, recent referrals and top alerts shown on the admin dashboard.
    pub async fn get_dashboard_summary(&self) -> Result<AdminDashboardSummaryDto, AppError> {
        let user_repo = UserRepository::new(self.db);
        let referral_repo = ReferralRepository::new(self.db);

        let total_providers = user_repo.count_providers(None).await?;
        let active_providers = user_repo.count_providers(Some(true)).await?;

        let total = referral_repo.count(&ReferralFilter::default()).await?;
        let unassigned = referral_repo.count_without_provider(None).await?;
        let overdue = referral_repo
            .count(&ReferralFilter {
                status: Some(ReferralStatus::New.as_str().to_string()),
                created_before: Some(Utc::now() - Duration::days(RESPONSE_OVERDUE_DAYS)),
                ..Default::default()
            })
            .await?;

        let recent_referrals = referral_repo
            .list(&ReferralFilter::default(), 0, 5)
            .await?
            .into_iter()
            .map(Referral::into_dto)
            .collect();

        let mut alerts = self.get_provider_alerts(Some("high")).await?;
        alerts.truncate(3);

        Ok(AdminDashboardSummaryDto {
            providers: ProviderCountsDto {
                total: total_providers,
                active: active_providers,
                inactive: total_providers.saturating_sub(active_providers),
            },
            referrals: ReferralCountsDto {
                total,
                unassigned,
                overdue,
            },
            recent_referrals,
            alerts,
        })
    }

    /// Collects alerts for every active provider, most severe first.
    ///
    /// # Arguments
    /// - `severity` - Only keep alerts of this severity
    pub async fn get_provider_alerts(
        &self,
        severity: Option<&str>,
    ) -> Result<Vec<ProviderAlertDto>, AppError> {
        let providers = UserRepository::new(self.db)
            .get_providers(true, None)
            .await?;

        let mut alerts = Vec::new();
        for provider in &providers {
            alerts.extend(
                self.provider_alerts(provider)
                    .await?
                    .into_iter()
                    .filter(|alert| severity.map_or(true, |severity| alert.severity == severity)),
            );
        }

        sort_alerts(&mut alerts);

        Ok(alerts)
    }

    /// Builds the overdue and long-running alerts for one provider.
    async fn provider_alerts(&self, provider: &User) -> Result<Vec<ProviderAlertDto>, AppError> {
        let repo = ReferralRepository::new(self.db);
        let now = Utc::now();

        let overdue = repo
            .count(&ReferralFilter {
                status: Some(ReferralStatus::New.as_str().to_string()),
                assigned_provider_id: Some(provider.id),
                created_before: Some(now - Duration::days(RESPONSE_OVERDUE_DAYS)),
                ..Default::default()
            })
            .await?;
        let long_running = repo
            .count_long_running(provider.id, now - Duration::days(LONG_RUNNING_DAYS))
            .await?;

        let mut alerts = Vec::new();
        if overdue > 0 {
            alerts.push(ProviderAlertDto {
                alert_type: "overdue_referrals".to_string(),
                severity: if overdue > HIGH_SEVERITY_OVERDUE {
                    "high"
                } else {
                    "medium"
                }
                .to_string(),
                message: format!("{} referrals overdue for response", overdue),
                count: overdue,
                provider_id: provider.id,
                provider_name: provider.full_name(),
            });
        }
        if long_running > 0 {
            alerts.push(ProviderAlertDto {
                alert_type: "long_running".to_string(),
                severity: "medium".to_string(),
                message: format!(
                    "{} referrals in progress for over {} days",
                    long_running, LONG_RUNNING_DAYS
                ),
                count: long_running,
                provider_id: provider.id,
                provider_name: provider.full_name(),
            });
        }

        Ok(alerts)
    }

    /// Validates and applies an assignment, then creates the provider notification.
    async fn assign(
        &self,
        referral_id: i32,
        provider_id: i32,
        priority: ReferralPriority,
        notes: Option<String>,
        assigned_by: i32,
    ) -> Result<Referral, AppError> {
        let referral_repo = ReferralRepository::new(self.db);

        let referral = referral_repo
            .find_by_id(referral_id)
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Referral {} not found", referral_id)))?;

        let provider = UserRepository::new(self.db)
            .find_by_id(provider_id)
            .await?
            .filter(|user| user.has_role(UserRole::Provider) && user.is_active)
            .ok_or_else(|| {
                AppError::BadRequest(format!(
                    "Provider {} not found or not active",
                    provider_id
                ))
            })?;

        if !provider.handles_service_type(&referral.referred_for) {
            return Err(AppError::BadRequest(format!(
                "Provider {} does not offer {}",
                provider_id, referral.referred_for
            )));
        }

        let referral = referral_repo
            .update(
                referral_id,
                UpdateReferralParams {
                    assigned_provider_id: Some(Some(provider_id)),
                    status: Some(ReferralStatus::Assigned.as_str().to_string()),
                    priority: Some(priority.as_str().to_string()),
                    notes,
                    ..Default::default()
                },
            )
            .await?
            .ok_or_else(|| AppError::BadRequest(format!("Referral {} not found", referral_id)))?;

        NotificationRepository::new(self.db)
            .create(CreateNotificationParams {
                provider_id,
                notification_type: "referral_assigned".to_string(),
                title: format!("New referral #{} assigned", referral.id),
                message: format!(
                    "{} has been referred for {}.",
                    referral.participant_name(),
                    referral.referred_for
                ),
                priority: priority.as_str().to_string(),
                action_required: true,
                related_referral_id: Some(referral.id),
                sent_by_user_id: Some(assigned_by),
            })
            .await?;

        tracing::info!(
            "Assigned referral #{} to provider {}",
            referral.id,
            provider_id
        );

        Ok(referral)
    }

    /// Finds a user that has the provider role.
    async fn find_provider(&self, provider_id: i32) -> Result<User, AppError> {
        UserRepository::new(self.db)
            .find_by_id(provider_id)
            .await?
            .filter(|user| user.has_role(UserRole::Provider))
            .ok_or_else(provider_not_found)
    }
}

fn provider_not_found() -> AppError {
    AppError::NotFound("Provider not found".to_string())
}

fn count_in(referrals: &[Referral], statuses: &[ReferralStatus]) -> u64 {
    referrals
        .iter()
        .filter(|r| statuses.iter().any(|s| s.as_str() == r.status))
        .count() as u64
}

/// Ranks alert severities; unknown severities sort last.
fn severity_rank(severity: &str) -> u8 {
    match severity {
        "critical" => 4,
        "high" => 3,
        "medium" => 2,
        "low" => 1,
        _ => 0,
    }
}

/// Sorts by severity, then count, both descending.
fn sort_alerts(alerts: &mut [ProviderAlertDto]) {
    alerts.sort_by(|a, b| {
        (severity_rank(&b.severity), b.count).cmp(&(severity_rank(&a.severity), a.count))
    });
}

#[cfg(test)]
mod test;
