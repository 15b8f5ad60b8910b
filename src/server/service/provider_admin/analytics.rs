//! Provider workload, performance and capacity analytics.

use std::collections::HashMap;

use chrono::{Duration, NaiveDate, Utc};

use crate::{
    model::{
        provider_admin::{
            AssignmentSuggestionDto, DetailedPerformanceDto, OverdueReferralDto,
            PerformanceSummaryDto, PerformanceTotalsDto, ProviderBriefDto, ProviderCapacityDto,
            ProviderPerformanceRowDto, ProviderReportRowDto, ProviderSummaryReportDto,
            ProviderWorkloadDto, ReportTotalsDto, TimelineEventDto, WorkloadAnalyticsDto,
        },
        referral::ReferralStatus,
        user::UserRole,
    },
    server::{
        data::{referral::ReferralRepository, user::UserRepository},
        error::AppError,
        model::{
            referral::{Referral, ReferralFilter},
            user::User,
        },
        service::provider::ProviderService,
        util::{
            date::{days_before, DateWindow},
            text::{percentage, round2, title_case},
        },
    },
};

use super::{count_in, ProviderAdminService, LONG_RUNNING_DAYS};

/// Active referrals at which workload utilization reaches 100%.
const WORKLOAD_CAPACITY: u64 = 10;
/// Active referrals a provider can carry before they stop taking new work.
const MAX_CAPACITY: u64 = 15;
/// Utilization at or above which a provider is not accepting referrals.
const ACCEPTING_THRESHOLD: f64 = 90.0;
const MAX_SUGGESTIONS: usize = 5;
const PERFORMANCE_DEFAULT_DAYS: i64 = 90;
const REPORT_DEFAULT_DAYS: i64 = 30;

const WORKING_STATUSES: [ReferralStatus; 2] =
    [ReferralStatus::Accepted, ReferralStatus::InProgress];

impl<'a> ProviderAdminService<'a> {
    /// Lists referrals that are late.
    ///
    /// A referral is late when it has been `new` for more than `days_overdue` days, or has
    /// been `in_progress` for more than 30 days since acceptance.
    pub async fn get_overdue_referrals(
        &self,
        days_overdue: i64,
        provider_id: Option<i32>,
    ) -> Result<Vec<OverdueReferralDto>, AppError> {
        let now = Utc::now();
        let new_before = days_before(now, days_overdue, "days_overdue")?;
        let referrals = ReferralRepository::new(self.db)
            .get_overdue(new_before, now - Duration::days(LONG_RUNNING_DAYS), provider_id)
            .await?;

        let user_repo = UserRepository::new(self.db);
        let mut providers: HashMap<i32, Option<User>> = HashMap::new();

        let mut result = Vec::with_capacity(referrals.len());
        for referral in referrals {
            let provider = match referral.assigned_provider_id {
                Some(id) => {
                    if !providers.contains_key(&id) {
                        providers.insert(id, user_repo.find_by_id(id).await?);
                    }
                    providers.get(&id).and_then(Option::as_ref)
                }
                None => None,
            };

            let since = referral.accepted_at.unwrap_or(referral.created_at);

            result.push(OverdueReferralDto {
                referral_id: referral.id,
                participant_name: referral.participant_name(),
                service_type: referral.referred_for,
                status: referral.status,
                created_at: referral.created_at,
                days_overdue: (now - since).num_days(),
                provider: match provider {
                    Some(provider) => ProviderBriefDto {
                        id: Some(provider.id),
                        name: provider.full_name(),
                        email: Some(provider.email.clone()),
                    },
                    None => ProviderBriefDto {
                        id: None,
                        name: "Unassigned".to_string(),
                        email: None,
                    },
                },
            });
        }

        Ok(result)
    }

    /// Gets a provider's lifetime performance plus response and completion times for
    /// referrals created in the window (default: last 90 days).
    pub async fn get_provider_performance(
        &self,
        provider_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
    ) -> Result<DetailedPerformanceDto, AppError> {
        let provider = self.find_provider(provider_id).await?;
        let window = DateWindow::resolve(start_date, end_date, PERFORMANCE_DEFAULT_DAYS);

        self.detailed_performance(&provider, &window).await
    }

    /// Gets how active referrals are spread across active providers.
    pub async fn get_workload_analytics(&self) -> Result<WorkloadAnalyticsDto, AppError> {
        let providers = UserRepository::new(self.db)
            .get_providers(true, None)
            .await?;
        let referral_repo = ReferralRepository::new(self.db);

        let mut workload_by_provider = Vec::with_capacity(providers.len());
        let mut total_active_referrals = 0;
        for provider in &providers {
            let referrals = referral_repo.get_by_provider(provider.id).await?;
            let active_referrals = count_in(&referrals, &WORKING_STATUSES);
            total_active_referrals += active_referrals;

            workload_by_provider.push(ProviderWorkloadDto {
                provider_id: provider.id,
                provider_name: provider.full_name(),
                service_type: provider.service_type.clone(),
                active_referrals,
                total_referrals: referrals.len() as u64,
                capacity_utilization: capped_utilization(active_referrals, WORKLOAD_CAPACITY),
            });
        }

        let unassigned_referrals = referral_repo
            .count_without_provider(Some(ReferralStatus::New))
            .await?;

        let active_counts: Vec<u64> = workload_by_provider
            .iter()
            .map(|w| w.active_referrals)
            .collect();
        let average_workload = if providers.is_empty() {
            0.0
        } else {
            round2(total_active_referrals as f64 / providers.len() as f64)
        };

        Ok(WorkloadAnalyticsDto {
            total_active_providers: providers.len() as u64,
            total_active_referrals,
            unassigned_referrals,
            average_workload,
            workload_balance_score: balance_score(&active_counts),
            workload_by_provider,
        })
    }

    /// Ranks active providers by completion rate over the last `period_days` days.
    ///
    /// Handled referrals are those created in the period; completed ones are those
    /// completed (last updated) in the period.
    pub async fn get_performance_summary(
        &self,
        period_days: i64,
    ) -> Result<PerformanceSummaryDto, AppError> {
        let cutoff = days_before(Utc::now(), period_days, "period_days")?;
        let providers = UserRepository::new(self.db)
            .get_providers(true, None)
            .await?;
        let referral_repo = ReferralRepository::new(self.db);

        let total_referrals = referral_repo
            .count(&ReferralFilter {
                created_from: Some(cutoff),
                ..Default::default()
            })
            .await?;
        let completed_referrals = referral_repo
            .count(&ReferralFilter {
                status: Some(ReferralStatus::Completed.as_str().to_string()),
                updated_from: Some(cutoff),
                ..Default::default()
            })
            .await?;

        let mut all_providers = Vec::with_capacity(providers.len());
        for provider in &providers {
            let referrals = referral_repo.get_by_provider(provider.id).await?;
            let referrals_handled =
                referrals.iter().filter(|r| r.created_at >= cutoff).count() as u64;
            let referrals_completed = referrals
                .iter()
                .filter(|r| {
                    r.status == ReferralStatus::Completed.as_str() && r.updated_at >= cutoff
                })
                .count() as u64;

            all_providers.push(ProviderPerformanceRowDto {
                provider_id: provider.id,
                provider_name: provider.full_name(),
                service_type: provider.service_type.clone(),
                referrals_handled,
                referrals_completed,
                completion_rate: percentage(referrals_completed, referrals_handled),
            });
        }

        all_providers.sort_by(|a, b| b.completion_rate.total_cmp(&a.completion_rate));
        let top_performers = all_providers.iter().take(5).cloned().collect();

        Ok(PerformanceSummaryDto {
            period_days,
            summary: PerformanceTotalsDto {
                total_providers: providers.len() as u64,
                total_referrals,
                completed_referrals,
                overall_completion_rate: percentage(completed_referrals, total_referrals),
            },
            top_performers,
            all_providers,
        })
    }

    /// Gets a provider's current load against a capacity of 15 active referrals.
    pub async fn get_provider_capacity(
        &self,
        provider_id: i32,
    ) -> Result<ProviderCapacityDto, AppError> {
        let provider = self.find_provider(provider_id).await?;

        self.capacity(&provider).await
    }

    /// Suggests up to five providers for a referral, best match first.
    pub async fn get_assignment_suggestions(
        &self,
        referral_id: i32,
    ) -> Result<Vec<AssignmentSuggestionDto>, AppError> {
        let referral = ReferralRepository::new(self.db)
            .find_by_id(referral_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Referral not found".to_string()))?;

        let providers = UserRepository::new(self.db)
            .get_suitable_providers(&referral.referred_for, None)
            .await?;

        let mut suggestions = Vec::with_capacity(providers.len());
        for provider in providers {
            let capacity = self.capacity(&provider).await?;
            let exact_match = provider
                .service_type
                .as_deref()
                .is_some_and(|service_type| {
                    service_type.eq_ignore_ascii_case(&referral.referred_for)
                });

            suggestions.push(AssignmentSuggestionDto {
                provider_id: provider.id,
                provider_name: provider.full_name(),
                service_type: provider.service_type,
                score: suggestion_score(
                    capacity.utilization_rate,
                    capacity.completed_last_30_days,
                    exact_match,
                ),
                utilization_rate: capacity.utilization_rate,
                recent_completed: capacity.completed_last_30_days,
                reason: recommendation_reason(
                    capacity.utilization_rate,
                    capacity.completed_last_30_days,
                    exact_match,
                ),
            });
        }

        suggestions.sort_by(|a, b| b.score.total_cmp(&a.score));
        suggestions.truncate(MAX_SUGGESTIONS);

        Ok(suggestions)
    }

    /// Builds a per-provider report for referrals created in the window.
    ///
    /// With no provider ids every provider is included. Unknown ids and non-provider
    /// users are skipped.
    pub async fn get_provider_summary_report(
        &self,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        provider_ids: &[i32],
    ) -> Result<ProviderSummaryReportDto, AppError> {
        let window = DateWindow::resolve(start_date, end_date, REPORT_DEFAULT_DAYS);
        let user_repo = UserRepository::new(self.db);

        let providers = if provider_ids.is_empty() {
            user_repo.get_providers(false, None).await?
        } else {
            let mut providers = Vec::with_capacity(provider_ids.len());
            for id in provider_ids {
                if let Some(user) = user_repo.find_by_id(*id).await? {
                    if user.has_role(UserRole::Provider) {
                        providers.push(user);
                    }
                }
            }
            providers
        };

        let mut provider_details = Vec::with_capacity(providers.len());
        let mut total_referrals = 0;
        let mut completed_referrals = 0;
        for provider in &providers {
            let referrals = self.referrals_in_window(provider.id, &window).await?;
            let handled = referrals.len() as u64;
            let completed = count_in(&referrals, &[ReferralStatus::Completed]);
            total_referrals += handled;
            completed_referrals += completed;

            provider_details.push(ProviderReportRowDto {
                provider_id: provider.id,
                provider_name: provider.full_name(),
                service_type: provider.service_type.clone(),
                referrals_handled: handled,
                referrals_completed: completed,
                completion_rate: percentage(completed, handled),
                performance: self.detailed_performance(provider, &window).await?,
            });
        }

        Ok(ProviderSummaryReportDto {
            generated_at: Utc::now(),
            start_date: window.start_date,
            end_date: window.end_date,
            providers_included: provider_details.len(),
            summary: ReportTotalsDto {
                total_referrals,
                completed_referrals,
                average_completion_rate: percentage(completed_referrals, total_referrals),
            },
            provider_details,
        })
    }

    /// Gets the provider's referral activity in the window (default: last 30 days),
    /// most recently updated first.
    pub async fn get_provider_timeline(
        &self,
        provider_id: i32,
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        limit: usize,
    ) -> Result<Vec<TimelineEventDto>, AppError> {
        self.find_provider(provider_id).await?;
        let window = DateWindow::resolve(start_date, end_date, REPORT_DEFAULT_DAYS);

        let mut referrals = self.referrals_in_window(provider_id, &window).await?;
        referrals.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        referrals.truncate(limit);

        Ok(referrals
            .into_iter()
            .map(|referral| TimelineEventDto {
                timestamp: referral.updated_at,
                event_type: "referral_activity".to_string(),
                title: format!(
                    "Referral #{} - {}",
                    referral.id,
                    title_case(&referral.status)
                ),
                description: format!(
                    "{} - {}",
                    referral.participant_name(),
                    referral.referred_for
                ),
                status: referral.status,
                referral_id: referral.id,
            })
            .collect())
    }

    async fn capacity(&self, provider: &User) -> Result<ProviderCapacityDto, AppError> {
        let repo = ReferralRepository::new(self.db);

        let referrals = repo.get_by_provider(provider.id).await?;
        let active_referrals = count_in(&referrals, &WORKING_STATUSES);
        let pending_referrals = count_in(&referrals, &[ReferralStatus::Assigned]);

        let month_ago = Utc::now() - Duration::days(30);
        let completed_last_30_days = referrals
            .iter()
            .filter(|r| {
                r.status == ReferralStatus::Completed.as_str() && r.updated_at >= month_ago
            })
            .count() as u64;

        let utilization = active_referrals as f64 / MAX_CAPACITY as f64 * 100.0;

        Ok(ProviderCapacityDto {
            provider_id: provider.id,
            max_capacity: MAX_CAPACITY,
            active_referrals,
            pending_referrals,
            available_slots: MAX_CAPACITY.saturating_sub(active_referrals),
            utilization_rate: capped_utilization(active_referrals, MAX_CAPACITY),
            completed_last_30_days,
            is_accepting_referrals: utilization < ACCEPTING_THRESHOLD,
            recommended_priority: recommended_priority(utilization).to_string(),
        })
    }

    async fn detailed_performance(
        &self,
        provider: &User,
        window: &DateWindow,
    ) -> Result<DetailedPerformanceDto, AppError> {
        let performance = ProviderService::new(self.db)
            .get_performance(provider.id)
            .await?;
        let referrals = self.referrals_in_window(provider.id, window).await?;

        let mut response_hours = Vec::new();
        let mut completion_days = Vec::new();
        for referral in &referrals {
            if let Some(accepted_at) = referral.accepted_at {
                response_hours
                    .push((accepted_at - referral.created_at).num_seconds() as f64 / 3600.0);

                if referral.status == ReferralStatus::Completed.as_str() {
                    completion_days.push((referral.updated_at - accepted_at).num_days() as f64);
                }
            }
        }

        Ok(DetailedPerformanceDto {
            provider_id: provider.id,
            provider_name: provider.full_name(),
            service_type: provider.service_type.clone(),
            start_date: window.start_date,
            end_date: window.end_date,
            period_days: window.period_days(),
            total_referrals: performance.total_referrals,
            accepted_referrals: performance.accepted_referrals,
            completed_referrals: performance.completed_referrals,
            declined_referrals: performance.declined_referrals,
            acceptance_rate: performance.acceptance_rate,
            completion_rate: performance.completion_rate,
            average_response_time_hours: round2(mean(&response_hours)),
            median_response_time_hours: round2(median(&mut response_hours)),
            average_completion_time_days: round2(mean(&completion_days)),
            referrals_in_period: referrals.len() as u64,
        })
    }

    /// Gets a provider's referrals created inside the window.
    async fn referrals_in_window(
        &self,
        provider_id: i32,
        window: &DateWindow,
    ) -> Result<Vec<Referral>, AppError> {
        let referrals = ReferralRepository::new(self.db)
            .get_by_provider(provider_id)
            .await?;

        Ok(referrals
            .into_iter()
            .filter(|r| r.created_at >= window.start && r.created_at < window.end)
            .collect())
    }
}

/// Percentage of `capacity` in use, capped at 100.
fn capped_utilization(active: u64, capacity: u64) -> f64 {
    percentage(active, capacity).min(100.0)
}

fn recommended_priority(utilization: f64) -> &'static str {
    if utilization < 50.0 {
        "high"
    } else if utilization < 80.0 {
        "medium"
    } else {
        "low"
    }
}

/// Scores a provider for a referral out of 100.
///
/// Starts at 50, adds up to 30 for spare capacity, up to 20 for recent completions and
/// 15 for an exact service match.
fn suggestion_score(utilization: f64, recent_completed: u64, exact_match: bool) -> f64 {
    let mut score = 50.0;
    score += (100.0 - utilization) * 0.3;
    score += (recent_completed as f64 * 2.0).min(20.0);
    if exact_match {
        score += 15.0;
    }
    round2(score.min(100.0))
}

fn recommendation_reason(utilization: f64, recent_completed: u64, exact_match: bool) -> String {
    let mut reasons = Vec::new();

    if utilization < 50.0 {
        reasons.push("Low current workload");
    } else if utilization < 80.0 {
        reasons.push("Moderate workload");
    }

    if recent_completed > 5 {
        reasons.push("High recent productivity");
    } else if recent_completed > 2 {
        reasons.push("Good recent performance");
    }

    if exact_match {
        reasons.push("Exact service type match");
    }

    if reasons.is_empty() {
        "Available provider".to_string()
    } else {
        reasons.join("; ")
    }
}

/// Scores how evenly work is spread, from 0 to 100.
///
/// Every unit of population variance in active referrals costs 10 points. No providers
/// counts as perfectly balanced.
fn balance_score(active_counts: &[u64]) -> f64 {
    if active_counts.is_empty() {
        return 100.0;
    }

    let values: Vec<f64> = active_counts.iter().map(|&count| count as f64).collect();
    let average = mean(&values);
    let variance =
        values.iter().map(|value| (value - average).powi(2)).sum::<f64>() / values.len() as f64;

    round2((100.0 - variance * 10.0).clamp(0.0, 100.0))
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Upper median: the middle element after sorting, or the later of the two middles.
fn median(values: &mut [f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    values[values.len() / 2]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn balance_score_penalizes_variance() {
        assert_eq!(balance_score(&[]), 100.0);
        assert_eq!(balance_score(&[3, 3, 3]), 100.0);
        // variance of [0, 2] is 1
        assert_eq!(balance_score(&[0, 2]), 90.0);
        assert_eq!(balance_score(&[0, 20]), 0.0);
    }

    #[test]
    fn median_takes_upper_middle() {
        assert_eq!(median(&mut []), 0.0);
        assert_eq!(median(&mut [5.0, 1.0, 3.0]), 3.0);
        assert_eq!(median(&mut [4.0, 1.0, 3.0, 2.0]), 3.0);
    }

    #[test]
    fn suggestion_score_is_capped() {
        assert_eq!(suggestion_score(100.0, 0, false), 50.0);
        assert_eq!(suggestion_score(0.0, 3, false), 86.0);
        assert_eq!(suggestion_score(0.0, 20, true), 100.0);
    }

    #[test]
    fn recommendation_reason_joins_reasons() {
        assert_eq!(
            recommendation_reason(20.0, 3, true),
            "Low current workload; Good recent performance; Exact service type match"
        );
        assert_eq!(
            recommendation_reason(60.0, 6, false),
            "Moderate workload; High recent productivity"
        );
        assert_eq!(recommendation_reason(95.0, 0, false), "Available provider");
    }

    #[test]
    fn priority_drops_as_utilization_rises() {
        assert_eq!(recommended_priority(0.0), "high");
        assert_eq!(recommended_priority(60.0), "medium");
        assert_eq!(recommended_priority(80.0), "low");
    }

    #[test]
    fn utilization_is_capped_at_full() {
        assert_eq!(capped_utilization(5, 10), 50.0);
        assert_eq!(capped_utilization(30, 15), 100.0);
    }
}
