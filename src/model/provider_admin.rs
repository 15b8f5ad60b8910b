use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{
    provider::ProviderDashboardDto,
    referral::{ReferralDto, ReferralPriority},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderStatsDto {
    pub total_referrals: u64,
    pub active_referrals: u64,
    pub completed_referrals: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderWithStatsDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub service_type: Option<String>,
    pub provider_license: Option<String>,
    pub provider_agency: Option<String>,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
    pub stats: ProviderStatsDto,
    pub latest_activity: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderInfoDto {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub service_type: Option<String>,
    pub agency: Option<String>,
    pub license: Option<String>,
    pub is_active: bool,
    pub last_login: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderAlertDto {
    #[serde(rename = "type")]
    pub alert_type: String,
    pub severity: String,
    pub message: String,
    pub count: u64,
    pub provider_id: i32,
    pub provider_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminProviderDashboardDto {
    pub provider_info: ProviderInfoDto,
    pub dashboard: ProviderDashboardDto,
    pub alerts: Vec<ProviderAlertDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AssignReferralDto {
    pub provider_id: i32,
    #[serde(default)]
    pub priority: Option<ReferralPriority>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ReassignReferralDto {
    pub new_provider_id: i32,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderBriefDto {
    pub id: Option<i32>,
    pub name: String,
    pub email: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverdueReferralDto {
    pub referral_id: i32,
    pub participant_name: String,
    pub service_type: String,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub days_overdue: i64,
    pub provider: ProviderBriefDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DetailedPerformanceDto {
    pub provider_id: i32,
    pub provider_name: String,
    pub service_type: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub period_days: i64,
    pub total_referrals: u64,
    pub accepted_referrals: u64,
    pub completed_referrals: u64,
    pub declined_referrals: u64,
    pub acceptance_rate: f64,
    pub completion_rate: f64,
    pub average_response_time_hours: f64,
    pub median_response_time_hours: f64,
    pub average_completion_time_days: f64,
    pub referrals_in_period: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderWorkloadDto {
    pub provider_id: i32,
    pub provider_name: String,
    pub service_type: Option<String>,
    pub active_referrals: u64,
    pub total_referrals: u64,
    pub capacity_utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct WorkloadAnalyticsDto {
    pub total_active_providers: u64,
    pub total_active_referrals: u64,
    pub unassigned_referrals: u64,
    pub average_workload: f64,
    pub workload_by_provider: Vec<ProviderWorkloadDto>,
    pub workload_balance_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderPerformanceRowDto {
    pub provider_id: i32,
    pub provider_name: String,
    pub service_type: Option<String>,
    pub referrals_handled: u64,
    pub referrals_completed: u64,
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceTotalsDto {
    pub total_providers: u64,
    pub total_referrals: u64,
    pub completed_referrals: u64,
    pub overall_completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceSummaryDto {
    pub period_days: i64,
    pub summary: PerformanceTotalsDto,
    pub top_performers: Vec<ProviderPerformanceRowDto>,
    pub all_providers: Vec<ProviderPerformanceRowDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct DeactivateProviderDto {
    pub reason: String,
    #[serde(default = "default_true")]
    pub reassign_referrals: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DeactivationResultDto {
    pub success: bool,
    pub message: String,
    pub active_referrals_found: u64,
    pub reassigned: u64,
    pub unassigned: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct BulkAssignDto {
    pub referral_ids: Vec<i32>,
    pub provider_id: i32,
    #[serde(default)]
    pub priority: Option<ReferralPriority>,
    #[serde(default)]
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FailedAssignmentDto {
    pub referral_id: i32,
    pub error: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct BulkAssignResultDto {
    pub total_requested: usize,
    pub successfully_assigned: usize,
    pub failed_assignments: Vec<FailedAssignmentDto>,
    pub success_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderCapacityDto {
    pub provider_id: i32,
    pub max_capacity: u64,
    pub active_referrals: u64,
    pub pending_referrals: u64,
    pub available_slots: u64,
    pub utilization_rate: f64,
    pub completed_last_30_days: u64,
    pub is_accepting_referrals: bool,
    pub recommended_priority: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct AssignmentSuggestionDto {
    pub provider_id: i32,
    pub provider_name: String,
    pub service_type: Option<String>,
    pub score: f64,
    pub utilization_rate: f64,
    pub recent_completed: u64,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderReportRowDto {
    pub provider_id: i32,
    pub provider_name: String,
    pub service_type: Option<String>,
    pub referrals_handled: u64,
    pub referrals_completed: u64,
    pub completion_rate: f64,
    pub performance: DetailedPerformanceDto,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ReportTotalsDto {
    pub total_referrals: u64,
    pub completed_referrals: u64,
    pub average_completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ProviderSummaryReportDto {
    pub generated_at: DateTime<Utc>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub providers_included: usize,
    pub summary: ReportTotalsDto,
    pub provider_details: Vec<ProviderReportRowDto>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct TimelineEventDto {
    pub timestamp: DateTime<Utc>,
    #[serde(rename = "type")]
    pub event_type: String,
    pub title: String,
    pub description: String,
    pub status: String,
    pub referral_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CreatePerformanceReviewDto {
    /// 1 to 5
    pub rating: i32,
    #[serde(default)]
    pub comments: Option<String>,
    #[serde(default)]
    pub goals: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct PerformanceReviewDto {
    pub id: i32,
    pub provider_id: i32,
    pub reviewed_by_user_id: i32,
    pub rating: i32,
    pub comments: Option<String>,
    pub goals: Option<String>,
    #[schema(value_type = Object)]
    pub metrics_snapshot: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProviderCountsDto {
    pub total: u64,
    pub active: u64,
    pub inactive: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ReferralCountsDto {
    pub total: u64,
    pub unassigned: u64,
    pub overdue: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AdminDashboardSummaryDto {
    pub providers: ProviderCountsDto,
    pub referrals: ReferralCountsDto,
    pub recent_referrals: Vec<ReferralDto>,
    pub alerts: Vec<ProviderAlertDto>,
}
