//! Provider performance review domain model.

use chrono::{DateTime, Utc};

use crate::model::provider_admin::PerformanceReviewDto;

#[derive(Debug, Clone, PartialEq)]
pub struct PerformanceReview {
    pub id: i32,
    pub provider_id: i32,
    pub reviewed_by_user_id: i32,
    pub rating: i32,
    pub comments: Option<String>,
    pub goals: Option<String>,
    pub metrics_snapshot: serde_json::Value,
    pub created_at: DateTime<Utc>,
}

impl PerformanceReview {
    pub fn from_entity(entity: entity::performance_review::Model) -> Self {
        Self {
            id: entity.id,
            provider_id: entity.provider_id,
            reviewed_by_user_id: entity.reviewed_by_user_id,
            rating: entity.rating,
            comments: entity.comments,
            goals: entity.goals,
            metrics_snapshot: entity.metrics_snapshot,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> PerformanceReviewDto {
        PerformanceReviewDto {
            id: self.id,
            provider_id: self.provider_id,
            reviewed_by_user_id: self.reviewed_by_user_id,
            rating: self.rating,
            comments: self.comments,
            goals: self.goals,
            metrics_snapshot: self.metrics_snapshot,
            created_at: self.created_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreatePerformanceReviewParams {
    pub provider_id: i32,
    pub reviewed_by_user_id: i32,
    pub rating: i32,
    pub comments: Option<String>,
    pub goals: Option<String>,
    pub metrics_snapshot: serde_json::Value,
}
