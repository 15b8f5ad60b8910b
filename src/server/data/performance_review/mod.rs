//! Provider performance review repository.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

use crate::server::model::performance_review::{
    CreatePerformanceReviewParams, PerformanceReview,
};

/// Repository providing database operations for performance reviews.
pub struct PerformanceReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PerformanceReviewRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a review together with the metrics it was based on.
    pub async fn create(
        &self,
        params: CreatePerformanceReviewParams,
    ) -> Result<PerformanceReview, DbErr> {
        let entity = entity::performance_review::ActiveModel {
            provider_id: ActiveValue::Set(params.provider_id),
            reviewed_by_user_id: ActiveValue::Set(params.reviewed_by_user_id),
            rating: ActiveValue::Set(params.rating),
            comments: ActiveValue::Set(params.comments),
            goals: ActiveValue::Set(params.goals),
            metrics_snapshot: ActiveValue::Set(params.metrics_snapshot),
            created_at: ActiveValue::Set(Utc::now()),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(PerformanceReview::from_entity(entity))
    }
}
