//! Email log data repository.
//!
//! Every outbound email is recorded as `queued` before the send and then marked `sent`
//! or `failed`. The repository also answers the delivery statistics queries.

use std::collections::BTreeMap;

use chrono::Utc;
use sea_orm::{
    sea_query::Expr, ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect,
};

use crate::server::model::email_log::{
    CreateEmailLogParams, EmailLog, EMAIL_STATUS_FAILED, EMAIL_STATUS_QUEUED, EMAIL_STATUS_SENT,
};

/// Repository providing database operations for email logs.
pub struct EmailLogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EmailLogRepository<'a> {
    /// Creates a new EmailLogRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `EmailLogRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an email as queued.
    ///
    /// # Returns
    /// - `Ok(EmailLog)` - The created log entry
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create_queued(&self, params: CreateEmailLogParams) -> Result<EmailLog, DbErr> {
        let now = Utc::now();

        let entity = entity::email_log::ActiveModel {
            referral_id: ActiveValue::Set(params.referral_id),
            user_id: ActiveValue::Set(params.user_id),
            email_type: ActiveValue::Set(params.email_type.as_str().to_string()),
            to_address: ActiveValue::Set(params.to_address),
            subject: ActiveValue::Set(params.subject),
            body: ActiveValue::Set(params.body),
            status: ActiveValue::Set(EMAIL_STATUS_QUEUED.to_string()),
            error: ActiveValue::Set(None),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(EmailLog::from_entity(entity))
    }

    /// Marks a log entry as sent.
    pub async fn mark_sent(&self, id: i32) -> Result<(), DbErr> {
        self.set_status(id, EMAIL_STATUS_SENT, None).await
    }

    /// Marks a log entry as failed with the given error message.
    pub async fn mark_failed(&self, id: i32, error: &str) -> Result<(), DbErr> {
        self.set_status(id, EMAIL_STATUS_FAILED, Some(error.to_string()))
            .await
    }

    async fn set_status(&self, id: i32, status: &str, error: Option<String>) -> Result<(), DbErr> {
        entity::prelude::EmailLog::update_many()
            .filter(entity::email_log::Column::Id.eq(id))
            .col_expr(entity::email_log::Column::Status, Expr::value(status))
            .col_expr(entity::email_log::Column::Error, Expr::value(error))
            .col_expr(entity::email_log::Column::UpdatedAt, Expr::value(Utc::now()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Gets every email sent for a referral, newest first.
    pub async fn get_by_referral(&self, referral_id: i32) -> Result<Vec<EmailLog>, DbErr> {
        let entities = entity::prelude::EmailLog::find()
            .filter(entity::email_log::Column::ReferralId.eq(referral_id))
            .order_by_desc(entity::email_log::Column::CreatedAt)
            .order_by_desc(entity::email_log::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EmailLog::from_entity).collect())
    }

    /// Gets the most recent failed emails.
    pub async fn get_failed(&self, limit: u64) -> Result<Vec<EmailLog>, DbErr> {
        let entities = entity::prelude::EmailLog::find()
            .filter(entity::email_log::Column::Status.eq(EMAIL_STATUS_FAILED))
            .order_by_desc(entity::email_log::Column::CreatedAt)
            .order_by_desc(entity::email_log::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(EmailLog::from_entity).collect())
    }

    /// Counts log entries, optionally with one status.
    pub async fn count(&self, status: Option<&str>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::EmailLog::find();

        if let Some(status) = status {
            query = query.filter(entity::email_log::Column::Status.eq(status));
        }

        query.count(self.db).await
    }

    /// Counts log entries per email type.
    pub async fn count_by_type(&self) -> Result<BTreeMap<String, u64>, DbErr> {
        let email_types: Vec<String> = entity::prelude::EmailLog::find()
            .select_only()
            .column(entity::email_log::Column::EmailType)
            .into_tuple()
            .all(self.db)
            .await?;

        let mut counts = BTreeMap::new();
        for email_type in email_types {
            *counts.entry(email_type).or_insert(0) += 1;
        }

        Ok(counts)
    }
}

#[cfg(test)]
mod test;
