//! Referral data repository for database operations.
//!
//! This module provides the `ReferralRepository` for creating, querying, updating and
//! deleting referrals. The repository works with any `ConnectionTrait` so services can
//! run several referral writes inside one transaction.

use chrono::{DateTime, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, Condition, ConnectionTrait, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::{
    model::referral::ReferralStatus,
    server::model::referral::{
        CreateReferralParams, Referral, ReferralFilter, UpdateReferralParams,
    },
};

/// Statuses that count as open work for the assigned provider.
pub const ACTIVE_STATUSES: [ReferralStatus; 3] = [
    ReferralStatus::Assigned,
    ReferralStatus::Accepted,
    ReferralStatus::InProgress,
];

/// Repository providing database operations for referrals.
pub struct ReferralRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ReferralRepository<'a, C> {
    /// Creates a new ReferralRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `ReferralRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a referral submitted through the public form.
    ///
    /// New referrals always start with status `new` and priority `medium`.
    ///
    /// # Arguments
    /// - `params` - Form fields plus the raw submission and form metadata JSON
    ///
    /// # Returns
    /// - `Ok(Referral)` - The created referral
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateReferralParams) -> Result<Referral, DbErr> {
        let form = params.form;
        let now = Utc::now();

        let entity = entity::referral::ActiveModel {
            first_name: ActiveValue::Set(form.first_name),
            last_name: ActiveValue::Set(form.last_name),
            date_of_birth: ActiveValue::Set(form.date_of_birth),
            phone_number: ActiveValue::Set(form.phone_number),
            email_address: ActiveValue::Set(form.email_address),
            street_address: ActiveValue::Set(form.street_address),
            city: ActiveValue::Set(form.city),
            state: ActiveValue::Set(form.state),
            postcode: ActiveValue::Set(form.postcode),
            preferred_contact: ActiveValue::Set(form.preferred_contact),
            rep_first_name: ActiveValue::Set(form.rep_first_name),
            rep_last_name: ActiveValue::Set(form.rep_last_name),
            rep_phone_number: ActiveValue::Set(form.rep_phone_number),
            rep_email_address: ActiveValue::Set(form.rep_email_address),
            rep_street_address: ActiveValue::Set(form.rep_street_address),
            rep_city: ActiveValue::Set(form.rep_city),
            rep_state: ActiveValue::Set(form.rep_state),
            rep_postcode: ActiveValue::Set(form.rep_postcode),
            rep_relationship: ActiveValue::Set(form.rep_relationship),
            plan_type: ActiveValue::Set(form.plan_type),
            plan_manager_name: ActiveValue::Set(form.plan_manager_name),
            plan_manager_agency: ActiveValue::Set(form.plan_manager_agency),
            ndis_number: ActiveValue::Set(form.ndis_number),
            available_funding: ActiveValue::Set(form.available_funding),
            plan_start_date: ActiveValue::Set(form.plan_start_date),
            plan_review_date: ActiveValue::Set(form.plan_review_date),
            client_goals: ActiveValue::Set(form.client_goals),
            referrer_first_name: ActiveValue::Set(form.referrer_first_name),
            referrer_last_name: ActiveValue::Set(form.referrer_last_name),
            referrer_agency: ActiveValue::Set(form.referrer_agency),
            referrer_role: ActiveValue::Set(form.referrer_role),
            referrer_email: ActiveValue::Set(form.referrer_email),
            referrer_phone: ActiveValue::Set(form.referrer_phone),
            referred_for: ActiveValue::Set(form.referred_for),
            reason_for_referral: ActiveValue::Set(form.reason_for_referral),
            consent_checkbox: ActiveValue::Set(form.consent_checkbox),
            disability_type: ActiveValue::Set(form.disability_type),
            urgency_level: ActiveValue::Set(form.urgency_level),
            status: ActiveValue::Set(ReferralStatus::New.as_str().to_string()),
            priority: ActiveValue::Set("medium".to_string()),
            notes: ActiveValue::Set(None),
            assigned_provider_id: ActiveValue::Set(None),
            accepted_at: ActiveValue::Set(None),
            raw_submission: ActiveValue::Set(params.raw_submission),
            form_metadata: ActiveValue::Set(params.form_metadata),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Referral::from_entity(entity))
    }

    /// Finds a referral by id.
    ///
    /// # Returns
    /// - `Ok(Some(Referral))` - Referral found
    /// - `Ok(None)` - No referral with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<Referral>, DbErr> {
        let entity = entity::prelude::Referral::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Referral::from_entity))
    }

    /// Finds a referral only if it is assigned to the given provider.
    pub async fn find_for_provider(
        &self,
        id: i32,
        provider_id: i32,
    ) -> Result<Option<Referral>, DbErr> {
        let entity = entity::prelude::Referral::find_by_id(id)
            .filter(entity::referral::Column::AssignedProviderId.eq(provider_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Referral::from_entity))
    }

    /// Lists referrals matching the filter, newest first.
    ///
    /// # Arguments
    /// - `filter` - Optional status, service, priority, provider and date filters
    /// - `skip` - Number of rows to skip
    /// - `limit` - Maximum number of rows to return
    pub async fn list(
        &self,
        filter: &ReferralFilter,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, DbErr> {
        let entities = apply_filter(entity::prelude::Referral::find(), filter)
            .order_by_desc(entity::referral::Column::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Gets every referral assigned to a provider, newest first.
    pub async fn get_by_provider(&self, provider_id: i32) -> Result<Vec<Referral>, DbErr> {
        let entities = entity::prelude::Referral::find()
            .filter(entity::referral::Column::AssignedProviderId.eq(provider_id))
            .order_by_desc(entity::referral::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Gets a provider's referrals in the given statuses, oldest first.
    pub async fn get_by_provider_and_statuses(
        &self,
        provider_id: i32,
        statuses: &[ReferralStatus],
    ) -> Result<Vec<Referral>, DbErr> {
        let entities = entity::prelude::Referral::find()
            .filter(entity::referral::Column::AssignedProviderId.eq(provider_id))
            .filter(entity::referral::Column::Status.is_in(status_strings(statuses)))
            .order_by_asc(entity::referral::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Gets a provider's most recently updated referrals.
    pub async fn get_recently_updated_by_provider(
        &self,
        provider_id: i32,
        updated_since: Option<DateTime<Utc>>,
        limit: u64,
    ) -> Result<Vec<Referral>, DbErr> {
        let mut query = entity::prelude::Referral::find()
            .filter(entity::referral::Column::AssignedProviderId.eq(provider_id));

        if let Some(updated_since) = updated_since {
            query = query.filter(entity::referral::Column::UpdatedAt.gte(updated_since));
        }

        let entities = query
            .order_by_desc(entity::referral::Column::UpdatedAt)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Lists referrals that need an assignment: no provider, or declined by one.
    pub async fn get_unassigned(
        &self,
        service_type: Option<&str>,
        priority: Option<&str>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, DbErr> {
        let mut query = entity::prelude::Referral::find().filter(
            Condition::any()
                .add(entity::referral::Column::AssignedProviderId.is_null())
                .add(entity::referral::Column::Status.eq(ReferralStatus::Declined.as_str())),
        );

        if let Some(service_type) = service_type {
            query = query.filter(entity::referral::Column::ReferredFor.eq(service_type));
        }
        if let Some(priority) = priority {
            query = query.filter(entity::referral::Column::Priority.eq(priority));
        }

        let entities = query
            .order_by_desc(entity::referral::Column::CreatedAt)
            .offset(skip)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Lists overdue referrals, oldest first.
    ///
    /// A referral is overdue when it is still `new` and was created before `new_cutoff`,
    /// or is `in_progress` and was accepted before `in_progress_cutoff`.
    pub async fn get_overdue(
        &self,
        new_cutoff: DateTime<Utc>,
        in_progress_cutoff: DateTime<Utc>,
        provider_id: Option<i32>,
    ) -> Result<Vec<Referral>, DbErr> {
        let mut query = entity::prelude::Referral::find().filter(
            Condition::any()
                .add(
                    Condition::all()
                        .add(entity::referral::Column::Status.eq(ReferralStatus::New.as_str()))
                        .add(entity::referral::Column::CreatedAt.lt(new_cutoff)),
                )
                .add(
                    Condition::all()
                        .add(
                            entity::referral::Column::Status
                                .eq(ReferralStatus::InProgress.as_str()),
                        )
                        .add(entity::referral::Column::AcceptedAt.lt(in_progress_cutoff)),
                ),
        );

        if let Some(provider_id) = provider_id {
            query = query.filter(entity::referral::Column::AssignedProviderId.eq(provider_id));
        }

        let entities = query
            .order_by_asc(entity::referral::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Referral::from_entity).collect())
    }

    /// Counts referrals matching the filter.
    pub async fn count(&self, filter: &ReferralFilter) -> Result<u64, DbErr> {
        apply_filter(entity::prelude::Referral::find(), filter)
            .count(self.db)
            .await
    }

    /// Counts referrals without an assigned provider, optionally in one status.
    pub async fn count_without_provider(
        &self,
        status: Option<ReferralStatus>,
    ) -> Result<u64, DbErr> {
        let mut query = entity::prelude::Referral::find()
            .filter(entity::referral::Column::AssignedProviderId.is_null());

        if let Some(status) = status {
            query = query.filter(entity::referral::Column::Status.eq(status.as_str()));
        }

        query.count(self.db).await
    }

    /// Counts `in_progress` referrals of a provider accepted before `cutoff`.
    pub async fn count_long_running(
        &self,
        provider_id: i32,
        cutoff: DateTime<Utc>,
    ) -> Result<u64, DbErr> {
        entity::prelude::Referral::find()
            .filter(entity::referral::Column::AssignedProviderId.eq(provider_id))
            .filter(entity::referral::Column::Status.eq(ReferralStatus::InProgress.as_str()))
            .filter(entity::referral::Column::AcceptedAt.lt(cutoff))
            .count(self.db)
            .await
    }

    /// Applies a partial update and bumps `updated_at`.
    ///
    /// # Returns
    /// - `Ok(Some(Referral))` - Updated referral
    /// - `Ok(None)` - No referral with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateReferralParams,
    ) -> Result<Option<Referral>, DbErr> {
        let Some(entity) = entity::prelude::Referral::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::referral::ActiveModel = entity.into();

        macro_rules! set_if_some {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = params.$field {
                    active.$field = ActiveValue::Set(value);
                })*
            };
        }
        macro_rules! set_optional_if_some {
            ($($field:ident),* $(,)?) => {
                $(if let Some(value) = params.$field {
                    active.$field = ActiveValue::Set(Some(value));
                })*
            };
        }

        set_if_some!(
            first_name,
            last_name,
            date_of_birth,
            phone_number,
            street_address,
            city,
            state,
            postcode,
            preferred_contact,
            plan_type,
            plan_start_date,
            plan_review_date,
            client_goals,
            referrer_first_name,
            referrer_last_name,
            referrer_email,
            referrer_phone,
            referred_for,
            reason_for_referral,
            consent_checkbox,
            status,
            priority,
            assigned_provider_id,
        );
        set_optional_if_some!(
            email_address,
            rep_first_name,
            rep_last_name,
            rep_phone_number,
            rep_email_address,
            rep_street_address,
            rep_city,
            rep_state,
            rep_postcode,
            rep_relationship,
            plan_manager_name,
            plan_manager_agency,
            ndis_number,
            available_funding,
            referrer_agency,
            referrer_role,
            disability_type,
            urgency_level,
            notes,
            accepted_at,
        );
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(Referral::from_entity(updated)))
    }

    /// Deletes a referral.
    ///
    /// # Returns
    /// - `Ok(true)` - Referral deleted
    /// - `Ok(false)` - No referral with that id
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Referral::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}

fn status_strings(statuses: &[ReferralStatus]) -> Vec<&'static str> {
    statuses.iter().map(ReferralStatus::as_str).collect()
}

fn apply_filter(
    mut query: Select<entity::prelude::Referral>,
    filter: &ReferralFilter,
) -> Select<entity::prelude::Referral> {
    if let Some(status) = &filter.status {
        query = query.filter(entity::referral::Column::Status.eq(status.as_str()));
    }
    if let Some(service_type) = &filter.service_type {
        query = query.filter(entity::referral::Column::ReferredFor.eq(service_type.as_str()));
    }
    if let Some(priority) = &filter.priority {
        query = query.filter(entity::referral::Column::Priority.eq(priority.as_str()));
    }
    if let Some(provider_id) = filter.assigned_provider_id {
        query = query.filter(entity::referral::Column::AssignedProviderId.eq(provider_id));
    }
    if let Some(created_from) = filter.created_from {
        query = query.filter(entity::referral::Column::CreatedAt.gte(created_from));
    }
    if let Some(created_before) = filter.created_before {
        query = query.filter(entity::referral::Column::CreatedAt.lt(created_before));
    }
    if let Some(updated_from) = filter.updated_from {
        query = query.filter(entity::referral::Column::UpdatedAt.gte(updated_from));
    }
    query
}

#[cfg(test)]
mod test;
