//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles account creation, lookups by id and email, provider queries, and profile
//! updates with conversion between entity models and domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::{
    model::user::UserRole,
    server::model::user::{CreateUserParams, UpdateProfileParams, User},
};

/// Repository providing database operations for user management.
pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to a database connection or open transaction
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a new user account.
    ///
    /// The email is stored as given; callers normalise it beforehand. New accounts are
    /// active and unverified.
    ///
    /// # Arguments
    /// - `params` - Account fields including the already hashed password
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error, including unique violations on email
    pub async fn create(&self, params: CreateUserParams) -> Result<User, DbErr> {
        let now = Utc::now();

        let entity = entity::user::ActiveModel {
            email: ActiveValue::Set(params.email),
            hashed_password: ActiveValue::Set(params.hashed_password),
            first_name: ActiveValue::Set(params.first_name),
            last_name: ActiveValue::Set(params.last_name),
            phone_number: ActiveValue::Set(params.phone_number),
            role: ActiveValue::Set(params.role.as_str().to_string()),
            is_active: ActiveValue::Set(true),
            is_verified: ActiveValue::Set(false),
            service_type: ActiveValue::Set(params.service_type),
            provider_license: ActiveValue::Set(params.provider_license),
            provider_agency: ActiveValue::Set(params.provider_agency),
            provider_bio: ActiveValue::Set(params.provider_bio),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            last_login: ActiveValue::Set(None),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(User::from_entity(entity))
    }

    /// Finds a user by id.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find_by_id(id).one(self.db).await?;

        Ok(entity.map(User::from_entity))
    }

    /// Finds a user by email address.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user registered with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, DbErr> {
        let entity = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?;

        Ok(entity.map(User::from_entity))
    }

    /// Checks if any admin users exist in the database.
    ///
    /// Used on startup to decide whether a bootstrap admin code is needed.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin exists
    /// - `Ok(false)` - No admin exists (first-time setup)
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets active admin accounts, used as default recipients of new referral emails.
    pub async fn get_active_admins(&self) -> Result<Vec<User>, DbErr> {
        let entities = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Admin.as_str()))
            .filter(entity::user::Column::IsActive.eq(true))
            .order_by_asc(entity::user::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Sets `last_login` to now for the given user.
    pub async fn update_last_login(&self, id: i32) -> Result<(), DbErr> {
        entity::prelude::User::update_many()
            .filter(entity::user::Column::Id.eq(id))
            .col_expr(
                entity::user::Column::LastLogin,
                sea_orm::sea_query::Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Applies a partial profile update.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn update_profile(
        &self,
        id: i32,
        params: UpdateProfileParams,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(first_name) = params.first_name {
            active.first_name = ActiveValue::Set(first_name);
        }
        if let Some(last_name) = params.last_name {
            active.last_name = ActiveValue::Set(last_name);
        }
        if let Some(phone_number) = params.phone_number {
            active.phone_number = ActiveValue::Set(Some(phone_number));
        }
        if let Some(provider_license) = params.provider_license {
            active.provider_license = ActiveValue::Set(Some(provider_license));
        }
        if let Some(provider_agency) = params.provider_agency {
            active.provider_agency = ActiveValue::Set(Some(provider_agency));
        }
        if let Some(provider_bio) = params.provider_bio {
            active.provider_bio = ActiveValue::Set(Some(provider_bio));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Activates or deactivates an account.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - Updated user
    /// - `Ok(None)` - No user with that id
    /// - `Err(DbErr)` - Database error during update
    pub async fn set_active(&self, id: i32, is_active: bool) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        active.is_active = ActiveValue::Set(is_active);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = active.update(self.db).await?;

        Ok(Some(User::from_entity(updated)))
    }

    /// Gets provider accounts ordered by last then first name.
    ///
    /// # Arguments
    /// - `active_only` - Only return active providers
    /// - `service_type` - Only return providers with exactly this service type
    pub async fn get_providers(
        &self,
        active_only: bool,
        service_type: Option<&str>,
    ) -> Result<Vec<User>, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Provider.as_str()));

        if active_only {
            query = query.filter(entity::user::Column::IsActive.eq(true));
        }
        if let Some(service_type) = service_type {
            query = query.filter(entity::user::Column::ServiceType.eq(service_type));
        }

        let entities = query
            .order_by_asc(entity::user::Column::LastName)
            .order_by_asc(entity::user::Column::FirstName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(User::from_entity).collect())
    }

    /// Gets active providers that can take a referral for `referred_for`.
    ///
    /// # Arguments
    /// - `referred_for` - Service requested by the referral
    /// - `exclude_id` - Provider to leave out, such as one being deactivated
    pub async fn get_suitable_providers(
        &self,
        referred_for: &str,
        exclude_id: Option<i32>,
    ) -> Result<Vec<User>, DbErr> {
        let providers = self.get_providers(true, None).await?;

        Ok(providers
            .into_iter()
            .filter(|provider| Some(provider.id) != exclude_id)
            .filter(|provider| provider.handles_service_type(referred_for))
            .collect())
    }

    /// Counts provider accounts, optionally by active flag.
    pub async fn count_providers(&self, is_active: Option<bool>) -> Result<u64, DbErr> {
        let mut query = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(UserRole::Provider.as_str()));

        if let Some(is_active) = is_active {
            query = query.filter(entity::user::Column::IsActive.eq(is_active));
        }

        query.count(self.db).await
    }
}

#[cfg(test)]
mod test;
