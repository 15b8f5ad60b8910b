//! Referral factory for creating test referral entities.
//!
//! Defaults describe a minimal valid participant referral for physiotherapy with
//! status `new` and priority `medium`.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test referrals with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::referral::ReferralFactory;
///
/// let referral = ReferralFactory::new(&db)
///     .referred_for("psychologist")
///     .priority("urgent")
///     .build()
///     .await?;
/// ```
pub struct ReferralFactory<'a> {
    db: &'a DatabaseConnection,
    first_name: String,
    last_name: String,
    email_address: Option<String>,
    referrer_email: String,
    referred_for: String,
    urgency_level: Option<String>,
    status: String,
    priority: String,
    assigned_provider_id: Option<i32>,
    accepted_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl<'a> ReferralFactory<'a> {
    /// Creates a new ReferralFactory with default values.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ReferralFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let now = Utc::now();
        Self {
            db,
            first_name: "Participant".to_string(),
            last_name: id.to_string(),
            email_address: Some(format!("participant{}@example.com", id)),
            referrer_email: format!("referrer{}@example.com", id),
            referred_for: "physiotherapy".to_string(),
            urgency_level: Some("medium".to_string()),
            status: "new".to_string(),
            priority: "medium".to_string(),
            assigned_provider_id: None,
            accepted_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
        self
    }

    pub fn email_address(mut self, email: Option<String>) -> Self {
        self.email_address = email;
        self
    }

    pub fn referred_for(mut self, referred_for: impl Into<String>) -> Self {
        self.referred_for = referred_for.into();
        self
    }

    pub fn urgency_level(mut self, urgency_level: Option<String>) -> Self {
        self.urgency_level = urgency_level;
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: impl Into<String>) -> Self {
        self.priority = priority.into();
        self
    }

    pub fn assigned_provider_id(mut self, provider_id: i32) -> Self {
        self.assigned_provider_id = Some(provider_id);
        self
    }

    pub fn accepted_at(mut self, accepted_at: DateTime<Utc>) -> Self {
        self.accepted_at = Some(accepted_at);
        self
    }

    /// Backdates the referral's creation time. `updated_at` follows unless set afterwards.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    pub fn updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Builds and inserts the referral entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::referral::Model)` - Created referral entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::referral::Model, DbErr> {
        entity::referral::ActiveModel {
            first_name: ActiveValue::Set(self.first_name),
            last_name: ActiveValue::Set(self.last_name),
            date_of_birth: ActiveValue::Set("1990-01-01".to_string()),
            phone_number: ActiveValue::Set("0400000000".to_string()),
            email_address: ActiveValue::Set(self.email_address),
            street_address: ActiveValue::Set("1 Test Street".to_string()),
            city: ActiveValue::Set("Sydney".to_string()),
            state: ActiveValue::Set("NSW".to_string()),
            postcode: ActiveValue::Set("2000".to_string()),
            preferred_contact: ActiveValue::Set("phone".to_string()),
            rep_first_name: ActiveValue::Set(None),
            rep_last_name: ActiveValue::Set(None),
            rep_phone_number: ActiveValue::Set(None),
            rep_email_address: ActiveValue::Set(None),
            rep_street_address: ActiveValue::Set(None),
            rep_city: ActiveValue::Set(None),
            rep_state: ActiveValue::Set(None),
            rep_postcode: ActiveValue::Set(None),
            rep_relationship: ActiveValue::Set(None),
            plan_type: ActiveValue::Set("plan-managed".to_string()),
            plan_manager_name: ActiveValue::Set(None),
            plan_manager_agency: ActiveValue::Set(None),
            ndis_number: ActiveValue::Set(None),
            available_funding: ActiveValue::Set(None),
            plan_start_date: ActiveValue::Set("2026-01-01".to_string()),
            plan_review_date: ActiveValue::Set("2027-01-01".to_string()),
            client_goals: ActiveValue::Set("Improve mobility".to_string()),
            referrer_first_name: ActiveValue::Set("Referrer".to_string()),
            referrer_last_name: ActiveValue::Set("Person".to_string()),
            referrer_agency: ActiveValue::Set(None),
            referrer_role: ActiveValue::Set(None),
            referrer_email: ActiveValue::Set(self.referrer_email),
            referrer_phone: ActiveValue::Set("0411111111".to_string()),
            referred_for: ActiveValue::Set(self.referred_for),
            reason_for_referral: ActiveValue::Set("Ongoing therapy required".to_string()),
            consent_checkbox: ActiveValue::Set(true),
            disability_type: ActiveValue::Set(Some("physical".to_string())),
            urgency_level: ActiveValue::Set(self.urgency_level),
            status: ActiveValue::Set(self.status),
            priority: ActiveValue::Set(self.priority),
            notes: ActiveValue::Set(None),
            assigned_provider_id: ActiveValue::Set(self.assigned_provider_id),
            accepted_at: ActiveValue::Set(self.accepted_at),
            raw_submission: ActiveValue::Set(serde_json::json!({})),
            form_metadata: ActiveValue::Set(serde_json::json!({})),
            created_at: ActiveValue::Set(self.created_at),
            updated_at: ActiveValue::Set(self.updated_at),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an unassigned referral with default values.
pub async fn create_referral(db: &DatabaseConnection) -> Result<entity::referral::Model, DbErr> {
    ReferralFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;

    #[tokio::test]
    async fn creates_referral_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_referral_tables()
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let referral = create_referral(db).await?;

        assert_eq!(referral.status, "new");
        assert_eq!(referral.priority, "medium");
        assert!(referral.assigned_provider_id.is_none());

        Ok(())
    }
}
