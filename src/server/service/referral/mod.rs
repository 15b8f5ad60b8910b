//! Referral intake and admin maintenance.

use chrono::Utc;
use sea_orm::DatabaseConnection;
use serde_json::json;

use crate::{
    model::{
        referral::{CreateReferralDto, ReferralStatus, UpdateReferralDto},
        user::UserRole,
    },
    server::{
        data::{referral::ReferralRepository, user::UserRepository},
        error::{internal::InternalError, AppError},
        model::referral::{CreateReferralParams, Referral, ReferralFilter, UpdateReferralParams},
    },
};

const MIN_REASON_LENGTH: usize = 10;

pub struct ReferralService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReferralService<'a> {
    /// Creates a new ReferralService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection
    ///
    /// # Returns
    /// - `ReferralService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Stores a referral submitted through the public form.
    ///
    /// The submission is validated, kept verbatim as JSON alongside the parsed columns,
    /// and stamped with form metadata. Notification emails are dispatched by the caller.
    ///
    /// # Returns
    /// - `Ok(Referral)` - Created referral with status `new`
    /// - `Err(AppError::BadRequest)` - Missing consent, short reason or empty required field
    /// - `Err(AppError::InternalErr)` - Submission could not be serialized
    pub async fn create(&self, dto: CreateReferralDto) -> Result<Referral, AppError> {
        validate_submission(&dto)?;

        let raw_submission =
            serde_json::to_value(&dto).map_err(|source| InternalError::Serialize {
                what: "referral submission",
                source,
            })?;
        let form_metadata = json!({
            "created_by": "web_form",
            "created_timestamp": Utc::now().to_rfc3339(),
            "source": "referral_form",
            "version": "1.0",
        });

        let referral = ReferralRepository::new(self.db)
            .create(CreateReferralParams {
                form: dto,
                raw_submission,
                form_metadata,
            })
            .await?;

        tracing::info!(
            "Created referral #{} for {}",
            referral.id,
            referral.referred_for
        );

        Ok(referral)
    }

    /// Lists referrals newest first, optionally by status.
    pub async fn list(
        &self,
        status: Option<ReferralStatus>,
        skip: u64,
        limit: u64,
    ) -> Result<Vec<Referral>, AppError> {
        let filter = ReferralFilter {
            status: status.map(|status| status.as_str().to_string()),
            ..Default::default()
        };

        Ok(ReferralRepository::new(self.db)
            .list(&filter, skip, limit)
            .await?)
    }

    /// Gets a referral by id.
    ///
    /// # Returns
    /// - `Ok(Referral)` - Referral found
    /// - `Err(AppError::NotFound)` - No referral with that id
    pub async fn get(&self, id: i32) -> Result<Referral, AppError> {
        ReferralRepository::new(self.db)
            .find_by_id(id)
            .await?
            .ok_or_else(not_found)
    }

    /// Applies an admin partial update.
    ///
    /// A new `assigned_provider_id` must name an active provider.
    ///
    /// # Returns
    /// - `Ok(Referral)` - Updated referral
    /// - `Err(AppError::NotFound)` - Referral or provider does not exist
    /// - `Err(AppError::BadRequest)` - Assignee is not an active provider
    pub async fn update(&self, id: i32, dto: UpdateReferralDto) -> Result<Referral, AppError> {
        if let Some(provider_id) = dto.assigned_provider_id {
            let user = UserRepository::new(self.db)
                .find_by_id(provider_id)
                .await?
                .ok_or_else(|| AppError::NotFound("Provider not found".to_string()))?;

            if !user.has_role(UserRole::Provider) || !user.is_active {
                return Err(AppError::BadRequest(format!(
                    "User {} is not an active provider",
                    provider_id
                )));
            }
        }

        ReferralRepository::new(self.db)
            .update(id, UpdateReferralParams::from_dto(dto))
            .await?
            .ok_or_else(not_found)
    }

    /// Deletes a referral.
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if !ReferralRepository::new(self.db).delete(id).await? {
            return Err(not_found());
        }

        tracing::info!("Deleted referral #{}", id);

        Ok(())
    }
}

fn not_found() -> AppError {
    AppError::NotFound("Referral not found".to_string())
}

/// Checks consent, the referral reason length, and that required fields are filled in.
fn validate_submission(dto: &CreateReferralDto) -> Result<(), AppError> {
    if !dto.consent_checkbox {
        return Err(AppError::BadRequest(
            "Consent must be given before submitting a referral".to_string(),
        ));
    }

    let required = [
        ("firstName", &dto.first_name),
        ("lastName", &dto.last_name),
        ("dateOfBirth", &dto.date_of_birth),
        ("phoneNumber", &dto.phone_number),
        ("streetAddress", &dto.street_address),
        ("city", &dto.city),
        ("state", &dto.state),
        ("postcode", &dto.postcode),
        ("planType", &dto.plan_type),
        ("planStartDate", &dto.plan_start_date),
        ("planReviewDate", &dto.plan_review_date),
        ("clientGoals", &dto.client_goals),
        ("referrerFirstName", &dto.referrer_first_name),
        ("referrerLastName", &dto.referrer_last_name),
        ("referrerEmail", &dto.referrer_email),
        ("referrerPhone", &dto.referrer_phone),
        ("referredFor", &dto.referred_for),
        ("reasonForReferral", &dto.reason_for_referral),
    ];
    if let Some((field, _)) = required.iter().find(|(_, value)| value.trim().is_empty()) {
        return Err(AppError::BadRequest(format!("{} is required", field)));
    }

    if dto.reason_for_referral.trim().chars().count() < MIN_REASON_LENGTH {
        return Err(AppError::BadRequest(format!(
            "Reason for referral must be at least {} characters",
            MIN_REASON_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod test;
