//! Referral email notifications and delivery status.
//!
//! Every send attempt is recorded in `email_logs` as `queued` before the transport is
//! called and then marked `sent` or `failed`. Email failures are logged and reported as
//! `false`, never returned as errors, so a referral submission cannot fail because of
//! the mail provider.

pub mod mailer;
pub mod template;

use sea_orm::DatabaseConnection;

use crate::{
    model::email::{
        EmailCountsDto, EmailLogDto, EmailStatisticsDto, NotificationResultsDto,
        ReferralEmailsDto,
    },
    server::{
        config::EmailConfig,
        data::{
            email_log::EmailLogRepository, referral::ReferralRepository, user::UserRepository,
        },
        error::AppError,
        model::{
            email_log::{
                CreateEmailLogParams, EmailLog, EmailType, EMAIL_STATUS_FAILED,
                EMAIL_STATUS_QUEUED, EMAIL_STATUS_SENT,
            },
            notification::Notification,
            referral::Referral,
            user::User,
        },
        service::email::mailer::{Mailer, OutgoingEmail},
        util::text::percentage,
    },
};

pub struct EmailService<'a, M: Mailer> {
    db: &'a DatabaseConnection,
    mailer: &'a M,
    config: &'a EmailConfig,
}

impl<'a, M: Mailer> EmailService<'a, M> {
    /// Creates a new EmailService instance.
    ///
    /// # Arguments
    /// - `db` - Database connection used for email logs
    /// - `mailer` - Transport used to deliver messages
    /// - `config` - Sender name and default provider recipient
    ///
    /// # Returns
    /// - `EmailService` - New service instance
    pub fn new(db: &'a DatabaseConnection, mailer: &'a M, config: &'a EmailConfig) -> Self {
        Self { db, mailer, config }
    }

    /// Sends the new referral details to each provider address.
    ///
    /// # Returns
    /// - `true` - Every recipient was sent successfully
    /// - `false` - No recipients, or at least one send failed
    pub async fn send_provider_notification(
        &self,
        referral: &Referral,
        provider_emails: &[String],
    ) -> bool {
        if provider_emails.is_empty() {
            return false;
        }

        let mut all_sent = true;
        for to in provider_emails {
            let email = template::provider_notification(referral, to);
            let sent = self
                .deliver(
                    Some(referral.id),
                    None,
                    EmailType::ProviderNotification,
                    email,
                )
                .await;
            all_sent &= sent;
        }

        all_sent
    }

    /// Sends a confirmation to the participant, or to their representative when the
    /// participant has no email address.
    ///
    /// Returns false without logging anything when neither address is present.
    pub async fn send_participant_confirmation(&self, referral: &Referral) -> bool {
        let Some(to) = referral.participant_contact_email() else {
            tracing::warn!(
                "Skipping participant confirmation for referral #{}: no email address",
                referral.id
            );
            return false;
        };

        let email = template::participant_confirmation(referral, to, &self.config.sender_name);
        self.deliver(
            Some(referral.id),
            None,
            EmailType::ParticipantConfirmation,
            email,
        )
        .await
    }

    /// Sends the plain-text submission acknowledgement to the referrer.
    pub async fn send_referrer_notification(&self, referral: &Referral) -> bool {
        let email = template::referrer_notification(referral, &self.config.sender_name);
        self.deliver(
            Some(referral.id),
            None,
            EmailType::ReferrerNotification,
            email,
        )
        .await
    }

    /// Sends the provider, participant and referrer emails concurrently.
    ///
    /// An empty provider list falls back to the configured default provider address.
    pub async fn send_all_notifications(
        &self,
        referral: &Referral,
        provider_emails: Vec<String>,
    ) -> NotificationResultsDto {
        if !self.mailer.is_configured() {
            tracing::warn!(
                "Email service not configured; notifications for referral #{} will be logged as failed",
                referral.id
            );
        }

        let provider_emails = if provider_emails.is_empty() {
            vec![self.config.default_provider_email.clone()]
        } else {
            provider_emails
        };

        let (provider_notification, participant_confirmation, referrer_notification) = tokio::join!(
            self.send_provider_notification(referral, &provider_emails),
            self.send_participant_confirmation(referral),
            self.send_referrer_notification(referral),
        );

        let results = NotificationResultsDto {
            provider_notification,
            participant_confirmation,
            referrer_notification,
        };

        tracing::info!("Email results for referral #{}: {:?}", referral.id, results);

        results
    }

    /// Emails a provider a copy of an admin notification.
    pub async fn send_provider_message(&self, provider: &User, notification: &Notification) -> bool {
        let email = template::provider_message(provider, notification);
        self.deliver(
            notification.related_referral_id,
            Some(provider.id),
            EmailType::ProviderMessage,
            email,
        )
        .await
    }

    /// Collects the addresses that should hear about a new referral.
    ///
    /// Active admins plus every active provider able to handle the referral's service.
    /// When no provider matches, all active providers are included instead. Duplicates
    /// are removed while keeping first-seen order.
    pub async fn resolve_provider_emails(&self, referral: &Referral) -> Result<Vec<String>, AppError> {
        let user_repo = UserRepository::new(self.db);

        let admins = user_repo.get_active_admins().await?;
        let mut providers = user_repo
            .get_suitable_providers(&referral.referred_for, None)
            .await?;
        if providers.is_empty() {
            providers = user_repo.get_providers(true, None).await?;
        }

        let mut emails: Vec<String> = Vec::new();
        for user in admins.into_iter().chain(providers) {
            if !user.email.is_empty() && !emails.contains(&user.email) {
                emails.push(user.email);
            }
        }

        Ok(emails)
    }

    /// Re-sends all notifications for an existing referral.
    ///
    /// # Returns
    /// - `Ok(NotificationResultsDto)` - Per-email outcome
    /// - `Err(AppError::NotFound)` - Referral does not exist
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn resend_notifications(
        &self,
        referral_id: i32,
    ) -> Result<NotificationResultsDto, AppError> {
        let referral = ReferralRepository::new(self.db)
            .find_by_id(referral_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Referral not found".to_string()))?;

        let provider_emails = self.resolve_provider_emails(&referral).await?;

        Ok(self.send_all_notifications(&referral, provider_emails).await)
    }

    /// Gets every logged email for a referral with per-status counts.
    ///
    /// # Returns
    /// - `Ok(ReferralEmailsDto)` - Emails newest first and their statistics
    /// - `Err(AppError::NotFound)` - Referral does not exist
    pub async fn get_referral_emails(&self, referral_id: i32) -> Result<ReferralEmailsDto, AppError> {
        if ReferralRepository::new(self.db)
            .find_by_id(referral_id)
            .await?
            .is_none()
        {
            return Err(AppError::NotFound("Referral not found".to_string()));
        }

        let emails = EmailLogRepository::new(self.db)
            .get_by_referral(referral_id)
            .await?;

        Ok(ReferralEmailsDto {
            referral_id,
            statistics: count_statuses(&emails),
            emails: emails.into_iter().map(EmailLog::into_dto).collect(),
        })
    }

    /// Gets the most recent failed emails.
    pub async fn get_failed_emails(&self, limit: u64) -> Result<Vec<EmailLogDto>, AppError> {
        let emails = EmailLogRepository::new(self.db).get_failed(limit).await?;

        Ok(emails.into_iter().map(EmailLog::into_dto).collect())
    }

    /// Gets overall delivery statistics.
    pub async fn get_statistics(&self) -> Result<EmailStatisticsDto, AppError> {
        let repo = EmailLogRepository::new(self.db);

        let total_emails = repo.count(None).await?;
        let sent = repo.count(Some(EMAIL_STATUS_SENT)).await?;
        let failed = repo.count(Some(EMAIL_STATUS_FAILED)).await?;
        let pending = repo.count(Some(EMAIL_STATUS_QUEUED)).await?;
        let by_type = repo.count_by_type().await?;

        Ok(EmailStatisticsDto {
            total_emails,
            sent,
            failed,
            pending,
            success_rate: percentage(sent, total_emails),
            by_type,
        })
    }

    /// Logs the email as queued, sends it, and records the outcome.
    async fn deliver(
        &self,
        referral_id: Option<i32>,
        user_id: Option<i32>,
        email_type: EmailType,
        email: OutgoingEmail,
    ) -> bool {
        let repo = EmailLogRepository::new(self.db);

        let log = match repo
            .create_queued(CreateEmailLogParams {
                referral_id,
                user_id,
                email_type,
                to_address: email.to.clone(),
                subject: email.subject.clone(),
                body: Some(email.text.clone()),
            })
            .await
        {
            Ok(log) => Some(log),
            Err(e) => {
                tracing::warn!("Failed to record {} email log: {}", email_type.as_str(), e);
                None
            }
        };

        let result = self.mailer.send(&email).await;

        let outcome = match &result {
            Ok(()) => match &log {
                Some(log) => repo.mark_sent(log.id).await,
                None => Ok(()),
            },
            Err(e) => {
                tracing::warn!(
                    "Failed to send {} email to {}: {}",
                    email_type.as_str(),
                    email.to,
                    e
                );
                match &log {
                    Some(log) => repo.mark_failed(log.id, &e.to_string()).await,
                    None => Ok(()),
                }
            }
        };

        if let Err(e) = outcome {
            tracing::warn!("Failed to update {} email log: {}", email_type.as_str(), e);
        }

        result.is_ok()
    }
}

/// Dispatches the notifications for a newly created referral on a background task.
///
/// The task owns its own handles so the request can return immediately. Failures are
/// only logged.
pub fn spawn_referral_notifications<M>(
    db: DatabaseConnection,
    mailer: M,
    config: EmailConfig,
    referral: Referral,
) where
    M: Mailer + Clone + 'static,
{
    tokio::spawn(async move {
        let service = EmailService::new(&db, &mailer, &config);

        let provider_emails = match service.resolve_provider_emails(&referral).await {
            Ok(emails) => emails,
            Err(e) => {
                tracing::warn!(
                    "Failed to look up provider emails for referral #{}: {}",
                    referral.id,
                    e
                );
                Vec::new()
            }
        };

        service
            .send_all_notifications(&referral, provider_emails)
            .await;
    });
}

/// Tallies log entries by delivery status. Queued entries count as pending.
fn count_statuses(emails: &[EmailLog]) -> EmailCountsDto {
    let mut counts = EmailCountsDto {
        total: emails.len() as u64,
        ..Default::default()
    };

    for email in emails {
        match email.status.as_str() {
            EMAIL_STATUS_SENT => counts.sent += 1,
            EMAIL_STATUS_FAILED => counts.failed += 1,
            _ => counts.pending += 1,
        }
    }

    counts
}

#[cfg(test)]
mod test;
