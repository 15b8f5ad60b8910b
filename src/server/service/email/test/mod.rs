use std::sync::Mutex;

use crate::server::{
    config::EmailConfig,
    error::email::EmailError,
    model::referral::Referral,
    service::email::{
        mailer::{Mailer, OutgoingEmail},
        EmailService,
    },
};
use sea_orm::{DatabaseConnection, DbErr, EntityTrait};
use test_utils::{builder::TestBuilder, factory};

mod delivery;
mod status;

/// Mailer that records every message and fails for selected recipients.
#[derive(Default)]
struct RecordingMailer {
    unconfigured: bool,
    failing_recipients: Vec<String>,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl RecordingMailer {
    fn unconfigured() -> Self {
        Self {
            unconfigured: true,
            ..Default::default()
        }
    }

    fn failing_for(recipient: &str) -> Self {
        Self {
            failing_recipients: vec![recipient.to_string()],
            ..Default::default()
        }
    }

    fn sent(&self) -> Vec<OutgoingEmail> {
        self.sent.lock().unwrap().clone()
    }
}

impl Mailer for RecordingMailer {
    fn is_configured(&self) -> bool {
        !self.unconfigured
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        if self.unconfigured {
            return Err(EmailError::NotConfigured);
        }
        if self.failing_recipients.contains(&email.to) {
            return Err(EmailError::Rejected {
                status: 400,
                body: "rejected".to_string(),
            });
        }

        self.sent.lock().unwrap().push(email.clone());
        Ok(())
    }
}

fn email_config() -> EmailConfig {
    EmailConfig {
        api_key: Some("key".to_string()),
        domain: Some("mg.example.com".to_string()),
        sender_email: "noreply@mg.example.com".to_string(),
        sender_name: "NDIS Referral Service".to_string(),
        base_url: "https://api.mailgun.net".to_string(),
        default_provider_email: "intake@example.com".to_string(),
    }
}

async fn email_logs(db: &DatabaseConnection) -> Result<Vec<entity::email_log::Model>, DbErr> {
    entity::prelude::EmailLog::find().all(db).await
}
