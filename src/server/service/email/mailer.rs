//! Outbound email transport.

use std::future::Future;

use crate::server::{config::EmailConfig, error::email::EmailError};

/// A rendered message ready to send.
#[derive(Debug, Clone, PartialEq)]
pub struct OutgoingEmail {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: Option<String>,
}

/// Transport that delivers rendered emails.
pub trait Mailer: Send + Sync {
    /// Whether the transport has the credentials it needs to send.
    fn is_configured(&self) -> bool;

    fn send(&self, email: &OutgoingEmail) -> impl Future<Output = Result<(), EmailError>> + Send;
}

/// Mailgun HTTP API transport.
///
/// Posts a form to `{base_url}/v3/{domain}/messages` with basic auth `api:{api_key}`.
#[derive(Clone)]
pub struct MailgunMailer {
    http_client: reqwest::Client,
    config: EmailConfig,
}

impl MailgunMailer {
    pub fn new(http_client: reqwest::Client, config: EmailConfig) -> Self {
        Self {
            http_client,
            config,
        }
    }

    pub fn config(&self) -> &EmailConfig {
        &self.config
    }

    fn messages_url(&self, domain: &str) -> String {
        format!(
            "{}/v3/{}/messages",
            self.config.base_url.trim_end_matches('/'),
            domain
        )
    }
}

impl Mailer for MailgunMailer {
    fn is_configured(&self) -> bool {
        self.config.is_configured()
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<(), EmailError> {
        let (Some(api_key), Some(domain)) = (&self.config.api_key, &self.config.domain) else {
            return Err(EmailError::NotConfigured);
        };

        let mut form = vec![
            (
                "from",
                format!("{} <{}>", self.config.sender_name, self.config.sender_email),
            ),
            ("to", email.to.clone()),
            ("subject", email.subject.clone()),
            ("text", email.text.clone()),
        ];
        if let Some(html) = &email.html {
            form.push(("html", html.clone()));
        }

        let response = self
            .http_client
            .post(self.messages_url(domain))
            .basic_auth("api", Some(api_key))
            .form(&form)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(EmailError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(api_key: Option<&str>, domain: Option<&str>) -> EmailConfig {
        EmailConfig {
            api_key: api_key.map(str::to_string),
            domain: domain.map(str::to_string),
            sender_email: "noreply@mg.example.com".to_string(),
            sender_name: "NDIS Referral Service".to_string(),
            base_url: "https://api.mailgun.net/".to_string(),
            default_provider_email: "provider@example.com".to_string(),
        }
    }

    #[test]
    fn builds_messages_url_without_double_slash() {
        let mailer = MailgunMailer::new(
            reqwest::Client::new(),
            config(Some("key"), Some("mg.example.com")),
        );

        assert_eq!(
            mailer.messages_url("mg.example.com"),
            "https://api.mailgun.net/v3/mg.example.com/messages"
        );
    }

    #[tokio::test]
    async fn unconfigured_mailer_refuses_to_send() {
        let mailer = MailgunMailer::new(reqwest::Client::new(), config(None, Some("mg.example.com")));
        let email = OutgoingEmail {
            to: "someone@example.com".to_string(),
            subject: "Subject".to_string(),
            text: "Body".to_string(),
            html: None,
        };

        assert!(!mailer.is_configured());
        assert!(matches!(
            mailer.send(&email).await,
            Err(EmailError::NotConfigured)
        ));
    }
}
