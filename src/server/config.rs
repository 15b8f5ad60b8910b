//! Environment-based application configuration.

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_APP_NAME: &str = "NDIS Referral Service";
const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:8000";
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000,http://127.0.0.1:3000";
const DEFAULT_SESSION_EXPIRY_MINUTES: i64 = 1440;
/// One year.
const MAX_SESSION_EXPIRY_MINUTES: i64 = 525_600;
const DEFAULT_MAILGUN_BASE_URL: &str = "https://api.mailgun.net";
const DEFAULT_PROVIDER_EMAIL: &str = "provider@example.com";

/// Outbound email settings.
///
/// Email is only sent when both an API key and a domain are present; otherwise every
/// send attempt is recorded as failed with "Email service not configured".
#[derive(Clone, Debug)]
pub struct EmailConfig {
    pub api_key: Option<String>,
    pub domain: Option<String>,
    pub sender_email: String,
    pub sender_name: String,
    pub base_url: String,
    /// Recipient used for provider notifications when no provider is assigned.
    pub default_provider_email: String,
}

impl EmailConfig {
    /// Returns true when both the API key and domain are set.
    pub fn is_configured(&self) -> bool {
        self.api_key.is_some() && self.domain.is_some()
    }
}

pub struct Config {
    pub database_url: String,
    pub app_name: String,
    pub bind_address: String,
    pub cors_origins: Vec<String>,
    pub session_expiry_minutes: i64,
    pub email: EmailConfig,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let app_name = optional_var("APP_NAME").unwrap_or_else(|| DEFAULT_APP_NAME.to_string());
        let bind_address =
            optional_var("BIND_ADDRESS").unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string());

        let cors_origins = parse_cors_origins(
            optional_var("CORS_ORIGINS")
                .as_deref()
                .unwrap_or(DEFAULT_CORS_ORIGINS),
        )?;

        let session_expiry_minutes = match optional_var("SESSION_EXPIRY_MINUTES") {
            Some(value) => parse_session_expiry(&value)?,
            None => DEFAULT_SESSION_EXPIRY_MINUTES,
        };

        let api_key = optional_var("MAILGUN_API_KEY");
        let domain = optional_var("MAILGUN_DOMAIN");

        let sender_email = optional_var("MAILGUN_SENDER_EMAIL").unwrap_or_else(|| {
            format!("noreply@{}", domain.as_deref().unwrap_or("localhost"))
        });

        let base_url = optional_var("MAILGUN_BASE_URL")
            .unwrap_or_else(|| DEFAULT_MAILGUN_BASE_URL.to_string());
        Url::parse(&base_url).map_err(|e| ConfigError::InvalidEnvVar {
            name: "MAILGUN_BASE_URL".to_string(),
            reason: e.to_string(),
        })?;

        let default_provider_email = optional_var("DEFAULT_PROVIDER_EMAIL")
            .unwrap_or_else(|| DEFAULT_PROVIDER_EMAIL.to_string());

        Ok(Self {
            database_url,
            email: EmailConfig {
                api_key,
                domain,
                sender_email,
                sender_name: app_name.clone(),
                base_url: base_url.trim_end_matches('/').to_string(),
                default_provider_email,
            },
            app_name,
            bind_address,
            cors_origins,
            session_expiry_minutes,
        })
    }
}

/// Splits `CORS_ORIGINS` into a list of explicit origins.
///
/// Sessions ride on a cookie, so the CORS layer always allows credentials and browsers
/// refuse credentialed responses for a `*` origin. A wildcard is rejected here instead of
/// failing silently in the browser.
pub fn parse_cors_origins(raw: &str) -> Result<Vec<String>, ConfigError> {
    let origins: Vec<String> = raw
        .split(',')
        .map(|origin| origin.trim().to_string())
        .filter(|origin| !origin.is_empty())
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        return Err(ConfigError::InvalidEnvVar {
            name: "CORS_ORIGINS".to_string(),
            reason: "`*` cannot be combined with session cookies, list the origins".to_string(),
        });
    }
    if origins.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: "CORS_ORIGINS".to_string(),
            reason: "at least one origin is required".to_string(),
        });
    }

    Ok(origins)
}

/// Parses `SESSION_EXPIRY_MINUTES`, which must be between 1 minute and one year.
pub fn parse_session_expiry(raw: &str) -> Result<i64, ConfigError> {
    let invalid = |reason: String| ConfigError::InvalidEnvVar {
        name: "SESSION_EXPIRY_MINUTES".to_string(),
        reason,
    };

    let minutes = raw.trim().parse::<i64>().map_err(|e| invalid(e.to_string()))?;
    if !(1..=MAX_SESSION_EXPIRY_MINUTES).contains(&minutes) {
        return Err(invalid(format!(
            "{} is outside 1..={}",
            minutes, MAX_SESSION_EXPIRY_MINUTES
        )));
    }

    Ok(minutes)
}

/// Reads an environment variable, treating empty values as unset.
fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}
