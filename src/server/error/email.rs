use thiserror::Error;

/// Failure to hand an email to the provider.
///
/// Email errors never reach HTTP responses; they are logged and written to the
/// email log's `error` column.
#[derive(Error, Debug)]
pub enum EmailError {
    /// API key or domain missing from configuration.
    #[error("Email service not configured")]
    NotConfigured,

    /// Transport failure talking to the email API.
    #[error("Email request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The email API answered with a non-success status.
    #[error("Email API returned {status}: {body}")]
    Rejected { status: u16, body: String },
}
