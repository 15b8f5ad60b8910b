//! Application state shared across all request handlers.
//!
//! The state is built once during startup and cloned into each handler through Axum's
//! state extraction. Every field is cheap to clone: the database connection and HTTP
//! client are pools, and the admin code service shares its slot through an `Arc`.

use sea_orm::DatabaseConnection;

use crate::server::service::{auth::admin_code::AdminCodeService, email::mailer::MailgunMailer};

#[derive(Clone)]
pub struct AppState {
    /// Connection pool for the SQLite database.
    pub db: DatabaseConnection,

    /// Transport used for referral and provider emails. Also carries the email
    /// configuration through [`MailgunMailer::config`].
    pub mailer: MailgunMailer,

    /// Holder of the one-time admin bootstrap code.
    pub admin_code_service: AdminCodeService,
}

impl AppState {
    /// Creates a new application state with the provided dependencies.
    ///
    /// # Arguments
    /// - `db` - Database connection pool
    /// - `mailer` - Email transport
    /// - `admin_code_service` - Service for managing admin codes
    ///
    /// # Returns
    /// - `AppState` - Initialized application state ready for use
    pub fn new(
        db: DatabaseConnection,
        mailer: MailgunMailer,
        admin_code_service: AdminCodeService,
    ) -> Self {
        Self {
            db,
            mailer,
            admin_code_service,
        }
    }
}
