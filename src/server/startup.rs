use axum::http::HeaderValue;
use sea_orm::DatabaseConnection;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_sessions::{cookie::SameSite, Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    data::user::UserRepository,
    error::{config::ConfigError, AppError},
    service::auth::admin_code::AdminCodeService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the session layer backed by the application's Sqlite pool.
///
/// Sessions are stored in the same database as application data. The session table is
/// created on first start, and sessions expire after the configured period of inactivity.
///
/// # Arguments
/// - `db` - Connected database whose pool is shared with the session store
/// - `config` - Application configuration containing the session expiry
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Layer to attach to the router
/// - `Err(AppError::SessionStoreErr)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
    config: &Config,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool();
    let store = SqliteStore::new(pool.clone());
    store.migrate().await?;

    let layer = SessionManagerLayer::new(store)
        .with_secure(false)
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(time::Duration::minutes(
            config.session_expiry_minutes,
        )));

    Ok(layer)
}

/// Builds the HTTP client used for outbound email API calls.
///
/// Redirects are disabled so credentials are never forwarded to another host.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Builds the CORS layer from the configured origins.
///
/// Only the listed origins are allowed, with credentials so the session cookie is sent
/// cross-origin.
///
/// # Returns
/// - `Ok(CorsLayer)` - Layer to attach to the router
/// - `Err(AppError::ConfigErr)` - An origin is `*` or not a valid header value
pub fn cors_layer(config: &Config) -> Result<CorsLayer, AppError> {
    let origins = config
        .cors_origins
        .iter()
        .map(|origin| {
            if origin == "*" {
                return Err(ConfigError::InvalidEnvVar {
                    name: "CORS_ORIGINS".to_string(),
                    reason: "`*` cannot be combined with credentials".to_string(),
                });
            }

            HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                name: "CORS_ORIGINS".to_string(),
                reason: format!("{}: {}", origin, e),
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CorsLayer::new()
        .allow_origin(origins)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true))
}

/// Generates a one-time admin registration code when no admin exists yet.
///
/// The code is written to the log so the operator can register the first admin account
/// through `POST /api/v1/auth/register`.
///
/// # Arguments
/// - `db` - Database connection used to look for an admin user
/// - `admin_code_service` - Service that holds the generated code
///
/// # Returns
/// - `Ok(())` - An admin exists or a code was generated
/// - `Err(AppError::DbErr)` - Failed to query users
pub async fn check_for_admin(
    db: &DatabaseConnection,
    admin_code_service: &AdminCodeService,
) -> Result<(), AppError> {
    if UserRepository::new(db).admin_exists().await? {
        return Ok(());
    }

    let code = admin_code_service.generate().await;

    tracing::info!(
        "No admin user found. Register the first admin with admin code: {}",
        code
    );

    Ok(())
}
