mod model;
mod server;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    config::Config, error::AppError, router, service::auth::admin_code::AdminCodeService,
    service::email::mailer::MailgunMailer, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db, &config).await?;
    let http_client = startup::setup_reqwest_client()?;
    let cors = startup::cors_layer(&config)?;

    let mailer = MailgunMailer::new(http_client, config.email.clone());
    if !config.email.is_configured() {
        tracing::warn!("MAILGUN_API_KEY or MAILGUN_DOMAIN not set; emails will be logged as failed");
    }

    let admin_code_service = AdminCodeService::new();

    // Check for admin users and generate a registration code if none exist
    startup::check_for_admin(&db, &admin_code_service).await?;

    let app = router::router()
        .with_state(AppState::new(db, mailer, admin_code_service))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Starting {} on http://{}", config.app_name, config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
