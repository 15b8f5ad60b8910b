use crate::{
    model::notification::{NotificationPriority, SendNotificationDto},
    server::{
        config::EmailConfig,
        service::email::{mailer::MailgunMailer, EmailService},
    },
};

use super::*;

/// Tests provider alerts.
///
/// Verifies that more than five stale new referrals raise a high severity alert and
/// that high alerts sort before medium ones.
///
/// Expected: Ok with a high overdue alert first, then the long-running alert
#[tokio::test]
async fn raises_and_sorts_alerts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let swamped = factory::create_provider(db).await?;
    let slow = factory::create_provider(db).await?;

    for _ in 0..6 {
        ReferralFactory::new(db)
            .assigned_provider_id(swamped.id)
            .created_at(Utc::now() - Duration::days(4))
            .build()
            .await?;
    }
    ReferralFactory::new(db)
        .assigned_provider_id(slow.id)
        .status("in_progress")
        .accepted_at(Utc::now() - Duration::days(45))
        .build()
        .await?;

    let service = ProviderAdminService::new(db);
    let alerts = service.get_provider_alerts(None).await?;

    assert_eq!(alerts.len(), 2);
    assert_eq!(alerts[0].alert_type, "overdue_referrals");
    assert_eq!(alerts[0].severity, "high");
    assert_eq!(alerts[0].message, "6 referrals overdue for response");
    assert_eq!(alerts[0].provider_id, swamped.id);
    assert_eq!(alerts[1].alert_type, "long_running");
    assert_eq!(alerts[1].message, "1 referrals in progress for over 30 days");

    let high_only = service.get_provider_alerts(Some("high")).await?;
    assert_eq!(high_only.len(), 1);

    Ok(())
}

/// Tests the admin view of a provider dashboard.
///
/// Expected: Ok with provider info, dashboard counts and no alerts
#[tokio::test]
async fn provider_dashboard_includes_info() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, _) = factory::helpers::create_assigned_referral(db).await?;

    let dashboard = ProviderAdminService::new(db)
        .get_provider_dashboard(provider.id)
        .await?;

    assert_eq!(dashboard.provider_info.id, provider.id);
    assert_eq!(dashboard.provider_info.service_type.as_deref(), Some("physiotherapy"));
    assert_eq!(dashboard.dashboard.total_referrals, 1);
    assert_eq!(dashboard.dashboard.accepted_referrals, 1);
    assert!(dashboard.alerts.is_empty());

    Ok(())
}

/// Tests the provider timeline.
///
/// Expected: Ok with one event titled by status
#[tokio::test]
async fn timeline_describes_referrals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = ReferralFactory::new(db)
        .name("Sam", "Rivera")
        .assigned_provider_id(provider.id)
        .status("completed")
        .build()
        .await?;
    ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .created_at(Utc::now() - Duration::days(60))
        .build()
        .await?;

    let timeline = ProviderAdminService::new(db)
        .get_provider_timeline(provider.id, None, None, 50)
        .await?;

    assert_eq!(timeline.len(), 1);
    assert_eq!(timeline[0].event_type, "referral_activity");
    assert_eq!(
        timeline[0].title,
        format!("Referral #{} - Completed", referral.id)
    );
    assert_eq!(timeline[0].description, "Sam Rivera - physiotherapy");

    Ok(())
}

/// Tests recording a performance review.
///
/// Verifies that out of range ratings are rejected and that a stored review carries a
/// snapshot of the provider's metrics.
///
/// Expected: Err(AppError::BadRequest) for rating 6, then Ok with a snapshot
#[tokio::test]
async fn records_performance_review() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (provider, _) = factory::helpers::create_assigned_referral(db).await?;

    let service = ProviderAdminService::new(db);
    let invalid = service
        .create_performance_review(
            provider.id,
            CreatePerformanceReviewDto {
                rating: 6,
                comments: None,
                goals: None,
            },
            admin.id,
        )
        .await;
    assert!(matches!(invalid, Err(AppError::BadRequest(_))));

    let review = service
        .create_performance_review(
            provider.id,
            CreatePerformanceReviewDto {
                rating: 4,
                comments: Some("Reliable".to_string()),
                goals: None,
            },
            admin.id,
        )
        .await?;

    assert_eq!(review.rating, 4);
    assert_eq!(review.reviewed_by_user_id, admin.id);
    assert_eq!(review.metrics_snapshot["total_referrals"], 1);

    Ok(())
}

/// Tests sending a notification when email is not configured.
///
/// Verifies that the notification is stored even though the email cannot be sent.
///
/// Expected: Ok with email_sent false and one stored notification
#[tokio::test]
async fn notification_is_stored_without_email() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;

    let config = EmailConfig {
        api_key: None,
        domain: None,
        sender_email: "noreply@example.com".to_string(),
        sender_name: "NDIS Referral Service".to_string(),
        base_url: "https://api.mailgun.net".to_string(),
        default_provider_email: "intake@example.com".to_string(),
    };
    let mailer = MailgunMailer::new(reqwest::Client::new(), config.clone());
    let email = EmailService::new(db, &mailer, &config);

    let result = ProviderAdminService::new(db)
        .send_notification(
            provider.id,
            SendNotificationDto {
                notification_type: "general".to_string(),
                title: "Compliance check".to_string(),
                message: "Please update your license details".to_string(),
                priority: NotificationPriority::High,
                action_required: true,
            },
            admin.id,
            &email,
        )
        .await?;

    assert!(!result.email_sent);
    assert_eq!(result.notification.priority, "high");
    assert_eq!(result.notification.sent_by_user_id, Some(admin.id));

    let stored = entity::prelude::ProviderNotification::find().all(db).await?;
    assert_eq!(stored.len(), 1);

    Ok(())
}

/// Tests the admin dashboard summary.
///
/// Expected: Ok with provider and referral counts
#[tokio::test]
async fn summarizes_dashboard() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    factory::create_provider(db).await?;
    UserFactory::new(db)
        .role("provider")
        .service_type("physiotherapy")
        .active(false)
        .build()
        .await?;
    factory::create_referral(db).await?;
    ReferralFactory::new(db)
        .created_at(Utc::now() - Duration::days(5))
        .build()
        .await?;

    let summary = ProviderAdminService::new(db).get_dashboard_summary().await?;

    assert_eq!(summary.providers.total, 2);
    assert_eq!(summary.providers.active, 1);
    assert_eq!(summary.providers.inactive, 1);
    assert_eq!(summary.referrals.total, 2);
    assert_eq!(summary.referrals.unassigned, 2);
    assert_eq!(summary.referrals.overdue, 1);
    assert_eq!(summary.recent_referrals.len(), 2);

    Ok(())
}
