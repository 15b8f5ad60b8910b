use super::*;

/// Tests dispatching all three referral notifications.
///
/// Verifies that an empty provider list falls back to the default provider address,
/// that each email is logged, and that every log ends up `sent`.
///
/// Expected: all three results true, three sent logs
#[tokio::test]
async fn sends_all_notifications_to_default_provider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = Referral::from_entity(factory::create_referral(db).await?);

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let results = service.send_all_notifications(&referral, Vec::new()).await;

    assert!(results.provider_notification);
    assert!(results.participant_confirmation);
    assert!(results.referrer_notification);

    let sent = mailer.sent();
    assert_eq!(sent.len(), 3);
    assert!(sent.iter().any(|email| email.to == "intake@example.com"
        && email.subject == format!("New NDIS Referral #{} - Physiotherapy", referral.id)));
    assert!(sent.iter().any(|email| email.to == referral.referrer_email
        && email.subject == format!("Referral #{} Submitted Successfully", referral.id)));

    let logs = email_logs(db).await?;
    assert_eq!(logs.len(), 3);
    assert!(logs.iter().all(|log| log.status == "sent" && log.error.is_none()));

    Ok(())
}

/// Tests sending with an unconfigured mail transport.
///
/// Verifies that attempts are still logged and marked failed with the
/// not-configured message.
///
/// Expected: false, failed log with "Email service not configured"
#[tokio::test]
async fn logs_failure_when_not_configured() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = Referral::from_entity(factory::create_referral(db).await?);

    let mailer = RecordingMailer::unconfigured();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let sent = service.send_referrer_notification(&referral).await;

    assert!(!sent);
    let logs = email_logs(db).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, "failed");
    assert_eq!(logs[0].email_type, "referrer_notification");
    assert_eq!(logs[0].error.as_deref(), Some("Email service not configured"));

    Ok(())
}

/// Tests the participant confirmation without any contact email.
///
/// Verifies that the send is skipped entirely when neither the participant nor a
/// representative has an email address.
///
/// Expected: false, no log rows
#[tokio::test]
async fn skips_participant_without_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = Referral::from_entity(
        factory::referral::ReferralFactory::new(db)
            .email_address(None)
            .build()
            .await?,
    );

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    assert!(!service.send_participant_confirmation(&referral).await);
    assert!(mailer.sent().is_empty());
    assert!(email_logs(db).await?.is_empty());

    Ok(())
}

/// Tests provider notification with one rejected recipient.
///
/// Verifies that each recipient gets its own log entry and that the overall
/// result is false when any recipient fails.
///
/// Expected: false, one sent and one failed log
#[tokio::test]
async fn provider_notification_fails_when_any_recipient_fails() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = Referral::from_entity(factory::create_referral(db).await?);

    let mailer = RecordingMailer::failing_for("bounce@example.com");
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let recipients = vec![
        "ok@example.com".to_string(),
        "bounce@example.com".to_string(),
    ];
    let sent = service
        .send_provider_notification(&referral, &recipients)
        .await;

    assert!(!sent);
    let logs = email_logs(db).await?;
    assert_eq!(logs.len(), 2);
    let failed = logs
        .iter()
        .find(|log| log.to_address == "bounce@example.com")
        .unwrap();
    assert_eq!(failed.status, "failed");
    assert!(failed.error.is_some());
    let ok = logs
        .iter()
        .find(|log| log.to_address == "ok@example.com")
        .unwrap();
    assert_eq!(ok.status, "sent");

    Ok(())
}

/// Tests resolving notification recipients for a referral.
///
/// Verifies that active admins and matching providers are included, that providers
/// for other services and inactive accounts are not, and that no address repeats.
///
/// Expected: admin email followed by the matching provider's email
#[tokio::test]
async fn resolves_admins_and_matching_providers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let admin = factory::create_admin(db).await?;
    factory::user::UserFactory::new(db)
        .role("admin")
        .active(false)
        .build()
        .await?;
    let physio = factory::create_provider(db).await?;
    factory::user::UserFactory::new(db)
        .role("provider")
        .service_type("psychologist")
        .build()
        .await?;
    let referral = Referral::from_entity(factory::create_referral(db).await?);

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let emails = service.resolve_provider_emails(&referral).await.unwrap();

    assert_eq!(emails, vec![admin.email, physio.email]);

    Ok(())
}
