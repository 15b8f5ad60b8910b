use super::*;
use crate::server::error::AppError;

/// Tests listing the emails of a referral.
///
/// Verifies that statistics count queued entries as pending and that emails of other
/// referrals are excluded.
///
/// Expected: total 3, sent 1, failed 1, pending 1
#[tokio::test]
async fn returns_referral_emails_with_counts() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = factory::create_referral(db).await?;
    let other = factory::create_referral(db).await?;

    factory::create_email_log(db, referral.id, "provider_notification", "sent").await?;
    factory::create_email_log(db, referral.id, "referrer_notification", "failed").await?;
    factory::create_email_log(db, referral.id, "participant_confirmation", "queued").await?;
    factory::create_email_log(db, other.id, "provider_notification", "sent").await?;

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let result = service.get_referral_emails(referral.id).await?;

    assert_eq!(result.referral_id, referral.id);
    assert_eq!(result.emails.len(), 3);
    assert_eq!(result.statistics.total, 3);
    assert_eq!(result.statistics.sent, 1);
    assert_eq!(result.statistics.failed, 1);
    assert_eq!(result.statistics.pending, 1);

    Ok(())
}

/// Tests listing emails for a referral that does not exist.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn referral_emails_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let result = service.get_referral_emails(999).await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests overall delivery statistics.
///
/// Verifies the success rate is rounded to two decimals and counts are grouped by type.
///
/// Expected: success_rate 33.33, two provider notifications
#[tokio::test]
async fn computes_statistics() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let referral = factory::create_referral(db).await?;

    factory::create_email_log(db, referral.id, "provider_notification", "sent").await?;
    factory::create_email_log(db, referral.id, "provider_notification", "failed").await?;
    factory::create_email_log(db, referral.id, "referrer_notification", "failed").await?;

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let stats = service.get_statistics().await?;

    assert_eq!(stats.total_emails, 3);
    assert_eq!(stats.sent, 1);
    assert_eq!(stats.failed, 2);
    assert_eq!(stats.pending, 0);
    assert_eq!(stats.success_rate, 33.33);
    assert_eq!(stats.by_type.get("provider_notification"), Some(&2));

    Ok(())
}

/// Tests re-sending notifications for an existing referral.
///
/// Verifies that the matching provider is emailed instead of the default address.
///
/// Expected: provider notification delivered to the provider
#[tokio::test]
async fn resends_to_matching_provider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = factory::create_referral(db).await?;

    let mailer = RecordingMailer::default();
    let config = email_config();
    let service = EmailService::new(db, &mailer, &config);

    let results = service.resend_notifications(referral.id).await?;

    assert!(results.provider_notification);
    assert!(mailer.sent().iter().any(|email| email.to == provider.email));
    assert!(!mailer
        .sent()
        .iter()
        .any(|email| email.to == config.default_provider_email));

    Ok(())
}
