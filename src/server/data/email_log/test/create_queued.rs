use super::*;

/// Tests the queued to sent transition.
///
/// Verifies that a new entry is queued and that marking it sent updates the status.
///
/// Expected: Ok with status `sent` and no error
#[tokio::test]
async fn queues_then_marks_sent() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referral = factory::create_referral(db).await?;
    let repo = EmailLogRepository::new(db);

    let log = repo
        .create_queued(CreateEmailLogParams {
            referral_id: Some(referral.id),
            user_id: None,
            email_type: EmailType::ReferrerNotification,
            to_address: referral.referrer_email.clone(),
            subject: format!("Referral #{} Submitted Successfully", referral.id),
            body: None,
        })
        .await?;
    assert_eq!(log.status, "queued");
    assert_eq!(log.email_type, "referrer_notification");

    repo.mark_sent(log.id).await?;

    let logs = repo.get_by_referral(referral.id).await?;
    assert_eq!(logs.len(), 1);
    assert_eq!(logs[0].status, "sent");
    assert!(logs[0].error.is_none());

    Ok(())
}

/// Tests marking an entry as failed.
///
/// Expected: Ok with status `failed` and the error stored
#[tokio::test]
async fn marks_failed_with_error() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referral = factory::create_referral(db).await?;
    let log = factory::create_email_log(db, referral.id, "provider_notification", "queued").await?;

    let repo = EmailLogRepository::new(db);
    repo.mark_failed(log.id, "Email service not configured")
        .await?;

    let failed = repo.get_failed(50).await?;
    assert_eq!(failed.len(), 1);
    assert_eq!(
        failed[0].error.as_deref(),
        Some("Email service not configured")
    );

    Ok(())
}
