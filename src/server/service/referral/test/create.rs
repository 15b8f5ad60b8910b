use super::*;

/// Tests creating a referral from a valid submission.
///
/// Verifies that the referral starts as `new` with `medium` priority, that the
/// default contact method is applied, and that the raw submission and form metadata
/// are stored.
///
/// Expected: Ok with status new and web form metadata
#[tokio::test]
async fn creates_referral_from_submission() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let referral = ReferralService::new(db).create(submission()).await?;

    assert_eq!(referral.status, "new");
    assert_eq!(referral.priority, "medium");
    assert_eq!(referral.preferred_contact, "phone");
    assert!(referral.assigned_provider_id.is_none());
    assert_eq!(referral.raw_submission["firstName"], "Jamie");
    assert_eq!(referral.form_metadata["created_by"], "web_form");
    assert_eq!(referral.form_metadata["source"], "referral_form");
    assert_eq!(referral.form_metadata["version"], "1.0");

    Ok(())
}

/// Tests rejecting a submission without consent.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_missing_consent() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut dto = submission();
    dto.consent_checkbox = false;

    let result = ReferralService::new(db).create(dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a reason for referral shorter than ten characters.
///
/// Expected: Err(AppError::BadRequest)
#[tokio::test]
async fn rejects_short_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut dto = submission();
    dto.reason_for_referral = "Too short".to_string();

    let result = ReferralService::new(db).create(dto).await;

    assert!(matches!(result, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests rejecting a blank required field.
///
/// Verifies that whitespace-only values count as missing and that the error names
/// the form field.
///
/// Expected: Err(AppError::BadRequest("city is required"))
#[tokio::test]
async fn rejects_blank_required_field() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let mut dto = submission();
    dto.city = "   ".to_string();

    let result = ReferralService::new(db).create(dto).await;

    match result {
        Err(AppError::BadRequest(message)) => assert_eq!(message, "city is required"),
        other => panic!("expected bad request, got {:?}", other.map(|r| r.id)),
    }

    Ok(())
}

/// Tests listing referrals by status.
///
/// Expected: only the completed referral
#[tokio::test]
async fn lists_referrals_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_referral(db).await?;
    let completed = factory::referral::ReferralFactory::new(db)
        .status("completed")
        .build()
        .await?;

    let service = ReferralService::new(db);
    let all = service.list(None, 0, 100).await?;
    let filtered = service
        .list(Some(ReferralStatus::Completed), 0, 100)
        .await?;

    assert_eq!(all.len(), 2);
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].id, completed.id);

    Ok(())
}
