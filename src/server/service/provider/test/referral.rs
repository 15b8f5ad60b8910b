use super::*;

/// Tests listing a provider's referrals with filters.
///
/// Verifies that status and service type filters apply and that other providers'
/// referrals are excluded.
///
/// Expected: Ok with only the matching referral
#[tokio::test]
async fn lists_own_referrals_with_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let other = factory::create_provider(db).await?;

    let matching = factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;
    factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .referred_for("speech_therapy")
        .build()
        .await?;
    factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("completed")
        .build()
        .await?;
    factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(other.id)
        .status("assigned")
        .build()
        .await?;

    let referrals = ProviderService::new(db)
        .get_referrals(
            provider.id,
            Some(ReferralStatus::Assigned),
            Some("physiotherapy".to_string()),
            0,
            100,
        )
        .await?;

    assert_eq!(referrals.len(), 1);
    assert_eq!(referrals[0].id, matching.id);

    Ok(())
}

/// Tests fetching another provider's referral.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn get_referral_of_other_provider_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (_, referral) = factory::helpers::create_assigned_referral(db).await?;
    let intruder = factory::create_provider(db).await?;

    let result = ProviderService::new(db)
        .get_referral(intruder.id, referral.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests accepting an assigned referral.
///
/// Expected: Ok with status accepted and accepted_at set
#[tokio::test]
async fn accept_stamps_accepted_at() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;

    let accepted = ProviderService::new(db)
        .accept_referral(provider.id, referral.id)
        .await?;

    assert_eq!(accepted.status, "accepted");
    assert!(accepted.accepted_at.is_some());

    Ok(())
}

/// Tests declining an assigned referral.
///
/// Expected: Ok with status declined and the reason in the notes
#[tokio::test]
async fn decline_records_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;

    let declined = ProviderService::new(db)
        .decline_referral(provider.id, referral.id, "No capacity this month")
        .await?;

    assert_eq!(declined.status, "declined");
    assert_eq!(declined.notes.as_deref(), Some("Declined: No capacity this month"));

    Ok(())
}

/// Tests a status update with notes.
///
/// Verifies that notes are replaced and that moving to in progress does not stamp
/// accepted_at.
///
/// Expected: Ok with new status and notes
#[tokio::test]
async fn update_status_replaces_notes() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;

    let updated = ProviderService::new(db)
        .update_referral_status(
            provider.id,
            referral.id,
            UpdateReferralStatusDto {
                status: ReferralStatus::InProgress,
                notes: Some("First session booked".to_string()),
            },
        )
        .await?;

    assert_eq!(updated.status, "in_progress");
    assert_eq!(updated.notes.as_deref(), Some("First session booked"));
    assert!(updated.accepted_at.is_none());

    Ok(())
}

/// Tests changing the status of an unassigned referral.
///
/// Expected: Err(AppError::NotFound) and the referral is untouched
#[tokio::test]
async fn update_status_of_unassigned_referral_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let referral = factory::create_referral(db).await?;

    let result = ProviderService::new(db)
        .accept_referral(provider.id, referral.id)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the participant list.
///
/// Verifies that participants are drawn from accepted, in progress and completed
/// referrals and that a repeat referral is listed once.
///
/// Expected: Ok with two participants
#[tokio::test]
async fn participants_are_distinct() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    for status in ["accepted", "completed"] {
        factory::referral::ReferralFactory::new(db)
            .name("Riley", "Chen")
            .assigned_provider_id(provider.id)
            .status(status)
            .build()
            .await?;
    }
    factory::referral::ReferralFactory::new(db)
        .name("Jordan", "Lee")
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .build()
        .await?;
    factory::referral::ReferralFactory::new(db)
        .name("Casey", "Ford")
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;

    let participants = ProviderService::new(db).get_participants(provider.id).await?;

    assert_eq!(participants.len(), 2);
    assert!(participants.iter().any(|p| p.first_name == "Riley"));
    assert!(participants.iter().any(|p| p.first_name == "Jordan"));

    Ok(())
}
