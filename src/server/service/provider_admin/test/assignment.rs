use super::*;

/// Tests assigning a referral to a matching provider.
///
/// Verifies the status, priority and notes on the referral and that the provider
/// receives a notification about it.
///
/// Expected: Ok with status assigned and one notification
#[tokio::test]
async fn assigns_and_notifies_provider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;
    let referral = factory::create_referral(db).await?;

    let assigned = ProviderAdminService::new(db)
        .assign_referral(
            referral.id,
            AssignReferralDto {
                provider_id: provider.id,
                priority: Some(ReferralPriority::High),
                notes: Some("Urgent rehab".to_string()),
            },
            admin.id,
        )
        .await?;

    assert_eq!(assigned.status, "assigned");
    assert_eq!(assigned.assigned_provider_id, Some(provider.id));
    assert_eq!(assigned.priority, "high");
    assert_eq!(assigned.notes.as_deref(), Some("Assigned by admin: Urgent rehab"));

    let notifications = entity::prelude::ProviderNotification::find().all(db).await?;
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].provider_id, provider.id);
    assert_eq!(notifications[0].related_referral_id, Some(referral.id));
    assert_eq!(notifications[0].sent_by_user_id, Some(admin.id));

    Ok(())
}

/// Tests that a provider with service type `all` takes any referral.
///
/// Expected: Ok with the referral assigned and priority medium
#[tokio::test]
async fn all_service_provider_accepts_any_referral() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let provider = UserFactory::new(db)
        .role("provider")
        .service_type("all")
        .build()
        .await?;
    let referral = ReferralFactory::new(db)
        .referred_for("psychologist")
        .build()
        .await?;

    let assigned = ProviderAdminService::new(db)
        .assign_referral(referral.id, assign_to(provider.id), admin.id)
        .await?;

    assert_eq!(assigned.assigned_provider_id, Some(provider.id));
    assert_eq!(assigned.priority, "medium");

    Ok(())
}

/// Tests the assignment rejections.
///
/// Verifies that a missing referral, an inactive provider, a non-provider user and a
/// service mismatch are all rejected as bad requests.
///
/// Expected: Err(AppError::BadRequest) in each case
#[tokio::test]
async fn rejects_invalid_assignments() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;
    let inactive = UserFactory::new(db)
        .role("provider")
        .service_type("physiotherapy")
        .active(false)
        .build()
        .await?;
    let referral = factory::create_referral(db).await?;
    let speech = ReferralFactory::new(db)
        .referred_for("speech_therapy")
        .build()
        .await?;

    let service = ProviderAdminService::new(db);

    let missing = service
        .assign_referral(9999, assign_to(provider.id), admin.id)
        .await;
    assert!(matches!(missing, Err(AppError::BadRequest(_))));

    let not_active = service
        .assign_referral(referral.id, assign_to(inactive.id), admin.id)
        .await;
    assert!(matches!(not_active, Err(AppError::BadRequest(_))));

    let not_provider = service
        .assign_referral(referral.id, assign_to(admin.id), admin.id)
        .await;
    assert!(matches!(not_provider, Err(AppError::BadRequest(_))));

    let mismatch = service
        .assign_referral(speech.id, assign_to(provider.id), admin.id)
        .await;
    assert!(matches!(mismatch, Err(AppError::BadRequest(_))));

    Ok(())
}

/// Tests reassigning a referral.
///
/// Expected: Ok with the new provider, priority medium and the reason in the notes
#[tokio::test]
async fn reassign_records_reason() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let (_, referral) = factory::helpers::create_assigned_referral(db).await?;
    let replacement = factory::create_provider(db).await?;

    let reassigned = ProviderAdminService::new(db)
        .reassign_referral(
            referral.id,
            ReassignReferralDto {
                new_provider_id: replacement.id,
                reason: "Original provider on leave".to_string(),
            },
            admin.id,
        )
        .await?;

    assert_eq!(reassigned.assigned_provider_id, Some(replacement.id));
    assert_eq!(reassigned.status, "assigned");
    assert_eq!(reassigned.priority, "medium");
    assert_eq!(
        reassigned.notes.as_deref(),
        Some("Reassigned: Original provider on leave")
    );

    Ok(())
}

/// Tests bulk assignment with a mix of valid and invalid referrals.
///
/// Expected: Ok with 2 of 3 assigned and the missing id reported
#[tokio::test]
async fn bulk_assign_reports_failures() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;
    let first = factory::create_referral(db).await?;
    let second = factory::create_referral(db).await?;

    let result = ProviderAdminService::new(db)
        .bulk_assign(
            BulkAssignDto {
                referral_ids: vec![first.id, 9999, second.id],
                provider_id: provider.id,
                priority: None,
                notes: None,
            },
            admin.id,
        )
        .await?;

    assert_eq!(result.total_requested, 3);
    assert_eq!(result.successfully_assigned, 2);
    assert_eq!(result.failed_assignments.len(), 1);
    assert_eq!(result.failed_assignments[0].referral_id, 9999);
    assert_eq!(result.success_rate, 66.67);

    Ok(())
}

/// Tests the unassigned referral queue.
///
/// Verifies that referrals without a provider and declined referrals are listed while
/// assigned ones are not.
///
/// Expected: Ok with the unassigned and declined referrals
#[tokio::test]
async fn unassigned_includes_declined() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let unassigned = factory::create_referral(db).await?;
    let declined = ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("declined")
        .build()
        .await?;
    factory::helpers::create_referral_for_provider(db, &provider).await?;

    let referrals = ProviderAdminService::new(db)
        .get_unassigned_referrals(None, None, 0, 50)
        .await?;

    let mut ids: Vec<i32> = referrals.iter().map(|r| r.id).collect();
    ids.sort();
    assert_eq!(ids, vec![unassigned.id, declined.id]);

    Ok(())
}
