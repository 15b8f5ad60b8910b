use super::*;

/// Tests deactivating a provider with open referrals.
///
/// Verifies that a referral with a suitable replacement is reassigned and one without
/// is returned to the queue, and that completed work is left alone.
///
/// Expected: Ok with 2 active referrals found, 1 reassigned and 1 unassigned
#[tokio::test]
async fn reassigns_or_unassigns_open_referrals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let leaving = UserFactory::new(db)
        .role("provider")
        .service_type("all")
        .build()
        .await?;
    let physio = factory::create_provider(db).await?;

    let movable = ReferralFactory::new(db)
        .assigned_provider_id(leaving.id)
        .status("accepted")
        .build()
        .await?;
    let stranded = ReferralFactory::new(db)
        .assigned_provider_id(leaving.id)
        .referred_for("psychologist")
        .status("in_progress")
        .build()
        .await?;
    let finished = ReferralFactory::new(db)
        .assigned_provider_id(leaving.id)
        .status("completed")
        .build()
        .await?;

    let result = ProviderAdminService::new(db)
        .deactivate_provider(
            leaving.id,
            DeactivateProviderDto {
                reason: "Left the agency".to_string(),
                reassign_referrals: true,
            },
        )
        .await?;

    assert!(result.success);
    assert_eq!(result.message, "Provider deactivated successfully");
    assert_eq!(result.active_referrals_found, 2);
    assert_eq!(result.reassigned, 1);
    assert_eq!(result.unassigned, 1);

    let movable = entity::prelude::Referral::find_by_id(movable.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(movable.assigned_provider_id, Some(physio.id));
    assert_eq!(movable.status, "assigned");
    assert_eq!(
        movable.notes.as_deref(),
        Some("Reassigned due to provider deactivation: Left the agency")
    );

    let stranded = entity::prelude::Referral::find_by_id(stranded.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stranded.assigned_provider_id, None);
    assert_eq!(stranded.status, "new");
    assert_eq!(
        stranded.notes.as_deref(),
        Some("Unassigned due to provider deactivation: Left the agency")
    );

    let finished = entity::prelude::Referral::find_by_id(finished.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(finished.assigned_provider_id, Some(leaving.id));

    let leaving = entity::prelude::User::find_by_id(leaving.id)
        .one(db)
        .await?
        .unwrap();
    assert!(!leaving.is_active);

    Ok(())
}

/// Tests deactivating without reassignment.
///
/// Expected: Ok with the referral still assigned to the deactivated provider
#[tokio::test]
async fn keeps_referrals_when_not_reassigning() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let (provider, referral) = factory::helpers::create_assigned_referral(db).await?;
    factory::create_provider(db).await?;

    let result = ProviderAdminService::new(db)
        .deactivate_provider(
            provider.id,
            DeactivateProviderDto {
                reason: "Extended leave".to_string(),
                reassign_referrals: false,
            },
        )
        .await?;

    assert_eq!(result.active_referrals_found, 1);
    assert_eq!(result.reassigned, 0);
    assert_eq!(result.unassigned, 0);

    let referral = entity::prelude::Referral::find_by_id(referral.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(referral.assigned_provider_id, Some(provider.id));

    Ok(())
}

/// Tests deactivating and reactivating.
///
/// Expected: Ok, and a non-provider id is Err(AppError::NotFound)
#[tokio::test]
async fn activate_restores_provider() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let admin = factory::create_admin(db).await?;

    let service = ProviderAdminService::new(db);
    service
        .deactivate_provider(
            provider.id,
            DeactivateProviderDto {
                reason: "Paused".to_string(),
                reassign_referrals: true,
            },
        )
        .await?;

    let activated = service.activate_provider(provider.id).await?;
    assert!(activated.is_active);

    let result = service.activate_provider(admin.id).await;
    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}
