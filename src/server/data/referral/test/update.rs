use super::*;

/// Tests partial referral updates.
///
/// Verifies that provided fields change, absent fields are kept, and updated_at moves.
///
/// Expected: Ok with updated status, notes and provider
#[tokio::test]
async fn applies_partial_update() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_provider(db).await?;
    let referral = ReferralFactory::new(db)
        .created_at(Utc::now() - Duration::days(1))
        .build()
        .await?;

    let repo = ReferralRepository::new(db);
    let updated = repo
        .update(
            referral.id,
            UpdateReferralParams {
                status: Some("assigned".to_string()),
                notes: Some("Assigned by admin: urgent".to_string()),
                assigned_provider_id: Some(Some(provider.id)),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.status, "assigned");
    assert_eq!(updated.notes.as_deref(), Some("Assigned by admin: urgent"));
    assert_eq!(updated.assigned_provider_id, Some(provider.id));
    assert_eq!(updated.first_name, referral.first_name);
    assert!(updated.updated_at > referral.updated_at);

    Ok(())
}

/// Tests updating a referral that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_referral() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ReferralRepository::new(db);

    assert!(repo
        .update(42, UpdateReferralParams::default())
        .await?
        .is_none());

    Ok(())
}
