use super::*;

/// Tests listing referrals that need assignment.
///
/// Verifies that referrals without a provider and declined referrals are both
/// returned while assigned work is not.
///
/// Expected: Ok with unassigned and declined referrals
#[tokio::test]
async fn includes_unassigned_and_declined() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
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
    ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("assigned")
        .build()
        .await?;

    let repo = ReferralRepository::new(db);
    let referrals = repo.get_unassigned(None, None, 0, 50).await?;

    let ids: Vec<i32> = referrals.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&unassigned.id));
    assert!(ids.contains(&declined.id));

    assert_eq!(
        repo.count_without_provider(Some(ReferralStatus::New)).await?,
        1
    );

    Ok(())
}

/// Tests filtering unassigned referrals by service type and priority.
///
/// Expected: Ok with only the matching referral
#[tokio::test]
async fn filters_by_service_type_and_priority() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let wanted = ReferralFactory::new(db)
        .referred_for("chiro")
        .priority("urgent")
        .build()
        .await?;
    ReferralFactory::new(db).referred_for("chiro").build().await?;
    ReferralFactory::new(db).priority("urgent").build().await?;

    let repo = ReferralRepository::new(db);
    let referrals = repo
        .get_unassigned(Some("chiro"), Some("urgent"), 0, 50)
        .await?;

    assert_eq!(referrals.len(), 1);
    assert_eq!(referrals[0].id, wanted.id);

    Ok(())
}
