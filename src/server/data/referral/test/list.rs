use super::*;

/// Tests listing referrals with a status filter.
///
/// Verifies newest-first ordering, status filtering and skip/limit handling.
///
/// Expected: Ok with filtered, ordered referrals
#[tokio::test]
async fn filters_and_orders_newest_first() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let older = ReferralFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let newer = ReferralFactory::new(db)
        .created_at(now - Duration::days(1))
        .build()
        .await?;
    ReferralFactory::new(db).status("completed").build().await?;

    let repo = ReferralRepository::new(db);
    let filter = ReferralFilter {
        status: Some("new".to_string()),
        ..Default::default()
    };

    let referrals = repo.list(&filter, 0, 100).await?;
    let ids: Vec<i32> = referrals.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![newer.id, older.id]);

    let second_page = repo.list(&filter, 1, 100).await?;
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page[0].id, older.id);

    assert_eq!(repo.count(&filter).await?, 2);
    assert_eq!(repo.count(&ReferralFilter::default()).await?, 3);

    Ok(())
}

/// Tests that a provider only sees their own referral.
///
/// Expected: Ok(None) for another provider
#[tokio::test]
async fn find_for_provider_checks_assignment() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, referral) = factory::helpers::create_assigned_referral(db).await?;
    let other = factory::create_provider(db).await?;

    let repo = ReferralRepository::new(db);

    assert!(repo
        .find_for_provider(referral.id, provider.id)
        .await?
        .is_some());
    assert!(repo.find_for_provider(referral.id, other.id).await?.is_none());

    Ok(())
}
