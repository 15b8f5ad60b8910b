use super::*;

/// Tests finding overdue referrals.
///
/// Verifies that stale `new` referrals and long-running `in_progress` referrals are
/// returned, while recent ones are not.
///
/// Expected: Ok with the two overdue referrals
#[tokio::test]
async fn returns_stale_new_and_long_running() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_referral_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc::now();
    let provider = factory::create_provider(db).await?;

    let stale = ReferralFactory::new(db)
        .created_at(now - Duration::days(10))
        .build()
        .await?;
    ReferralFactory::new(db)
        .created_at(now - Duration::days(2))
        .build()
        .await?;
    let long_running = ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .accepted_at(now - Duration::days(45))
        .build()
        .await?;
    ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .accepted_at(now - Duration::days(5))
        .build()
        .await?;

    let repo = ReferralRepository::new(db);
    let overdue = repo
        .get_overdue(now - Duration::days(7), now - Duration::days(30), None)
        .await?;

    let ids: Vec<i32> = overdue.iter().map(|r| r.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&stale.id));
    assert!(ids.contains(&long_running.id));

    let for_provider = repo
        .get_overdue(
            now - Duration::days(7),
            now - Duration::days(30),
            Some(provider.id),
        )
        .await?;
    assert_eq!(for_provider.len(), 1);

    assert_eq!(
        repo.count_long_running(provider.id, now - Duration::days(30))
            .await?,
        1
    );

    Ok(())
}
