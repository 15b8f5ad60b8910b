use super::*;

/// Tests the provider dashboard counters.
///
/// Verifies that accepted and in-progress referrals both count as accepted and as
/// active participants, and that other providers' referrals are ignored.
///
/// Expected: Ok with per-status counts
#[tokio::test]
async fn counts_own_referrals_by_status() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let other = factory::create_provider(db).await?;

    for status in ["new", "accepted", "in_progress", "completed", "declined"] {
        factory::referral::ReferralFactory::new(db)
            .assigned_provider_id(provider.id)
            .status(status)
            .build()
            .await?;
    }
    factory::referral::ReferralFactory::new(db)
        .assigned_provider_id(other.id)
        .status("new")
        .build()
        .await?;

    let dashboard = ProviderService::new(db).get_dashboard(provider.id).await?;

    assert_eq!(dashboard.total_referrals, 5);
    assert_eq!(dashboard.new_referrals, 1);
    assert_eq!(dashboard.accepted_referrals, 2);
    assert_eq!(dashboard.completed_referrals, 1);
    assert_eq!(dashboard.active_participants, 2);

    Ok(())
}

/// Tests the dashboard activity feed.
///
/// Verifies that only the five most recently updated referrals are listed, newest
/// first, with readable titles.
///
/// Expected: Ok with 5 activities ordered by updated_at descending
#[tokio::test]
async fn recent_activity_lists_latest_five() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    let mut latest = None;
    for hours in (1..=7).rev() {
        let referral = factory::referral::ReferralFactory::new(db)
            .name("Alex", "Morgan")
            .assigned_provider_id(provider.id)
            .status("in_progress")
            .updated_at(Utc::now() - Duration::hours(hours))
            .build()
            .await?;
        latest = Some(referral);
    }
    let latest = latest.unwrap();

    let dashboard = ProviderService::new(db).get_dashboard(provider.id).await?;

    assert_eq!(dashboard.recent_activity.len(), 5);
    let first = &dashboard.recent_activity[0];
    assert_eq!(first.referral_id, latest.id);
    assert_eq!(first.activity_type, "referral_update");
    assert_eq!(first.title, format!("Referral #{} - Alex Morgan", latest.id));
    assert_eq!(first.description, "Status: In_Progress");

    Ok(())
}

/// Tests performance rates.
///
/// Verifies that accepted covers accepted, in progress and completed referrals and
/// that completion is measured against accepted work.
///
/// Expected: Ok with acceptance 75% and completion 33.33%
#[tokio::test]
async fn computes_acceptance_and_completion_rates() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    for status in ["accepted", "in_progress", "completed", "declined"] {
        factory::referral::ReferralFactory::new(db)
            .assigned_provider_id(provider.id)
            .status(status)
            .build()
            .await?;
    }

    let performance = ProviderService::new(db).get_performance(provider.id).await?;

    assert_eq!(performance.total_referrals, 4);
    assert_eq!(performance.accepted_referrals, 3);
    assert_eq!(performance.completed_referrals, 1);
    assert_eq!(performance.declined_referrals, 1);
    assert_eq!(performance.acceptance_rate, 75.0);
    assert_eq!(performance.completion_rate, 33.33);

    Ok(())
}

/// Tests performance for a provider without referrals.
///
/// Expected: Ok with zero rates
#[tokio::test]
async fn performance_without_referrals_is_zero() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    let performance = ProviderService::new(db).get_performance(provider.id).await?;

    assert_eq!(performance.total_referrals, 0);
    assert_eq!(performance.acceptance_rate, 0.0);
    assert_eq!(performance.completion_rate, 0.0);

    Ok(())
}
