use super::*;

/// Tests the overdue referral list.
///
/// Verifies that stale new referrals and long-running in-progress referrals are
/// listed with their provider, and recent ones are not.
///
/// Expected: Ok with the two late referrals
#[tokio::test]
async fn lists_overdue_referrals() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    let stale = ReferralFactory::new(db)
        .created_at(Utc::now() - Duration::days(10))
        .build()
        .await?;
    let long_running = ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .created_at(Utc::now() - Duration::days(50))
        .accepted_at(Utc::now() - Duration::days(40))
        .build()
        .await?;
    factory::create_referral(db).await?;

    let overdue = ProviderAdminService::new(db)
        .get_overdue_referrals(7, None)
        .await?;

    assert_eq!(overdue.len(), 2);
    let first = &overdue[0];
    assert_eq!(first.referral_id, long_running.id);
    assert_eq!(first.days_overdue, 40);
    assert_eq!(first.provider.id, Some(provider.id));

    let second = &overdue[1];
    assert_eq!(second.referral_id, stale.id);
    assert_eq!(second.provider.name, "Unassigned");

    Ok(())
}

/// Tests the overdue referral list with out-of-range day counts.
///
/// Verifies that negative values and values too large for a date are refused
/// instead of panicking.
///
/// Expected: Err(AppError::BadRequest) for each value
#[tokio::test]
async fn overdue_rejects_out_of_range_days() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ProviderAdminService::new(db);

    for days in [-1, 100_000_000, i64::MAX] {
        let result = service.get_overdue_referrals(days, None).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "days = {}", days);
    }

    Ok(())
}

/// Tests workload analytics.
///
/// Verifies per-provider active counts, the unassigned count and the balance score.
///
/// Expected: Ok with 2 active referrals across 2 providers and a score of 90
#[tokio::test]
async fn computes_workload_balance() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let busy = factory::create_provider(db).await?;
    factory::create_provider(db).await?;

    for status in ["accepted", "in_progress", "completed"] {
        ReferralFactory::new(db)
            .assigned_provider_id(busy.id)
            .status(status)
            .build()
            .await?;
    }
    factory::create_referral(db).await?;

    let workload = ProviderAdminService::new(db).get_workload_analytics().await?;

    assert_eq!(workload.total_active_providers, 2);
    assert_eq!(workload.total_active_referrals, 2);
    assert_eq!(workload.unassigned_referrals, 1);
    assert_eq!(workload.average_workload, 1.0);
    assert_eq!(workload.workload_balance_score, 90.0);

    let busy_row = workload
        .workload_by_provider
        .iter()
        .find(|w| w.provider_id == busy.id)
        .unwrap();
    assert_eq!(busy_row.active_referrals, 2);
    assert_eq!(busy_row.total_referrals, 3);
    assert_eq!(busy_row.capacity_utilization, 20.0);

    Ok(())
}

/// Tests provider capacity.
///
/// Expected: Ok with 3 active of 15, 1 pending and high recommended priority
#[tokio::test]
async fn reports_capacity() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;

    for status in ["accepted", "in_progress", "in_progress", "assigned", "completed"] {
        ReferralFactory::new(db)
            .assigned_provider_id(provider.id)
            .status(status)
            .build()
            .await?;
    }

    let capacity = ProviderAdminService::new(db)
        .get_provider_capacity(provider.id)
        .await?;

    assert_eq!(capacity.max_capacity, 15);
    assert_eq!(capacity.active_referrals, 3);
    assert_eq!(capacity.pending_referrals, 1);
    assert_eq!(capacity.available_slots, 12);
    assert_eq!(capacity.utilization_rate, 20.0);
    assert_eq!(capacity.completed_last_30_days, 1);
    assert!(capacity.is_accepting_referrals);
    assert_eq!(capacity.recommended_priority, "high");

    Ok(())
}

/// Tests assignment suggestions.
///
/// Verifies that only suitable active providers are suggested and that an exact
/// service match ranks above a generalist with the same load.
///
/// Expected: Ok with the specialist first
#[tokio::test]
async fn suggests_specialist_first() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let generalist = UserFactory::new(db)
        .role("provider")
        .service_type("all")
        .build()
        .await?;
    let specialist = factory::create_provider(db).await?;
    UserFactory::new(db)
        .role("provider")
        .service_type("psychologist")
        .build()
        .await?;
    let referral = factory::create_referral(db).await?;

    let suggestions = ProviderAdminService::new(db)
        .get_assignment_suggestions(referral.id)
        .await?;

    assert_eq!(suggestions.len(), 2);
    assert_eq!(suggestions[0].provider_id, specialist.id);
    assert_eq!(suggestions[0].score, 95.0);
    assert_eq!(
        suggestions[0].reason,
        "Low current workload; Exact service type match"
    );
    assert_eq!(suggestions[1].provider_id, generalist.id);
    assert_eq!(suggestions[1].score, 80.0);

    Ok(())
}

/// Tests suggestions for a missing referral.
///
/// Expected: Err(AppError::NotFound)
#[tokio::test]
async fn suggestions_for_missing_referral_not_found() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ProviderAdminService::new(db)
        .get_assignment_suggestions(9999)
        .await;

    assert!(matches!(result, Err(AppError::NotFound(_))));

    Ok(())
}

/// Tests the performance summary with out-of-range periods.
///
/// Expected: Err(AppError::BadRequest) for a negative and an overflowing period
#[tokio::test]
async fn performance_summary_rejects_out_of_range_period() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let service = ProviderAdminService::new(db);

    for days in [-30, i64::MAX] {
        let result = service.get_performance_summary(days).await;
        assert!(matches!(result, Err(AppError::BadRequest(_))), "days = {}", days);
    }

    Ok(())
}

/// Tests the performance summary ranking.
///
/// Expected: Ok with the provider that completed work ranked first
#[tokio::test]
async fn ranks_providers_by_completion() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let idle = factory::create_provider(db).await?;
    let productive = factory::create_provider(db).await?;

    ReferralFactory::new(db)
        .assigned_provider_id(idle.id)
        .status("in_progress")
        .build()
        .await?;
    for status in ["completed", "in_progress"] {
        ReferralFactory::new(db)
            .assigned_provider_id(productive.id)
            .status(status)
            .build()
            .await?;
    }

    let summary = ProviderAdminService::new(db)
        .get_performance_summary(30)
        .await?;

    assert_eq!(summary.summary.total_providers, 2);
    assert_eq!(summary.summary.total_referrals, 3);
    assert_eq!(summary.summary.completed_referrals, 1);
    assert_eq!(summary.summary.overall_completion_rate, 33.33);
    assert_eq!(summary.all_providers[0].provider_id, productive.id);
    assert_eq!(summary.all_providers[0].completion_rate, 50.0);
    assert_eq!(summary.top_performers.len(), 2);

    Ok(())
}

/// Tests detailed performance response times.
///
/// Expected: Ok with a 24 hour response time for a referral accepted a day after creation
#[tokio::test]
async fn measures_response_time() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();
    let provider = factory::create_provider(db).await?;
    let created_at = Utc::now() - Duration::days(5);

    ReferralFactory::new(db)
        .assigned_provider_id(provider.id)
        .status("in_progress")
        .created_at(created_at)
        .accepted_at(created_at + Duration::hours(24))
        .build()
        .await?;

    let performance = ProviderAdminService::new(db)
        .get_provider_performance(provider.id, None, None)
        .await?;

    assert_eq!(performance.period_days, 90);
    assert_eq!(performance.referrals_in_period, 1);
    assert_eq!(performance.average_response_time_hours, 24.0);
    assert_eq!(performance.median_response_time_hours, 24.0);
    assert_eq!(performance.acceptance_rate, 100.0);

    Ok(())
}
