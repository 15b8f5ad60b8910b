use super::*;

/// Tests creating an appointment and reading it back in a schedule window.
///
/// Verifies that appointments outside the window and for other providers are excluded.
///
/// Expected: Ok with the one appointment in range
#[tokio::test]
async fn schedule_window_filters_by_date_and_provider() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, referral) = factory::helpers::create_assigned_referral(db).await?;
    let now = Utc::now();

    let repo = AppointmentRepository::new(db);
    let created = repo
        .create(CreateAppointmentParams {
            referral_id: referral.id,
            provider_id: provider.id,
            appointment_date: now + Duration::days(2),
            duration_minutes: 45,
            service_type: referral.referred_for.clone(),
            location: Some("Clinic".to_string()),
            appointment_notes: None,
        })
        .await?;
    assert_eq!(created.status, "scheduled");

    AppointmentFactory::new(db, referral.id, provider.id)
        .appointment_date(now + Duration::days(20))
        .build()
        .await?;

    let window = repo
        .get_by_provider_between(provider.id, now, now + Duration::days(7))
        .await?;
    assert_eq!(window, vec![created]);

    let other = factory::create_provider(db).await?;
    assert!(repo
        .get_by_provider_between(other.id, now, now + Duration::days(30))
        .await?
        .is_empty());

    Ok(())
}

/// Tests completing and cancelling appointments.
///
/// Verifies that completion stamps completed_at and cancellation keeps its reason.
///
/// Expected: Ok with updated statuses
#[tokio::test]
async fn updates_status_with_side_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (provider, referral, appointment) =
        factory::helpers::create_appointment_with_dependencies(db).await?;
    let cancelled = factory::create_appointment(db, referral.id, provider.id).await?;

    let repo = AppointmentRepository::new(db);

    let completed = repo
        .update_status(appointment.id, "completed", None)
        .await?
        .unwrap();
    assert!(completed.completed_at.is_some());

    let cancelled = repo
        .update_status(cancelled.id, "cancelled", Some("Participant unwell".to_string()))
        .await?
        .unwrap();
    assert_eq!(cancelled.status, "cancelled");
    assert_eq!(
        cancelled.cancellation_reason.as_deref(),
        Some("Participant unwell")
    );
    assert!(cancelled.completed_at.is_none());

    assert!(repo
        .find_for_provider(appointment.id, provider.id)
        .await?
        .is_some());

    Ok(())
}
