use super::*;

fn slot(day_of_week: i32, start_time: &str) -> AvailabilitySlotParams {
    AvailabilitySlotParams {
        day_of_week,
        start_time: start_time.to_string(),
        end_time: "17:00".to_string(),
        is_available: true,
        max_appointments: 8,
        location: None,
    }
}

/// Tests replacing a provider's availability.
///
/// Verifies that existing slots are removed, new slots are stored in day order,
/// and other providers are untouched.
///
/// Expected: Ok with only the new slots
#[tokio::test]
async fn replaces_existing_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_provider(db).await?;
    let other = factory::create_provider(db).await?;
    factory::create_availability(db, provider.id, 0).await?;
    factory::create_availability(db, other.id, 0).await?;

    let repo = AvailabilityRepository::new(db);
    let slots = repo
        .replace_for_provider(provider.id, vec![slot(4, "10:00"), slot(2, "08:30")])
        .await?;

    let days: Vec<i32> = slots.iter().map(|s| s.day_of_week).collect();
    assert_eq!(days, vec![2, 4]);
    assert_eq!(repo.get_by_provider(other.id).await?.len(), 1);

    Ok(())
}

/// Tests clearing availability with an empty slot list.
///
/// Expected: Ok with no slots
#[tokio::test]
async fn empty_list_clears_slots() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_provider(db).await?;
    factory::create_availability(db, provider.id, 1).await?;

    let repo = AvailabilityRepository::new(db);

    assert!(repo
        .replace_for_provider(provider.id, Vec::new())
        .await?
        .is_empty());

    Ok(())
}
