use super::*;
use test_utils::factory::user::UserFactory;

/// Tests finding providers that can take a referral.
///
/// Verifies that providers with a matching or `all` service type are returned,
/// and that the excluded provider and inactive providers are left out.
///
/// Expected: Ok with matching and generalist providers
#[tokio::test]
async fn returns_matching_and_generalist_providers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let physio = factory::create_provider(db).await?;
    let other_physio = factory::create_provider(db).await?;
    let generalist = UserFactory::new(db)
        .role("provider")
        .service_type("all")
        .build()
        .await?;
    UserFactory::new(db)
        .role("provider")
        .service_type("chiro")
        .build()
        .await?;
    UserFactory::new(db)
        .role("provider")
        .service_type("physiotherapy")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);
    let suitable = repo
        .get_suitable_providers("Physiotherapy", Some(physio.id))
        .await?;

    let ids: Vec<i32> = suitable.iter().map(|p| p.id).collect();
    assert_eq!(ids.len(), 2);
    assert!(ids.contains(&other_physio.id));
    assert!(ids.contains(&generalist.id));

    Ok(())
}
