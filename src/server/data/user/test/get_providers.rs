use super::*;
use test_utils::factory::user::UserFactory;

/// Tests listing providers.
///
/// Verifies that only provider accounts are returned and that the active and
/// service type filters apply.
///
/// Expected: Ok with filtered providers
#[tokio::test]
async fn filters_by_active_and_service_type() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_admin(db).await?;
    let physio = factory::create_provider(db).await?;
    let chiro = UserFactory::new(db)
        .role("provider")
        .service_type("chiro")
        .build()
        .await?;
    let inactive = UserFactory::new(db)
        .role("provider")
        .service_type("chiro")
        .active(false)
        .build()
        .await?;

    let repo = UserRepository::new(db);

    let all = repo.get_providers(false, None).await?;
    assert_eq!(all.len(), 3);

    let active = repo.get_providers(true, None).await?;
    assert_eq!(active.len(), 2);
    assert!(active.iter().all(|p| p.id != inactive.id));

    let chiro_only = repo.get_providers(true, Some("chiro")).await?;
    assert_eq!(chiro_only.len(), 1);
    assert_eq!(chiro_only[0].id, chiro.id);

    assert_eq!(repo.count_providers(None).await?, 3);
    assert_eq!(repo.count_providers(Some(false)).await?, 1);
    assert!(all.iter().any(|p| p.id == physio.id));

    Ok(())
}
