use super::*;

/// Tests reading and marking notifications.
///
/// Verifies the unread filter and that only the owning provider can mark a
/// notification as read.
///
/// Expected: Ok with read notification excluded from unread list
#[tokio::test]
async fn marks_read_for_owner_only() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_provider_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let provider = factory::create_provider(db).await?;
    let other = factory::create_provider(db).await?;
    let first = factory::create_notification(db, provider.id, "high").await?;
    factory::create_notification(db, provider.id, "low").await?;

    let repo = NotificationRepository::new(db);

    assert!(repo.mark_read(first.id, other.id).await?.is_none());

    let read = repo.mark_read(first.id, provider.id).await?.unwrap();
    assert!(read.is_read);
    assert!(read.read_at.is_some());

    assert_eq!(repo.get_by_provider(provider.id, true).await?.len(), 1);
    assert_eq!(repo.get_by_provider(provider.id, false).await?.len(), 2);

    Ok(())
}
