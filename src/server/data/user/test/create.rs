use super::*;

fn params(email: &str) -> CreateUserParams {
    CreateUserParams {
        email: email.to_string(),
        hashed_password: "hash".to_string(),
        first_name: "Jane".to_string(),
        last_name: "Doe".to_string(),
        phone_number: None,
        role: UserRole::Provider,
        service_type: Some("chiro".to_string()),
        provider_license: None,
        provider_agency: Some("Agency".to_string()),
        provider_bio: None,
    }
}

/// Tests creating a new user.
///
/// Verifies that the repository stores the given fields and that new accounts
/// start active and unverified.
///
/// Expected: Ok with user that can be found by email
#[tokio::test]
async fn creates_active_unverified_user() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    let user = repo.create(params("jane@example.com")).await?;

    assert_eq!(user.role, "provider");
    assert!(user.is_active);
    assert!(!user.is_verified);
    assert!(user.last_login.is_none());

    let found = repo.find_by_email("jane@example.com").await?;
    assert_eq!(found, Some(user));

    Ok(())
}

/// Tests creating a user with a duplicate email.
///
/// Verifies that the unique constraint on email rejects the second insert.
///
/// Expected: Err
#[tokio::test]
async fn fails_for_duplicate_email() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = UserRepository::new(db);
    repo.create(params("dup@example.com")).await?;

    let result = repo.create(params("dup@example.com")).await;

    assert!(result.is_err());

    Ok(())
}

/// Tests updating the last login timestamp.
///
/// Expected: Ok with last_login set
#[tokio::test]
async fn updates_last_login() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let repo = UserRepository::new(db);

    repo.update_last_login(user.id).await?;

    let found = repo.find_by_id(user.id).await?.unwrap();
    assert!(found.last_login.is_some());

    Ok(())
}
