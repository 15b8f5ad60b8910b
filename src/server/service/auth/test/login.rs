use super::*;

/// Tests a successful login.
///
/// Expected: Ok with last_login set
#[tokio::test]
async fn logs_in_with_correct_password() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let registered = service
        .register(
            registration("login@example.com", UserRole::Referrer),
            &AdminCodeService::new(),
        )
        .await?;
    assert!(registered.last_login.is_none());

    let user = service
        .login("login@example.com", "long enough password")
        .await?;

    assert_eq!(user.id, registered.id);
    assert!(user.last_login.is_some());

    Ok(())
}

/// Tests wrong passwords and unknown emails.
///
/// Expected: Err(AuthError::InvalidCredentials) for both
#[tokio::test]
async fn rejects_bad_credentials() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    service
        .register(
            registration("creds@example.com", UserRole::Referrer),
            &AdminCodeService::new(),
        )
        .await?;

    assert!(matches!(
        service.login("creds@example.com", "wrong password").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));
    assert!(matches!(
        service.login("nobody@example.com", "long enough password").await,
        Err(AppError::AuthErr(AuthError::InvalidCredentials))
    ));

    Ok(())
}

/// Tests logging in to a deactivated account.
///
/// Expected: Err(AuthError::AccountInactive)
#[tokio::test]
async fn rejects_inactive_account() -> Result<(), AppError> {
    let test = TestBuilder::new().with_table(User).build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    let service = AuthService::new(db);

    let user = service
        .register(
            registration("inactive@example.com", UserRole::Referrer),
            &AdminCodeService::new(),
        )
        .await?;
    crate::server::data::user::UserRepository::new(db)
        .set_active(user.id, false)
        .await?;

    assert!(matches!(
        service
            .login("inactive@example.com", "long enough password")
            .await,
        Err(AppError::AuthErr(AuthError::AccountInactive))
    ));

    Ok(())
}
