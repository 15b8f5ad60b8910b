use super::*;
use entity::prelude::User;

/// Tests that a request without a session user is rejected.
///
/// Expected: Err(AuthError::UserNotInSession)
#[tokio::test]
async fn rejects_missing_session_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInSession))
    ));

    Ok(())
}

/// Tests that a session pointing at a deleted user is rejected.
///
/// Expected: Err(AuthError::UserNotInDatabase)
#[tokio::test]
async fn rejects_unknown_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    AuthSession::new(session).set_user_id(4242).await?;

    let result = AuthGuard::new(db, session).require(&[]).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::UserNotInDatabase(4242)))
    ));

    Ok(())
}

/// Tests that deactivated users are rejected even without permissions.
///
/// Expected: Err(AuthError::InactiveUser)
#[tokio::test]
async fn rejects_inactive_user() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let user = factory::user::UserFactory::new(db)
        .role("admin")
        .active(false)
        .build()
        .await?;
    AuthSession::new(session).set_user_id(user.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Admin])
        .await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::InactiveUser(id))) if id == user.id
    ));

    Ok(())
}

/// Tests the admin permission.
///
/// Verifies that an admin passes and a provider is denied.
///
/// Expected: Ok for admin, Err(AuthError::AccessDenied) for provider
#[tokio::test]
async fn admin_permission_requires_admin_role() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    auth_session.set_user_id(admin.id).await?;
    let user = guard.require(&[Permission::Admin]).await?;
    assert_eq!(user.id, admin.id);

    auth_session.set_user_id(provider.id).await?;
    let result = guard.require(&[Permission::Admin]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(id, _))) if id == provider.id
    ));

    Ok(())
}

/// Tests the staff permission.
///
/// Verifies that admins and providers pass while participants are denied.
///
/// Expected: Ok for admin and provider, Err(AuthError::AccessDenied) for participant
#[tokio::test]
async fn staff_permission_accepts_admin_and_provider() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    let provider = factory::create_provider(db).await?;
    let participant = factory::create_user(db).await?;
    let auth_session = AuthSession::new(session);
    let guard = AuthGuard::new(db, session);

    for staff in [&admin, &provider] {
        auth_session.set_user_id(staff.id).await?;
        assert!(guard.require(&[Permission::Staff]).await.is_ok());
    }

    auth_session.set_user_id(participant.id).await?;
    let result = guard.require(&[Permission::Staff]).await;
    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));

    Ok(())
}

/// Tests the provider permission.
///
/// Expected: Err(AuthError::AccessDenied) for an admin
#[tokio::test]
async fn provider_permission_rejects_admin() -> Result<(), AppError> {
    let mut test = TestBuilder::new().with_table(User).build().await.unwrap();
    let (db, session) = test.db_and_session().await.unwrap();

    let admin = factory::create_admin(db).await?;
    AuthSession::new(session).set_user_id(admin.id).await?;

    let result = AuthGuard::new(db, session)
        .require(&[Permission::Provider])
        .await;

    assert!(result.is_err());

    Ok(())
}
