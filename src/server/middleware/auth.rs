use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::user::UserRole,
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::user::User,
    },
};

/// Permission required to call an endpoint.
pub enum Permission {
    Admin,
    Provider,
    /// Admin or provider.
    Staff,
}

/// Loads the session user and checks permissions.
///
/// # Example
///
/// ```rust,ignore
/// let admin = AuthGuard::new(&state.db, &session)
///     .require(&[Permission::Admin])
///     .await?;
/// ```
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Returns the logged-in user if every permission is satisfied.
    ///
    /// An empty permission list only requires an active, logged-in user.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user
    /// - `Err(AuthError::UserNotInSession)` - Not logged in
    /// - `Err(AuthError::UserNotInDatabase)` - Session refers to a deleted user
    /// - `Err(AuthError::InactiveUser)` - User has been deactivated
    /// - `Err(AuthError::AccessDenied)` - A permission check failed
    pub async fn require(&self, permissions: &[Permission]) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user_id) = AuthSession::new(self.session).get_user_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_id(user_id).await? else {
            return Err(AuthError::UserNotInDatabase(user_id).into());
        };

        if !user.is_active {
            return Err(AuthError::InactiveUser(user_id).into());
        }

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !user.has_role(UserRole::Admin) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted an admin action without the admin role".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Provider => {
                    if !user.has_role(UserRole::Provider) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a provider action without the provider role"
                                .to_string(),
                        )
                        .into());
                    }
                }
                Permission::Staff => {
                    if !user.has_role(UserRole::Admin) && !user.has_role(UserRole::Provider) {
                        return Err(AuthError::AccessDenied(
                            user_id,
                            "User attempted a staff action without an admin or provider role"
                                .to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(user)
    }
}
