//! Account registration and password login.

pub mod admin_code;

use sea_orm::DatabaseConnection;

use crate::{
    model::user::{RegisterUserDto, ServiceType, UserRole},
    server::{
        data::user::UserRepository,
        error::{auth::AuthError, AppError},
        model::user::{CreateUserParams, User},
        service::auth::admin_code::AdminCodeService,
        util::password::{hash_password, verify_password},
    },
};

const MIN_PASSWORD_LENGTH: usize = 8;

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Registers a new account.
    ///
    /// Providers must declare a service type. Admin accounts require the current
    /// bootstrap code, which is consumed only after every other check has passed.
    ///
    /// # Arguments
    /// - `dto` - Registration payload
    /// - `admin_codes` - Holder of the admin bootstrap code
    ///
    /// # Returns
    /// - `Ok(User)` - Created account
    /// - `Err(AppError::BadRequest)` - Invalid email, short password, missing or unknown service type
    /// - `Err(AuthError::EmailAlreadyRegistered)` - Email in use
    /// - `Err(AuthError::InvalidAdminCode)` - Admin registration without a valid code
    pub async fn register(
        &self,
        dto: RegisterUserDto,
        admin_codes: &AdminCodeService,
    ) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let email = dto.email.trim().to_string();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::BadRequest("Invalid email address".to_string()));
        }
        if dto.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(AppError::BadRequest(format!(
                "Password must be at least {} characters",
                MIN_PASSWORD_LENGTH
            )));
        }
        if dto.first_name.trim().is_empty() || dto.last_name.trim().is_empty() {
            return Err(AppError::BadRequest(
                "First and last name are required".to_string(),
            ));
        }

        let service_type = match dto
            .service_type
            .as_deref()
            .map(str::trim)
            .filter(|service_type| !service_type.is_empty())
        {
            Some(value) => Some(
                ServiceType::parse(value)
                    .ok_or_else(|| {
                        AppError::BadRequest(format!("Unknown service type: {}", value))
                    })?
                    .as_str()
                    .to_string(),
            ),
            None => None,
        };
        if dto.role == UserRole::Provider && service_type.is_none() {
            return Err(AppError::BadRequest(
                "Service type is required for providers".to_string(),
            ));
        }

        if user_repo.find_by_email(&email).await?.is_some() {
            return Err(AuthError::EmailAlreadyRegistered.into());
        }

        if dto.role == UserRole::Admin {
            let code = dto.admin_code.as_deref().unwrap_or_default();
            if !admin_codes.validate_and_consume(code).await {
                return Err(AuthError::InvalidAdminCode.into());
            }
        }

        let hashed_password = hash_password(&dto.password)?;

        let user = user_repo
            .create(CreateUserParams {
                email,
                hashed_password,
                first_name: dto.first_name,
                last_name: dto.last_name,
                phone_number: dto.phone_number,
                role: dto.role,
                service_type,
                provider_license: dto.provider_license,
                provider_agency: dto.provider_agency,
                provider_bio: dto.provider_bio,
            })
            .await?;

        tracing::info!("Registered {} account {}", user.role, user.id);

        Ok(user)
    }

    /// Creates a provider account on behalf of an admin.
    ///
    /// The requested role is ignored; the account is always a provider.
    pub async fn create_provider(&self, mut dto: RegisterUserDto) -> Result<User, AppError> {
        dto.role = UserRole::Provider;
        dto.admin_code = None;

        self.register(dto, &AdminCodeService::new()).await
    }

    /// Checks credentials and records the login time.
    ///
    /// # Returns
    /// - `Ok(User)` - Authenticated user with `last_login` updated
    /// - `Err(AuthError::InvalidCredentials)` - Unknown email or wrong password
    /// - `Err(AuthError::AccountInactive)` - Account has been deactivated
    pub async fn login(&self, email: &str, password: &str) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_email(email.trim()).await? else {
            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.hashed_password) {
            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            return Err(AuthError::AccountInactive.into());
        }

        user_repo.update_last_login(user.id).await?;

        user_repo
            .find_by_id(user.id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// Lists every provider account, active or not.
    pub async fn get_providers(&self) -> Result<Vec<User>, AppError> {
        Ok(UserRepository::new(self.db)
            .get_providers(false, None)
            .await?)
    }
}

#[cfg(test)]
mod test;
