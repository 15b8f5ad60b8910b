use crate::{
    model::user::{RegisterUserDto, UserRole},
    server::{
        error::{auth::AuthError, AppError},
        service::auth::{admin_code::AdminCodeService, AuthService},
    },
};
use entity::prelude::User;
use test_utils::builder::TestBuilder;

mod login;

fn registration(email: &str, role: UserRole) -> RegisterUserDto {
    RegisterUserDto {
        email: email.to_string(),
        password: "long enough password".to_string(),
        first_name: "Sam".to_string(),
        last_name: "Taylor".to_string(),
        phone_number: None,
        role,
        service_type: None,
        provider_license: None,
        provider_agency: None,
        provider_bio: None,
        admin_code: None,
    }
}
