//! HTTP request handlers.
//!
//! Controllers check access with [`AuthGuard`](crate::server::middleware::auth::AuthGuard),
//! call a service, and convert the returned domain models into DTOs. Each handler carries
//! a `utoipa::path` annotation so the router can build the OpenAPI document.

pub mod auth;
pub mod dynamic_data;
pub mod email;
pub mod health;
pub mod param;
pub mod provider;
pub mod provider_admin;
pub mod referral;
