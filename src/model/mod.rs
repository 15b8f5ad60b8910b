//! Request and response DTOs shared by the HTTP layer.
//!
//! Every type here derives `ToSchema` so it appears in the generated OpenAPI document.
//! Server-side domain models live in `server::model` and convert into these DTOs at the
//! controller boundary.

pub mod api;
pub mod appointment;
pub mod dynamic_data;
pub mod email;
pub mod notification;
pub mod provider;
pub mod provider_admin;
pub mod referral;
pub mod user;
