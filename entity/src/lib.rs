//! SeaORM entity definitions for the referral service database.
//!
//! Each module maps one table. The `prelude` re-exports every `Entity` under its
//! table-derived name so callers can write `entity::prelude::Referral::find()`.

pub mod prelude;

pub mod appointment;
pub mod data_point;
pub mod data_type;
pub mod email_log;
pub mod performance_review;
pub mod provider_availability;
pub mod provider_notification;
pub mod referral;
pub mod session_note;
pub mod user;
