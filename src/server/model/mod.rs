//! Domain models and operation parameters.
//!
//! Repositories convert entity models into these types at the data boundary, and
//! controllers convert them into DTOs on the way out.

pub mod appointment;
pub mod availability;
pub mod dynamic_data;
pub mod email_log;
pub mod notification;
pub mod performance_review;
pub mod referral;
pub mod user;
