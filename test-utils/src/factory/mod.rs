//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Factories that depend on other rows accept the parent
//! identifiers explicitly, and the `helpers` module wires common hierarchies together.
//!
//! # Overview
//!
//! Each entity has its own factory module with both a `Factory` struct for customization
//! and a `create_*` convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let admin = factory::user::create_admin(&db).await?;
//!     let referral = factory::referral::create_referral(&db).await?;
//!
//!     // Create with all dependencies
//!     let (provider, referral) = factory::helpers::create_assigned_referral(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let provider = factory::user::UserFactory::new(&db)
//!     .role("provider")
//!     .service_type("physiotherapy")
//!     .build()
//!     .await?;
//!
//! let referral = factory::referral::ReferralFactory::new(&db)
//!     .status("in_progress")
//!     .assigned_provider_id(provider.id)
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `user` - Create user entities for any role
//! - `referral` - Create referral entities
//! - `data_type` - Create data type and data point entities
//! - `email_log` - Create email log entities
//! - `appointment` - Create appointment entities
//! - `availability` - Create provider availability entities
//! - `notification` - Create provider notification entities
//! - `helpers` - Convenience methods for creating entities with dependencies

pub mod appointment;
pub mod availability;
pub mod data_type;
pub mod email_log;
pub mod helpers;
pub mod notification;
pub mod referral;
pub mod user;

// Re-export commonly used factory functions for concise usage
pub use appointment::create_appointment;
pub use availability::create_availability;
pub use data_type::{create_data_point, create_data_type};
pub use email_log::create_email_log;
pub use notification::create_notification;
pub use referral::create_referral;
pub use user::{create_admin, create_provider, create_user};
