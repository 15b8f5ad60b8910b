//! Test support for the referral backend.
//!
//! Tests build a `TestContext` through `TestBuilder`, naming the tables they touch (or one
//! of the presets such as `with_referral_tables()`), then insert rows with the entity
//! factories in `factory`.
//!
//! ```rust,ignore
//! use test_utils::{builder::TestBuilder, factory};
//!
//! #[tokio::test]
//! async fn lists_new_referrals() -> Result<(), DbErr> {
//!     let test = TestBuilder::new().with_referral_tables().build().await.unwrap();
//!     let db = test.db.as_ref().unwrap();
//!
//!     factory::create_referral(db).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
