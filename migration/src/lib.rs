pub use sea_orm_migration::prelude::*;

mod m20260105_000001_create_user_table;
mod m20260105_000002_create_referral_table;
mod m20260105_000003_create_data_type_table;
mod m20260105_000004_create_data_point_table;
mod m20260105_000005_create_email_log_table;
mod m20260112_000006_create_provider_availability_table;
mod m20260112_000007_create_appointment_table;
mod m20260112_000008_create_session_note_table;
mod m20260119_000009_create_provider_notification_table;
mod m20260119_000010_create_performance_review_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260105_000001_create_user_table::Migration),
            Box::new(m20260105_000002_create_referral_table::Migration),
            Box::new(m20260105_000003_create_data_type_table::Migration),
            Box::new(m20260105_000004_create_data_point_table::Migration),
            Box::new(m20260105_000005_create_email_log_table::Migration),
            Box::new(m20260112_000006_create_provider_availability_table::Migration),
            Box::new(m20260112_000007_create_appointment_table::Migration),
            Box::new(m20260112_000008_create_session_note_table::Migration),
            Box::new(m20260119_000009_create_provider_notification_table::Migration),
            Box::new(m20260119_000010_create_performance_review_table::Migration),
        ]
    }
}
