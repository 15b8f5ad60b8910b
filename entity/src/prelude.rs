pub use super::appointment::Entity as Appointment;
pub use super::data_point::Entity as DataPoint;
pub use super::data_type::Entity as DataType;
pub use super::email_log::Entity as EmailLog;
pub use super::performance_review::Entity as PerformanceReview;
pub use super::provider_availability::Entity as ProviderAvailability;
pub use super::provider_notification::Entity as ProviderNotification;
pub use super::referral::Entity as Referral;
pub use super::session_note::Entity as SessionNote;
pub use super::user::Entity as User;
