//! Small helpers shared across services.

pub mod date;
pub mod password;
pub mod text;
