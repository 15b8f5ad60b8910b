use chrono::{DateTime, Duration, NaiveDate, TimeDelta, Utc};

use crate::server::error::AppError;

/// Inclusive calendar date range expressed as UTC instants.
///
/// `start` is midnight of the first day and `end` is midnight of the day after the
/// last day, so filters use `>= start` and `< end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateWindow {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl DateWindow {
    /// Builds a window from optional dates, defaulting to the last `default_days` ending today.
    pub fn resolve(
        start_date: Option<NaiveDate>,
        end_date: Option<NaiveDate>,
        default_days: i64,
    ) -> Self {
        let today = Utc::now().date_naive();
        let end_date = end_date.unwrap_or(today);
        let start_date = start_date.unwrap_or(end_date - Duration::days(default_days));

        Self {
            start_date,
            end_date,
            start: start_of_day(start_date),
            end: start_of_day(end_date) + Duration::days(1),
        }
    }

    /// Number of days between the start and end dates.
    pub fn period_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }
}

/// Midnight UTC on the given date.
pub fn start_of_day(date: NaiveDate) -> DateTime<Utc> {
    date.and_time(chrono::NaiveTime::MIN).and_utc()
}

/// Instant `days` whole days before `now`.
///
/// `name` is the query parameter the value came from and appears in the error.
///
/// # Returns
/// - `Ok(DateTime<Utc>)` - The shifted instant
/// - `Err(AppError::BadRequest)` - `days` is negative or too large to represent
pub fn days_before(now: DateTime<Utc>, days: i64, name: &str) -> Result<DateTime<Utc>, AppError> {
    if days < 0 {
        return Err(AppError::BadRequest(format!("{} must not be negative", name)));
    }

    TimeDelta::try_days(days)
        .and_then(|delta| now.checked_sub_signed(delta))
        .ok_or_else(|| AppError::BadRequest(format!("{} is out of range", name)))
}
