use chrono::NaiveDate;
use serde::Deserialize;

const DEFAULT_LIMIT: u64 = 100;

fn default_limit() -> u64 {
    DEFAULT_LIMIT
}

fn default_true() -> bool {
    true
}

/// `skip`/`limit` query parameters shared by list endpoints.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct PaginationParam {
    #[serde(default)]
    pub skip: u64,
    #[serde(default = "default_limit")]
    pub limit: u64,
}

impl Default for PaginationParam {
    fn default() -> Self {
        Self {
            skip: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// `active_only` query flag, on unless explicitly turned off.
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ActiveOnlyParam {
    #[serde(default = "default_true")]
    pub active_only: bool,
}

/// Optional inclusive calendar date range.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct DateRangeParam {
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
}
