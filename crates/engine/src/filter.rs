use std::str::FromStr;

use chrono::{DateTime, Duration, Utc};

use crate::{EngineError, MoneyCents};

/// Relative time window measured back from "now".
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateBucket {
    All,
    Year,
    Month,
    Week,
}

impl DateBucket {
    /// Window length in days, `None` for [`DateBucket::All`].
    pub fn days(self) -> Option<i64> {
        match self {
            Self::All => None,
            Self::Year => Some(365),
            Self::Month => Some(30),
            Self::Week => Some(7),
        }
    }

    /// Earliest datetime (inclusive) still inside the window.
    pub fn cutoff(self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        self.days().map(|days| now - Duration::days(days))
    }
}

impl FromStr for DateBucket {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(Self::All),
            "year" => Ok(Self::Year),
            "month" => Ok(Self::Month),
            "week" => Ok(Self::Week),
            other => Err(EngineError::InvalidFilter(format!(
                "date must be one of all, year, month, week; got {other:?}"
            ))),
        }
    }
}

/// Filters for listing transactions.
///
/// Every field is optional and the set ones are combined with AND. Text
/// filters are case-insensitive substring matches. `before` and `after` are
/// exclusive bounds. Results are ordered newest first, then `skip` and
/// `limit` are applied.
#[derive(Clone, Debug, Default)]
pub struct TransactionListFilter {
    pub min_amount: Option<MoneyCents>,
    pub max_amount: Option<MoneyCents>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub date: Option<DateBucket>,
    pub before: Option<DateTime<Utc>>,
    pub after: Option<DateTime<Utc>>,
    pub skip: Option<u64>,
    pub limit: Option<u64>,
}
