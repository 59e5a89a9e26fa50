use std::{fmt, str::FromStr};

use crate::EngineError;

/// Signed amount represented as **integer cents**.
///
/// Every amount stored in the ledger goes through this type so sums never
/// drift. The sign encodes direction relative to the account:
/// - positive = inflow
/// - negative = outflow
///
/// # Examples
///
/// ```rust
/// use engine::MoneyCents;
///
/// let amount = MoneyCents::new(-12_34);
/// assert_eq!(amount.cents(), -1234);
/// assert_eq!(amount.to_string(), "-12.34");
/// ```
///
/// Parsing (accepts `.` or `,` as decimal separator; rejects more than two
/// decimals):
///
/// ```rust
/// use engine::MoneyCents;
///
/// assert_eq!("10".parse::<MoneyCents>().unwrap().cents(), 1000);
/// assert_eq!("10,5".parse::<MoneyCents>().unwrap().cents(), 1050);
/// assert!("12.345".parse::<MoneyCents>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct MoneyCents(i64);

impl MoneyCents {
    pub const ZERO: MoneyCents = MoneyCents(0);

    /// Creates a new amount from integer cents.
    #[must_use]
    pub const fn new(cents: i64) -> Self {
        Self(cents)
    }

    /// Returns the raw value in cents.
    #[must_use]
    pub const fn cents(self) -> i64 {
        self.0
    }

    #[must_use]
    pub const fn is_positive(self) -> bool {
        self.0 > 0
    }

    #[must_use]
    pub const fn is_negative(self) -> bool {
        self.0 < 0
    }

    /// Checked addition (returns `None` on overflow).
    #[must_use]
    pub fn checked_add(self, rhs: MoneyCents) -> Option<MoneyCents> {
        self.0.checked_add(rhs.0).map(MoneyCents)
    }

    /// Checked absolute value (`None` only for `i64::MIN` cents).
    #[must_use]
    pub fn checked_abs(self) -> Option<MoneyCents> {
        self.0.checked_abs().map(MoneyCents)
    }

    /// Checked negation (`None` only for `i64::MIN` cents).
    #[must_use]
    pub fn checked_neg(self) -> Option<MoneyCents> {
        self.0.checked_neg().map(MoneyCents)
    }
}

impl fmt::Display for MoneyCents {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

impl From<i64> for MoneyCents {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<MoneyCents> for i64 {
    fn from(value: MoneyCents) -> Self {
        value.0
    }
}

impl FromStr for MoneyCents {
    type Err = EngineError;

    /// Parses a decimal string into cents.
    ///
    /// Accepts `.` or `,` as decimal separator and an optional leading `+`/`-`.
    /// At most two fractional digits are allowed; trailing zeros beyond that
    /// (`"10.500"`) are accepted since they do not change the value.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let empty = || EngineError::InvalidAmount("amount must not be empty".to_string());
        let invalid = || EngineError::InvalidAmount(format!("amount is not a number: {s:?}"));
        let overflow = || EngineError::InvalidAmount("amount is too large".to_string());

        let trimmed = s.trim();
        let (negative, rest) = match trimmed.strip_prefix('-') {
            Some(stripped) => (true, stripped),
            None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
        };
        let rest = rest.trim().replace(',', ".");
        if rest.is_empty() {
            return Err(empty());
        }

        let (units_str, frac_str) = match rest.split_once('.') {
            Some((units, frac)) => (units, frac),
            None => (rest.as_str(), ""),
        };
        if units_str.is_empty()
            || !units_str.chars().all(|c| c.is_ascii_digit())
            || !frac_str.chars().all(|c| c.is_ascii_digit())
        {
            return Err(invalid());
        }

        let significant = frac_str.trim_end_matches('0');
        if significant.len() > 2 {
            return Err(EngineError::InvalidAmount(
                "amount must have at most 2 decimal places".to_string(),
            ));
        }
        let cents: i64 = match significant.len() {
            0 => 0,
            1 => significant.parse::<i64>().map_err(|_| invalid())? * 10,
            _ => significant.parse::<i64>().map_err(|_| invalid())?,
        };

        let units: i64 = units_str.parse().map_err(|_| overflow())?;
        let total = units
            .checked_mul(100)
            .and_then(|v| v.checked_add(cents))
            .ok_or_else(overflow)?;

        Ok(MoneyCents(if negative { -total } else { total }))
    }
}
