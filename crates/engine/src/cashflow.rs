//! Cashflow direction and sign normalization.
//!
//! Clients state the magnitude of a new transaction and whether it is money
//! coming in or going out. The stored amount is signed; the direction itself
//! is never persisted.

use std::fmt;

use crate::{EngineError, MoneyCents, ResultEngine};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cashflow {
    Income,
    Expense,
}

impl Cashflow {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Income => "income",
            Self::Expense => "expense",
        }
    }

    /// Parses an optional raw value, treating absence as a validation error.
    pub fn required(value: Option<&str>) -> ResultEngine<Self> {
        match value {
            Some(value) => Self::try_from(value),
            None => Err(EngineError::InvalidCashflow(
                "cashflow is required (income or expense)".to_string(),
            )),
        }
    }
}

impl fmt::Display for Cashflow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for Cashflow {
    type Error = EngineError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value {
            "income" => Ok(Self::Income),
            "expense" => Ok(Self::Expense),
            other => Err(EngineError::InvalidCashflow(format!(
                "cashflow must be income or expense, got {other:?}"
            ))),
        }
    }
}

/// Signs `amount` according to `cashflow`: `+|amount|` for income,
/// `-|amount|` for expense. The sign the client sent is ignored.
pub fn normalize_amount(amount: MoneyCents, cashflow: Cashflow) -> ResultEngine<MoneyCents> {
    let magnitude = amount
        .checked_abs()
        .ok_or_else(|| EngineError::InvalidAmount("amount is too large".to_string()))?;
    match cashflow {
        Cashflow::Income => Ok(magnitude),
        // |amount| <= i64::MAX, so the negation cannot overflow.
        Cashflow::Expense => Ok(MoneyCents::new(-magnitude.cents())),
    }
}
