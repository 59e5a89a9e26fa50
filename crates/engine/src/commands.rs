//! Command structs for engine write operations.
//!
//! These types group parameters for create/update, keeping call sites
//! readable and avoiding long argument lists.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{Cashflow, MoneyCents};

/// Record a new transaction.
///
/// `amount` is a magnitude: its sign is replaced according to `cashflow`.
#[derive(Clone, Debug)]
pub struct CreateTransactionCmd {
    pub amount: MoneyCents,
    pub cashflow: Cashflow,
    pub description: String,
    pub category: String,
    pub account: String,
    pub datetime: DateTime<Utc>,
}

/// Partially update an existing transaction.
///
/// `amount` is stored as given (already signed); there is no cashflow here.
/// Linked mirror entries are left untouched.
#[derive(Clone, Debug, Default)]
pub struct UpdateTransactionCmd {
    pub transaction_id: Uuid,
    pub amount: Option<MoneyCents>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub account: Option<String>,
    pub datetime: Option<DateTime<Utc>>,
}

impl UpdateTransactionCmd {
    #[must_use]
    pub fn new(transaction_id: Uuid) -> Self {
        Self {
            transaction_id,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn amount(mut self, amount: MoneyCents) -> Self {
        self.amount = Some(amount);
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn account(mut self, account: impl Into<String>) -> Self {
        self.account = Some(account.into());
        self
    }

    #[must_use]
    pub fn datetime(mut self, datetime: DateTime<Utc>) -> Self {
        self.datetime = Some(datetime);
        self
    }
}
