use chrono::{DateTime, FixedOffset};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub mod transaction {
    use super::*;

    /// Body of `POST /transactions/create`.
    ///
    /// `cashflow` is write-only: it decides the sign of `amount` and is never
    /// returned. It is kept as a raw string so the server can report a
    /// field-level error for missing or unknown values.
    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionNew {
        pub amount: Decimal,
        pub description: String,
        pub category: String,
        pub account: String,
        /// RFC3339 timestamp of the economic event.
        pub datetime: DateTime<FixedOffset>,
        pub cashflow: Option<String>,
    }

    /// Body of `PATCH /transactions/{id}`.
    ///
    /// `amount` is taken as already signed. There is no `cashflow` here and
    /// unknown fields are rejected.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    pub struct TransactionUpdate {
        pub amount: Option<Decimal>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub account: Option<String>,
        pub datetime: Option<DateTime<FixedOffset>>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct TransactionView {
        pub id: Uuid,
        /// Signed amount, two fractional digits.
        pub amount: Decimal,
        pub description: String,
        pub category: String,
        pub account: String,
        pub datetime: DateTime<FixedOffset>,
        /// Id of the original transaction, set only on mirror entries.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        pub mirror_of: Option<Uuid>,
    }

    /// Query string of `GET /transactions/list`.
    #[derive(Debug, Default, Serialize, Deserialize)]
    #[serde(rename_all = "camelCase")]
    pub struct TransactionListQuery {
        pub min_amount: Option<Decimal>,
        pub max_amount: Option<Decimal>,
        pub description: Option<String>,
        pub category: Option<String>,
        pub account: Option<String>,
        /// One of `all`, `year`, `month`, `week`.
        pub date: Option<String>,
        /// Exclusive upper bound.
        pub before_datetime: Option<DateTime<FixedOffset>>,
        /// Exclusive lower bound.
        pub after_datetime: Option<DateTime<FixedOffset>>,
        pub skip: Option<u64>,
        pub limit: Option<u64>,
    }

    #[derive(Debug, Serialize, Deserialize)]
    pub struct Detail {
        pub detail: String,
    }
}

pub mod balance {
    use std::collections::BTreeMap;

    use super::*;

    /// Account name to summed signed amount.
    pub type Balances = BTreeMap<String, Decimal>;
}
