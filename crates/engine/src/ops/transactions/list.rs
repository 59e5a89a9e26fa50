use chrono::{DateTime, Utc};

use sea_orm::{
    QueryFilter, QueryOrder, QuerySelect,
    prelude::*,
    sea_query::{Expr, LikeExpr, SimpleExpr},
};

use crate::{ResultEngine, Transaction, TransactionListFilter, transactions};

use super::super::Engine;

/// Stand-in for "no limit": SQLite only accepts OFFSET after a LIMIT.
const UNBOUNDED_LIMIT: u64 = i64::MAX as u64;

trait ApplyListFilter: QueryFilter + Sized {
    fn apply_list_filter(self, filter: &TransactionListFilter, now: DateTime<Utc>) -> Self;
}

impl<T> ApplyListFilter for T
where
    T: QueryFilter + Sized,
{
    fn apply_list_filter(mut self, filter: &TransactionListFilter, now: DateTime<Utc>) -> Self {
        if let Some(min) = filter.min_amount {
            self = self.filter(transactions::Column::AmountMinor.gte(min.cents()));
        }
        if let Some(max) = filter.max_amount {
            self = self.filter(transactions::Column::AmountMinor.lte(max.cents()));
        }
        if let Some(description) = non_blank(&filter.description) {
            self = self.filter(contains_literal(transactions::Column::Description, description));
        }
        if let Some(category) = non_blank(&filter.category) {
            self = self.filter(contains_literal(transactions::Column::Category, category));
        }
        if let Some(account) = non_blank(&filter.account) {
            self = self.filter(contains_literal(transactions::Column::Account, account));
        }
        if let Some(cutoff) = filter.date.and_then(|bucket| bucket.cutoff(now)) {
            self = self.filter(transactions::Column::Datetime.gte(cutoff));
        }
        if let Some(before) = filter.before {
            self = self.filter(transactions::Column::Datetime.lt(before));
        }
        if let Some(after) = filter.after {
            self = self.filter(transactions::Column::Datetime.gt(after));
        }
        self
    }
}

const LIKE_ESCAPE: char = '!';

/// Substring match where `%` and `_` in `needle` are plain characters.
///
/// SQLite LIKE is case-insensitive for ASCII.
fn contains_literal(column: transactions::Column, needle: &str) -> SimpleExpr {
    let mut escaped = String::with_capacity(needle.len());
    for ch in needle.chars() {
        if matches!(ch, LIKE_ESCAPE | '%' | '_') {
            escaped.push(LIKE_ESCAPE);
        }
        escaped.push(ch);
    }
    Expr::col(column).like(LikeExpr::new(format!("%{escaped}%")).escape(LIKE_ESCAPE))
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

impl Engine {
    /// Lists transactions matching `filter`, newest first.
    ///
    /// `now` anchors the relative date bucket.
    pub async fn list_transactions(
        &self,
        filter: &TransactionListFilter,
        now: DateTime<Utc>,
    ) -> ResultEngine<Vec<Transaction>> {
        let mut query = transactions::Entity::find()
            .apply_list_filter(filter, now)
            .order_by_desc(transactions::Column::Datetime)
            .order_by_desc(transactions::Column::Id);
        if filter.skip.is_some() || filter.limit.is_some() {
            query = query
                .offset(filter.skip.unwrap_or(0))
                .limit(filter.limit.unwrap_or(UNBOUNDED_LIMIT));
        }

        let models = query.all(&self.database).await?;
        tracing::debug!(count = models.len(), ?filter, "transactions listed");
        models.into_iter().map(Transaction::try_from).collect()
    }
}
