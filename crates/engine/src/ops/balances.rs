use std::collections::BTreeMap;

use sea_orm::{QuerySelect, prelude::*};

use crate::{MoneyCents, ResultEngine, transactions};

use super::Engine;

impl Engine {
    /// Sums signed amounts per account, mirror entries included.
    ///
    /// Accounts without transactions are absent from the result.
    pub async fn balances(&self) -> ResultEngine<BTreeMap<String, MoneyCents>> {
        let rows: Vec<(String, i64)> = transactions::Entity::find()
            .select_only()
            .column(transactions::Column::Account)
            .column_as(transactions::Column::AmountMinor.sum(), "total")
            .group_by(transactions::Column::Account)
            .into_tuple()
            .all(&self.database)
            .await?;

        tracing::debug!(accounts = rows.len(), "balances computed");
        Ok(rows
            .into_iter()
            .map(|(account, total)| (account, MoneyCents::new(total)))
            .collect())
    }
}
