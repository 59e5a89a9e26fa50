use sea_orm::ActiveModelTrait;

use crate::{
    ResultEngine, Transaction, UpdateTransactionCmd, transactions,
    util::normalize_required_text,
};

use super::super::{Engine, partner_model, require_model};

impl Engine {
    /// Updates an existing transaction in place.
    ///
    /// The amount is stored as given, without cashflow normalization. This
    /// never creates, deletes or adjusts any other transaction: when the
    /// updated row belongs to a mirrored pair that no longer matches, a
    /// warning is logged and the pair is left as is.
    pub async fn update_transaction(&self, cmd: UpdateTransactionCmd) -> ResultEngine<Transaction> {
        let model = require_model(&self.database, cmd.transaction_id).await?;
        let mut tx = Transaction::try_from(model)?;

        if let Some(amount) = cmd.amount {
            tx.amount = amount;
        }
        if let Some(description) = cmd.description.as_deref() {
            tx.description = normalize_required_text(description, "description")?;
        }
        if let Some(category) = cmd.category.as_deref() {
            tx.category = normalize_required_text(category, "category")?;
        }
        if let Some(account) = cmd.account.as_deref() {
            tx.account = normalize_required_text(account, "account")?;
        }
        if let Some(datetime) = cmd.datetime {
            tx.datetime = datetime;
        }

        let model = transactions::ActiveModel::from(&tx)
            .update(&self.database)
            .await?;
        tracing::info!(id = %tx.id, "transaction updated");

        self.warn_on_mirror_drift(&tx, &model).await?;
        Ok(tx)
    }

    async fn warn_on_mirror_drift(
        &self,
        tx: &Transaction,
        model: &transactions::Model,
    ) -> ResultEngine<()> {
        let Some(partner) = partner_model(&self.database, model).await? else {
            return Ok(());
        };
        let partner = Transaction::try_from(partner)?;
        let (original, mirror) = if tx.is_mirror() {
            (&partner, tx)
        } else {
            (tx, &partner)
        };
        if !self.mirror_rules.in_sync(original, mirror) {
            tracing::warn!(
                original = %original.id,
                mirror = %mirror.id,
                "mirrored pair is out of sync after update"
            );
        }
        Ok(())
    }
}
