use sea_orm::{ActiveModelTrait, TransactionTrait};

use crate::{
    CreateTransactionCmd, EngineError, ResultEngine, Transaction, normalize_amount, transactions,
};

use super::super::super::{Engine, with_tx};

impl Engine {
    /// Records a new transaction.
    ///
    /// The amount is signed from the command's cashflow. When the account has
    /// a mirror rule the counter-entry is written in the same DB transaction,
    /// so either both rows exist or neither does. Only the original is
    /// returned.
    pub async fn create_transaction(&self, cmd: CreateTransactionCmd) -> ResultEngine<Transaction> {
        let amount = normalize_amount(cmd.amount, cmd.cashflow)?;
        let original = Transaction::new(
            amount,
            &cmd.description,
            &cmd.category,
            &cmd.account,
            cmd.datetime,
        )?;
        let mirror = self.mirror_rules.mirror_for(&original)?;

        with_tx!(self, |db_tx| {
            transactions::ActiveModel::from(&original)
                .insert(&db_tx)
                .await?;

            if let Some(mirror) = &mirror {
                transactions::ActiveModel::from(mirror)
                    .insert(&db_tx)
                    .await
                    .map_err(|err| {
                        tracing::error!(
                            original = %original.id,
                            "mirror insert failed, rolling back: {err}"
                        );
                        EngineError::MirrorPosting(format!(
                            "mirror of {} on {:?} was not recorded; the transaction was rolled back",
                            original.id, mirror.account
                        ))
                    })?;
            }

            tracing::info!(
                id = %original.id,
                account = %original.account,
                amount = %original.amount,
                cashflow = %cmd.cashflow,
                mirror = ?mirror.as_ref().map(|m| m.id),
                "transaction created"
            );
            Ok(original)
        })
    }
}
