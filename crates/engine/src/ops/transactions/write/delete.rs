use uuid::Uuid;

use sea_orm::{QueryFilter, TransactionTrait, Value, prelude::*, sea_query::Expr};

use crate::{ResultEngine, transactions};

use super::super::{
    super::{Engine, with_tx},
    partner_model, require_model,
};

impl Engine {
    /// Deletes a transaction and returns how many rows were removed.
    ///
    /// With cascading enabled, deleting either side of a mirrored pair removes
    /// both. Otherwise only the requested row goes, and a surviving mirror is
    /// detached (its `mirror_of` is cleared).
    pub async fn delete_transaction(&self, id: Uuid) -> ResultEngine<u64> {
        with_tx!(self, |db_tx| {
            let model = require_model(&db_tx, id).await?;
            let partner = partner_model(&db_tx, &model).await?;

            let mut ids = vec![model.id.clone()];
            match partner {
                Some(partner) if self.cascade_delete => {
                    // Mirror first, so its reference never dangles.
                    if model.mirror_of.is_some() {
                        ids.push(partner.id);
                    } else {
                        ids.insert(0, partner.id);
                    }
                }
                _ => {
                    if model.mirror_of.is_none() {
                        transactions::Entity::update_many()
                            .col_expr(
                                transactions::Column::MirrorOf,
                                Expr::value(Value::String(None)),
                            )
                            .filter(transactions::Column::MirrorOf.eq(model.id.clone()))
                            .exec(&db_tx)
                            .await?;
                    }
                }
            }

            let mut deleted = 0;
            for row_id in ids {
                deleted += transactions::Entity::delete_by_id(row_id)
                    .exec(&db_tx)
                    .await?
                    .rows_affected;
            }
            tracing::info!(%id, deleted, "transaction deleted");
            Ok(deleted)
        })
    }

    /// Deletes every transaction and returns the number of removed rows.
    pub async fn delete_all_transactions(&self) -> ResultEngine<u64> {
        let res = transactions::Entity::delete_many()
            .exec(&self.database)
            .await?;
        tracing::info!(deleted = res.rows_affected, "all transactions deleted");
        Ok(res.rows_affected)
    }
}
