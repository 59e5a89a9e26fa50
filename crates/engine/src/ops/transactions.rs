use uuid::Uuid;

use sea_orm::{ConnectionTrait, QueryFilter, prelude::*};

use crate::{EngineError, ResultEngine, Transaction, transactions};

use super::Engine;

mod list;
mod write;

fn not_found(id: &str) -> EngineError {
    EngineError::KeyNotFound(format!("transaction {id}"))
}

/// Loads a transaction row or fails with `KeyNotFound`.
async fn require_model<C: ConnectionTrait>(db: &C, id: Uuid) -> ResultEngine<transactions::Model> {
    let id = id.to_string();
    transactions::Entity::find_by_id(id.clone())
        .one(db)
        .await?
        .ok_or_else(|| not_found(&id))
}

/// Loads the other side of a mirrored pair, if any.
///
/// For a mirror this is its original; for an original it is the mirror that
/// points at it.
async fn partner_model<C: ConnectionTrait>(
    db: &C,
    model: &transactions::Model,
) -> ResultEngine<Option<transactions::Model>> {
    let partner = match &model.mirror_of {
        Some(original_id) => {
            transactions::Entity::find_by_id(original_id.clone())
                .one(db)
                .await?
        }
        None => {
            transactions::Entity::find()
                .filter(transactions::Column::MirrorOf.eq(model.id.clone()))
                .one(db)
                .await?
        }
    };
    Ok(partner)
}

impl Engine {
    /// Returns a single transaction.
    pub async fn transaction(&self, id: Uuid) -> ResultEngine<Transaction> {
        let model = require_model(&self.database, id).await?;
        Transaction::try_from(model)
    }

    /// Returns the other side of a mirrored pair, or `None` for unpaired
    /// transactions.
    pub async fn mirror_partner(&self, id: Uuid) -> ResultEngine<Option<Transaction>> {
        let model = require_model(&self.database, id).await?;
        partner_model(&self.database, &model)
            .await?
            .map(Transaction::try_from)
            .transpose()
    }
}
