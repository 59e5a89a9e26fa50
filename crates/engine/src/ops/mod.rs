use sea_orm::DatabaseConnection;

use crate::{MirrorRules, ResultEngine};

mod balances;
mod transactions;

/// Run a block inside a DB transaction, committing on success and rolling back on error.
macro_rules! with_tx {
    ($self:expr, |$tx:ident| $body:expr) => {{
        let $tx = $self.database.begin().await?;
        let result = $body;
        match result {
            Ok(value) => {
                $tx.commit().await?;
                Ok(value)
            }
            Err(err) => Err(err),
        }
    }};
}

pub(crate) use with_tx;

#[derive(Debug)]
pub struct Engine {
    database: DatabaseConnection,
    mirror_rules: MirrorRules,
    cascade_delete: bool,
}

impl Engine {
    /// Return a builder for `Engine`. Help to build the struct.
    pub fn builder() -> EngineBuilder {
        EngineBuilder::default()
    }
}

/// The builder for `Engine`
pub struct EngineBuilder {
    database: DatabaseConnection,
    mirror_rules: MirrorRules,
    cascade_delete: bool,
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self {
            database: DatabaseConnection::default(),
            mirror_rules: MirrorRules::default(),
            cascade_delete: true,
        }
    }
}

impl EngineBuilder {
    /// Pass the required database
    pub fn database(mut self, db: DatabaseConnection) -> EngineBuilder {
        self.database = db;
        self
    }

    /// Replace the default `ahorros → tarjeta` mirror rule.
    pub fn mirror_rules(mut self, rules: MirrorRules) -> EngineBuilder {
        self.mirror_rules = rules;
        self
    }

    /// Whether deleting one side of a mirrored pair deletes the other side too
    /// (default: `true`).
    pub fn cascade_delete(mut self, cascade: bool) -> EngineBuilder {
        self.cascade_delete = cascade;
        self
    }

    /// Construct `Engine`
    pub async fn build(self) -> ResultEngine<Engine> {
        tracing::debug!(
            mirror_rules = ?self.mirror_rules,
            cascade_delete = self.cascade_delete,
            "engine configured"
        );
        Ok(Engine {
            database: self.database,
            mirror_rules: self.mirror_rules,
            cascade_delete: self.cascade_delete,
        })
    }
}
