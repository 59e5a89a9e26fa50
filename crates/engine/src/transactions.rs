//! Transaction records.
//!
//! A `Transaction` is a single signed movement on one account. Mirror entries
//! are ordinary transactions whose `mirror_of` points at the entry that
//! spawned them.

use chrono::{DateTime, Utc};
use sea_orm::{ActiveValue, entity::prelude::*};
use uuid::Uuid;

use crate::{
    MoneyCents, ResultEngine,
    util::{normalize_required_text, parse_uuid},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transaction {
    pub id: Uuid,
    pub amount: MoneyCents,
    pub description: String,
    pub category: String,
    pub account: String,
    pub datetime: DateTime<Utc>,
    /// Set on mirror entries only.
    pub mirror_of: Option<Uuid>,
}

impl Transaction {
    /// Builds a new, unlinked transaction with a fresh id.
    ///
    /// Text fields are trimmed and must not be empty.
    pub fn new(
        amount: MoneyCents,
        description: &str,
        category: &str,
        account: &str,
        datetime: DateTime<Utc>,
    ) -> ResultEngine<Self> {
        Ok(Self {
            id: Uuid::new_v4(),
            amount,
            description: normalize_required_text(description, "description")?,
            category: normalize_required_text(category, "category")?,
            account: normalize_required_text(account, "account")?,
            datetime,
            mirror_of: None,
        })
    }

    pub fn is_mirror(&self) -> bool {
        self.mirror_of.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "transactions")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub amount_minor: i64,
    pub description: String,
    pub category: String,
    pub account: String,
    pub datetime: DateTimeUtc,
    pub mirror_of: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<&Transaction> for ActiveModel {
    fn from(tx: &Transaction) -> Self {
        Self {
            id: ActiveValue::Set(tx.id.to_string()),
            amount_minor: ActiveValue::Set(tx.amount.cents()),
            description: ActiveValue::Set(tx.description.clone()),
            category: ActiveValue::Set(tx.category.clone()),
            account: ActiveValue::Set(tx.account.clone()),
            datetime: ActiveValue::Set(tx.datetime),
            mirror_of: ActiveValue::Set(tx.mirror_of.map(|id| id.to_string())),
        }
    }
}

impl TryFrom<Model> for Transaction {
    type Error = crate::EngineError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Self {
            id: parse_uuid(&model.id, "transaction")?,
            amount: MoneyCents::new(model.amount_minor),
            description: model.description,
            category: model.category,
            account: model.account,
            datetime: model.datetime,
            mirror_of: model
                .mirror_of
                .as_deref()
                .map(|id| parse_uuid(id, "mirror_of"))
                .transpose()?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EngineError;

    #[test]
    fn new_rejects_blank_text() {
        let now = Utc::now();
        let res = Transaction::new(MoneyCents::new(100), " ", "food", "tarjeta", now);
        assert_eq!(
            res,
            Err(EngineError::InvalidField(
                "description must not be empty".to_string()
            ))
        );
        let res = Transaction::new(MoneyCents::new(100), "lunch", "food", "", now);
        assert!(matches!(res, Err(EngineError::InvalidField(_))));
    }

    #[test]
    fn model_roundtrip_keeps_mirror_link() {
        let mut tx =
            Transaction::new(MoneyCents::new(-250), "lunch", "food", "tarjeta", Utc::now())
                .unwrap();
        tx.mirror_of = Some(Uuid::new_v4());

        let active = ActiveModel::from(&tx);
        let model = Model {
            id: active.id.unwrap(),
            amount_minor: active.amount_minor.unwrap(),
            description: active.description.unwrap(),
            category: active.category.unwrap(),
            account: active.account.unwrap(),
            datetime: active.datetime.unwrap(),
            mirror_of: active.mirror_of.unwrap(),
        };
        assert_eq!(Transaction::try_from(model).unwrap(), tx);
    }

    #[test]
    fn corrupt_id_is_reported() {
        let model = Model {
            id: "not-a-uuid".to_string(),
            amount_minor: 1,
            description: "d".to_string(),
            category: "c".to_string(),
            account: "a".to_string(),
            datetime: Utc::now(),
            mirror_of: None,
        };
        assert!(matches!(
            Transaction::try_from(model),
            Err(EngineError::InvalidId(_))
        ));
    }
}
