//! Mirror rules for dual-entry posting.
//!
//! Money recorded on some accounts also moves another account: a deposit on
//! the savings account is taken from the card float. `MirrorRules` maps an
//! account to the account that receives the counter-entry.

use std::collections::BTreeMap;

use uuid::Uuid;

use crate::{EngineError, ResultEngine, Transaction};

/// Savings account whose entries are mirrored by default.
pub const DEFAULT_SOURCE_ACCOUNT: &str = "ahorros";
/// Card account receiving the default mirror entries.
pub const DEFAULT_MIRROR_ACCOUNT: &str = "tarjeta";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MirrorRules {
    accounts: BTreeMap<String, String>,
}

impl Default for MirrorRules {
    fn default() -> Self {
        Self {
            accounts: BTreeMap::from([(
                DEFAULT_SOURCE_ACCOUNT.to_string(),
                DEFAULT_MIRROR_ACCOUNT.to_string(),
            )]),
        }
    }
}

impl MirrorRules {
    /// Builds rules from `account → mirror account` pairs.
    ///
    /// Names are trimmed; empty names and self-mirrors are rejected.
    pub fn new<I, K, V>(pairs: I) -> ResultEngine<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut accounts = BTreeMap::new();
        for (account, mirror) in pairs {
            let account = account.as_ref().trim();
            let mirror = mirror.as_ref().trim();
            if account.is_empty() || mirror.is_empty() {
                return Err(EngineError::InvalidMirrorRule(
                    "account names must not be empty".to_string(),
                ));
            }
            if account == mirror {
                return Err(EngineError::InvalidMirrorRule(format!(
                    "account {account:?} cannot mirror onto itself"
                )));
            }
            accounts.insert(account.to_string(), mirror.to_string());
        }
        Ok(Self { accounts })
    }

    /// Rules that never mirror anything.
    pub fn none() -> Self {
        Self {
            accounts: BTreeMap::new(),
        }
    }

    pub fn mirror_account(&self, account: &str) -> Option<&str> {
        self.accounts.get(account).map(String::as_str)
    }

    /// Builds the counter-entry for a freshly created transaction.
    ///
    /// Returns `None` when the account has no rule, or when `original` is
    /// itself a mirror: mirrors are one level deep.
    pub fn mirror_for(&self, original: &Transaction) -> ResultEngine<Option<Transaction>> {
        if original.is_mirror() {
            return Ok(None);
        }
        let Some(mirror_account) = self.mirror_account(&original.account) else {
            return Ok(None);
        };
        let amount = original
            .amount
            .checked_neg()
            .ok_or_else(|| EngineError::InvalidAmount("amount is too large".to_string()))?;

        Ok(Some(Transaction {
            id: Uuid::new_v4(),
            amount,
            description: original.description.clone(),
            category: original.category.clone(),
            account: mirror_account.to_string(),
            datetime: original.datetime,
            mirror_of: Some(original.id),
        }))
    }

    /// Returns `true` while `mirror` still matches what [`mirror_for`] would
    /// have built from `original`.
    ///
    /// [`mirror_for`]: MirrorRules::mirror_for
    pub fn in_sync(&self, original: &Transaction, mirror: &Transaction) -> bool {
        mirror.mirror_of == Some(original.id)
            && original.amount.checked_neg() == Some(mirror.amount)
            && self.mirror_account(&original.account) == Some(mirror.account.as_str())
            && original.description == mirror.description
            && original.category == mirror.category
            && original.datetime == mirror.datetime
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::MoneyCents;

    fn tx(account: &str, cents: i64) -> Transaction {
        Transaction::new(MoneyCents::new(cents), "transfer", "savings", account, Utc::now())
            .unwrap()
    }

    #[test]
    fn default_mirrors_savings_into_card() {
        let rules = MirrorRules::default();
        let original = tx("ahorros", 10_000);
        let mirror = rules.mirror_for(&original).unwrap().unwrap();

        assert_ne!(mirror.id, original.id);
        assert_eq!(mirror.account, "tarjeta");
        assert_eq!(mirror.amount, MoneyCents::new(-10_000));
        assert_eq!(mirror.description, original.description);
        assert_eq!(mirror.category, original.category);
        assert_eq!(mirror.datetime, original.datetime);
        assert_eq!(mirror.mirror_of, Some(original.id));
        assert!(rules.in_sync(&original, &mirror));
    }

    #[test]
    fn unmapped_account_has_no_mirror() {
        let rules = MirrorRules::default();
        assert_eq!(rules.mirror_for(&tx("tarjeta", -500)).unwrap(), None);
        assert_eq!(MirrorRules::none().mirror_for(&tx("ahorros", 1)).unwrap(), None);
    }

    #[test]
    fn mirrors_do_not_chain() {
        let rules = MirrorRules::new([("ahorros", "tarjeta"), ("tarjeta", "efectivo")]).unwrap();
        let original = tx("ahorros", 700);
        let mirror = rules.mirror_for(&original).unwrap().unwrap();
        assert_eq!(rules.mirror_for(&mirror).unwrap(), None);
    }

    #[test]
    fn edited_mirror_is_out_of_sync() {
        let rules = MirrorRules::default();
        let original = tx("ahorros", 700);
        let mut mirror = rules.mirror_for(&original).unwrap().unwrap();
        mirror.amount = MoneyCents::new(-600);
        assert!(!rules.in_sync(&original, &mirror));
    }

    #[test]
    fn invalid_rules_are_rejected() {
        assert!(matches!(
            MirrorRules::new([("ahorros", "ahorros")]),
            Err(EngineError::InvalidMirrorRule(_))
        ));
        assert!(matches!(
            MirrorRules::new([(" ", "tarjeta")]),
            Err(EngineError::InvalidMirrorRule(_))
        ));
        let rules = MirrorRules::new([(" cuenta ", "tarjeta ")]).unwrap();
        assert_eq!(rules.mirror_account("cuenta"), Some("tarjeta"));
    }
}
