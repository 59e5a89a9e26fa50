//! Ledger engine.
//!
//! The engine owns the write path of the ledger: it normalizes the sign of
//! new transactions from their cashflow direction, posts mirror entries for
//! accounts that have a mirror rule, and keeps original and mirror in one
//! database transaction. Reads (single transaction, filtered list, balances)
//! go straight to the store.

pub use cashflow::{Cashflow, normalize_amount};
pub use commands::{CreateTransactionCmd, UpdateTransactionCmd};
pub use error::EngineError;
pub use filter::{DateBucket, TransactionListFilter};
pub use mirror::{DEFAULT_MIRROR_ACCOUNT, DEFAULT_SOURCE_ACCOUNT, MirrorRules};
pub use money::MoneyCents;
pub use ops::{Engine, EngineBuilder};
pub use transactions::Transaction;

mod cashflow;
mod commands;
mod error;
mod filter;
mod mirror;
mod money;
mod ops;
mod transactions;
mod util;

type ResultEngine<T> = Result<T, EngineError>;
