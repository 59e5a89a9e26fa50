//! The module contains the errors the engine can throw.
//!
//! Validation failures carry the offending field in their message so callers
//! can surface them as-is. [`MirrorPosting`] is returned when the mirror entry
//! could not be written; the original entry is rolled back with it.
//!
//!  [`MirrorPosting`]: EngineError::MirrorPosting
use sea_orm::DbErr;
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid cashflow: {0}")]
    InvalidCashflow(String),
    #[error("Invalid field: {0}")]
    InvalidField(String),
    #[error("Invalid filter: {0}")]
    InvalidFilter(String),
    #[error("Invalid id: {0}")]
    InvalidId(String),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid mirror rule: {0}")]
    InvalidMirrorRule(String),
    #[error("Mirror posting failed: {0}")]
    MirrorPosting(String),
    #[error(transparent)]
    Database(#[from] DbErr),
}

impl EngineError {
    /// Returns `true` for errors caused by client input.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::InvalidAmount(_)
                | Self::InvalidCashflow(_)
                | Self::InvalidField(_)
                | Self::InvalidFilter(_)
                | Self::InvalidId(_)
        )
    }
}

impl PartialEq for EngineError {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::InvalidAmount(a), Self::InvalidAmount(b)) => a == b,
            (Self::InvalidCashflow(a), Self::InvalidCashflow(b)) => a == b,
            (Self::InvalidField(a), Self::InvalidField(b)) => a == b,
            (Self::InvalidFilter(a), Self::InvalidFilter(b)) => a == b,
            (Self::InvalidId(a), Self::InvalidId(b)) => a == b,
            (Self::KeyNotFound(a), Self::KeyNotFound(b)) => a == b,
            (Self::InvalidMirrorRule(a), Self::InvalidMirrorRule(b)) => a == b,
            (Self::MirrorPosting(a), Self::MirrorPosting(b)) => a == b,
            (Self::Database(a), Self::Database(b)) => a.to_string() == b.to_string(),
            _ => false,
        }
    }
}
