use thiserror::Error;

use crate::{
    config::{MAX_NAME_LENGTH, MAX_SYMBOL_LENGTH},
    features::Feature,
};

/// Errors surfaced by ledger operations.
///
/// Every failure aborts the whole operation: no balance, supply, registry or
/// flag change from the failed call is ever visible to a later read.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Caller is not the asset administrator")]
    PermissionDenied,

    #[error("Balance would exceed the per-holder cap")]
    CapacityExceeded,

    #[error("Insufficient balance")]
    InsufficientBalance,

    #[error("The {0} feature is disabled")]
    FeatureInactive(Feature),

    #[error("Recipients and amounts differ in length")]
    LengthMismatch,

    #[error("Amount must be greater than zero")]
    InvalidAmount,

    #[error("Identity list cannot be empty")]
    InvalidAddressList,

    #[error("Identity is already whitelisted")]
    AlreadyWhitelisted,

    #[error("Identity is not whitelisted")]
    NotWhitelisted,

    #[error("Balance overflow")]
    BalanceOverflow,

    #[error("Asset name cannot be empty")]
    NameEmpty,

    #[error("Asset name exceeds {max} bytes", max = MAX_NAME_LENGTH)]
    NameTooLong,

    #[error("Asset symbol cannot be empty")]
    SymbolEmpty,

    #[error("Asset symbol exceeds {max} bytes", max = MAX_SYMBOL_LENGTH)]
    SymbolTooLong,

    #[error("Holder cap must be greater than zero")]
    InvalidCap,
}
