use serde::{Deserialize, Serialize};

use crate::{
    config::{
        DEFAULT_ASSET_NAME, DEFAULT_ASSET_SYMBOL, DEFAULT_HOLDER_CAP, MAX_NAME_LENGTH,
        MAX_SYMBOL_LENGTH,
    },
    error::LedgerError,
    holder::HolderId,
};

/// Asset configuration supplied at initialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetConfig {
    /// Display name
    pub name: String,
    /// Ticker symbol
    pub symbol: String,
    /// Hard per-holder balance cap
    pub holder_cap: u64,
}

impl Default for AssetConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_ASSET_NAME.to_owned(),
            symbol: DEFAULT_ASSET_SYMBOL.to_owned(),
            holder_cap: DEFAULT_HOLDER_CAP,
        }
    }
}

impl AssetConfig {
    pub fn new(name: String, symbol: String, holder_cap: u64) -> Self {
        Self {
            name,
            symbol,
            holder_cap,
        }
    }

    pub fn validate(&self) -> Result<(), LedgerError> {
        if self.name.is_empty() {
            return Err(LedgerError::NameEmpty);
        }

        if self.name.len() > MAX_NAME_LENGTH {
            return Err(LedgerError::NameTooLong);
        }

        if self.symbol.is_empty() {
            return Err(LedgerError::SymbolEmpty);
        }

        if self.symbol.len() > MAX_SYMBOL_LENGTH {
            return Err(LedgerError::SymbolTooLong);
        }

        if self.holder_cap == 0 {
            return Err(LedgerError::InvalidCap);
        }

        Ok(())
    }
}

/// Record describing the managed asset.
///
/// Created once at initialization and immutable afterwards: name, symbol,
/// cap and administrator never change for the lifetime of the asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetRecord {
    name: String,
    symbol: String,
    holder_cap: u64,
    admin: HolderId,
    // Carried in persisted state for compatibility; no operation consults it
    // and nothing can flip it
    paused: bool,
}

impl AssetRecord {
    pub fn new(admin: HolderId, config: AssetConfig) -> Result<Self, LedgerError> {
        config.validate()?;
        Ok(Self {
            name: config.name,
            symbol: config.symbol,
            holder_cap: config.holder_cap,
            admin,
            paused: false,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    pub fn holder_cap(&self) -> u64 {
        self.holder_cap
    }

    pub fn admin(&self) -> &HolderId {
        &self.admin
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
