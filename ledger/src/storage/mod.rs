//! Balance store seam.
//!
//! Holder quantities and the circulating supply live in an external store
//! reached through these provider traits. Each provider call is assumed
//! atomic; multi-write consistency is the overlay's job, not the store's.
//! An in-memory reference backend ships with the crate, durable backends
//! are supplied by the host.

mod memory;

use async_trait::async_trait;

use scrip_common::{error::LedgerError, holder::HolderId};

pub use memory::MemoryStorage;

#[async_trait]
pub trait BalanceProvider {
    /// Get the balance of a holder. Holders without an entry read as zero.
    async fn get_balance(&self, holder: &HolderId) -> Result<u64, LedgerError>;

    /// Set the balance of a holder
    async fn set_balance(&mut self, holder: &HolderId, balance: u64) -> Result<(), LedgerError>;
}

#[async_trait]
pub trait SupplyProvider {
    /// Get the circulating supply (total minted minus total burned)
    async fn get_supply(&self) -> Result<u64, LedgerError>;

    /// Set the circulating supply
    async fn set_supply(&mut self, supply: u64) -> Result<(), LedgerError>;
}

/// Full storage expected by the ledger service
pub trait Storage: BalanceProvider + SupplyProvider + Send + Sync {}

impl<T: BalanceProvider + SupplyProvider + Send + Sync> Storage for T {}
