use async_trait::async_trait;
use log::trace;
use std::collections::HashMap;

use scrip_common::{error::LedgerError, holder::HolderId};

use super::{BalanceProvider, SupplyProvider};

/// HashMap-backed reference store.
///
/// Used by the tests and by embedders that keep ledger state in process.
/// Operations never fail.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    balances: HashMap<HolderId, u64>,
    supply: u64,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Iterate over every holder entry
    pub fn balances(&self) -> impl Iterator<Item = (&HolderId, u64)> {
        self.balances.iter().map(|(holder, balance)| (holder, *balance))
    }
}

#[async_trait]
impl BalanceProvider for MemoryStorage {
    async fn get_balance(&self, holder: &HolderId) -> Result<u64, LedgerError> {
        Ok(self.balances.get(holder).copied().unwrap_or(0))
    }

    async fn set_balance(&mut self, holder: &HolderId, balance: u64) -> Result<(), LedgerError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("set balance of {} to {}", holder, balance);
        }
        self.balances.insert(holder.clone(), balance);
        Ok(())
    }
}

#[async_trait]
impl SupplyProvider for MemoryStorage {
    async fn get_supply(&self) -> Result<u64, LedgerError> {
        Ok(self.supply)
    }

    async fn set_supply(&mut self, supply: u64) -> Result<(), LedgerError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!("set supply to {}", supply);
        }
        self.supply = supply;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_holder_reads_as_zero() {
        let storage = MemoryStorage::new();
        let holder = HolderId::new([9u8; 32]);
        assert_eq!(storage.get_balance(&holder).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_set_then_get() {
        let mut storage = MemoryStorage::new();
        let holder = HolderId::new([1u8; 32]);
        storage.set_balance(&holder, 42).await.unwrap();
        assert_eq!(storage.get_balance(&holder).await.unwrap(), 42);

        storage.set_supply(42).await.unwrap();
        assert_eq!(storage.get_supply().await.unwrap(), 42);
    }
}
