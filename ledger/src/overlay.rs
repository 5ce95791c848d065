//! Staged balance overlay.
//!
//! Mutating operations never write to the store directly. They stage their
//! changes here, validate everything, and only then apply the whole batch in
//! one pass with [`BalanceOverlay::commit`]. Dropping the overlay discards
//! the staged changes, which is what makes multi-write operations
//! all-or-nothing on top of a store that only offers per-entry writes.

use log::trace;
use std::collections::HashMap;

use scrip_common::{error::LedgerError, holder::HolderId};

use crate::storage::Storage;

/// Staged balance and supply changes on top of a store snapshot
#[derive(Debug, Default)]
pub struct BalanceOverlay {
    // Post-change balances for every holder touched so far
    balances: HashMap<HolderId, u64>,
    // Staged circulating supply, set only when mint or burn touched it
    supply: Option<u64>,
}

impl BalanceOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a balance through the overlay: staged value first, store second
    pub async fn balance<S: Storage>(
        &self,
        storage: &S,
        holder: &HolderId,
    ) -> Result<u64, LedgerError> {
        match self.balances.get(holder) {
            Some(balance) => Ok(*balance),
            None => storage.get_balance(holder).await,
        }
    }

    /// Read the circulating supply through the overlay
    pub async fn supply<S: Storage>(&self, storage: &S) -> Result<u64, LedgerError> {
        match self.supply {
            Some(supply) => Ok(supply),
            None => storage.get_supply().await,
        }
    }

    /// Stage a credit to a holder
    pub async fn credit<S: Storage>(
        &mut self,
        storage: &S,
        holder: &HolderId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let balance = self.balance(storage, holder).await?;
        let updated = balance
            .checked_add(amount)
            .ok_or(LedgerError::BalanceOverflow)?;
        self.balances.insert(holder.clone(), updated);
        Ok(())
    }

    /// Stage a debit from a holder. Underflow surfaces here, at the store
    /// boundary, as `InsufficientBalance`.
    pub async fn debit<S: Storage>(
        &mut self,
        storage: &S,
        holder: &HolderId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let balance = self.balance(storage, holder).await?;
        let updated = balance
            .checked_sub(amount)
            .ok_or(LedgerError::InsufficientBalance)?;
        self.balances.insert(holder.clone(), updated);
        Ok(())
    }

    /// Stage a supply increase
    pub async fn add_supply<S: Storage>(
        &mut self,
        storage: &S,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let supply = self.supply(storage).await?;
        self.supply = Some(
            supply
                .checked_add(amount)
                .ok_or(LedgerError::BalanceOverflow)?,
        );
        Ok(())
    }

    /// Stage a supply decrease
    pub async fn sub_supply<S: Storage>(
        &mut self,
        storage: &S,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let supply = self.supply(storage).await?;
        self.supply = Some(
            supply
                .checked_sub(amount)
                .ok_or(LedgerError::InsufficientBalance)?,
        );
        Ok(())
    }

    /// Apply every staged change to the store. Nothing is written before
    /// this point; the overlay is consumed either way.
    pub async fn commit<S: Storage>(self, storage: &mut S) -> Result<(), LedgerError> {
        if log::log_enabled!(log::Level::Trace) {
            trace!(
                "committing overlay: {} balance change(s), supply {}",
                self.balances.len(),
                if self.supply.is_some() { "changed" } else { "unchanged" }
            );
        }

        for (holder, balance) in self.balances {
            storage.set_balance(&holder, balance).await?;
        }

        if let Some(supply) = self.supply {
            storage.set_supply(supply).await?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::{BalanceProvider, MemoryStorage, SupplyProvider};

    fn holder(tag: u8) -> HolderId {
        HolderId::new([tag; 32])
    }

    #[tokio::test]
    async fn test_read_through() {
        let mut storage = MemoryStorage::new();
        storage.set_balance(&holder(1), 30).await.unwrap();

        let mut overlay = BalanceOverlay::new();
        assert_eq!(overlay.balance(&storage, &holder(1)).await.unwrap(), 30);

        overlay.credit(&storage, &holder(1), 5).await.unwrap();
        // Staged value shadows the store, the store itself is untouched
        assert_eq!(overlay.balance(&storage, &holder(1)).await.unwrap(), 35);
        assert_eq!(storage.get_balance(&holder(1)).await.unwrap(), 30);
    }

    #[tokio::test]
    async fn test_debit_underflow() {
        let storage = MemoryStorage::new();
        let mut overlay = BalanceOverlay::new();
        assert_eq!(
            overlay.debit(&storage, &holder(1), 1).await.unwrap_err(),
            LedgerError::InsufficientBalance
        );
    }

    #[tokio::test]
    async fn test_supply_overflow() {
        let mut storage = MemoryStorage::new();
        storage.set_supply(u64::MAX).await.unwrap();

        let mut overlay = BalanceOverlay::new();
        assert_eq!(
            overlay.add_supply(&storage, 1).await.unwrap_err(),
            LedgerError::BalanceOverflow
        );
    }

    #[tokio::test]
    async fn test_drop_discards_staged_changes() {
        let mut storage = MemoryStorage::new();
        storage.set_balance(&holder(1), 10).await.unwrap();

        {
            let mut overlay = BalanceOverlay::new();
            overlay.credit(&storage, &holder(1), 90).await.unwrap();
            overlay.add_supply(&storage, 90).await.unwrap();
        }

        assert_eq!(storage.get_balance(&holder(1)).await.unwrap(), 10);
        assert_eq!(storage.get_supply().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_commit_applies_everything() {
        let mut storage = MemoryStorage::new();

        let mut overlay = BalanceOverlay::new();
        overlay.credit(&storage, &holder(1), 25).await.unwrap();
        overlay.credit(&storage, &holder(2), 50).await.unwrap();
        overlay.add_supply(&storage, 75).await.unwrap();
        overlay.commit(&mut storage).await.unwrap();

        assert_eq!(storage.get_balance(&holder(1)).await.unwrap(), 25);
        assert_eq!(storage.get_balance(&holder(2)).await.unwrap(), 50);
        assert_eq!(storage.get_supply().await.unwrap(), 75);
    }
}
