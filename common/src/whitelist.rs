use indexmap::IndexSet;
use log::trace;
use serde::{Deserialize, Serialize};

use crate::{error::LedgerError, holder::HolderId};

/// Membership registry of holders eligible for bulk distribution.
///
/// Bulk mutations are all-or-nothing: every identity in a call is validated
/// against a staged view before the registry changes, so one bad entry leaves
/// the whole registry untouched. Insertion order is preserved.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WhitelistRegistry {
    members: IndexSet<HolderId>,
}

impl WhitelistRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, holder: &HolderId) -> bool {
        self.members.contains(holder)
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &HolderId> {
        self.members.iter()
    }

    /// Add every identity or none.
    ///
    /// Fails if the list is empty, if any identity is already a member, or
    /// if the same identity appears twice in the list.
    pub fn add_many(&mut self, holders: &[HolderId]) -> Result<(), LedgerError> {
        if holders.is_empty() {
            return Err(LedgerError::InvalidAddressList);
        }

        let mut staged = IndexSet::with_capacity(holders.len());
        for holder in holders {
            if self.members.contains(holder) || !staged.insert(holder.clone()) {
                return Err(LedgerError::AlreadyWhitelisted);
            }
        }

        for holder in staged {
            self.members.insert(holder);
        }

        trace!(
            "whitelist: added {} member(s), {} total",
            holders.len(),
            self.members.len()
        );
        Ok(())
    }

    /// Remove every identity or none.
    ///
    /// Fails if the list is empty, if any identity is not a member, or if the
    /// same identity appears twice in the list (the second occurrence targets
    /// an already-removed member).
    pub fn remove_many(&mut self, holders: &[HolderId]) -> Result<(), LedgerError> {
        if holders.is_empty() {
            return Err(LedgerError::InvalidAddressList);
        }

        let mut staged = IndexSet::with_capacity(holders.len());
        for holder in holders {
            if !self.members.contains(holder) || !staged.insert(holder.clone()) {
                return Err(LedgerError::NotWhitelisted);
            }
        }

        for holder in &staged {
            self.members.shift_remove(holder);
        }

        trace!(
            "whitelist: removed {} member(s), {} left",
            staged.len(),
            self.members.len()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn holder(tag: u8) -> HolderId {
        HolderId::new([tag; 32])
    }

    #[test]
    fn test_add_and_remove() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(1), holder(2)]).unwrap();
        assert!(registry.contains(&holder(1)));
        assert!(registry.contains(&holder(2)));
        assert_eq!(registry.len(), 2);

        registry.remove_many(&[holder(1)]).unwrap();
        assert!(!registry.contains(&holder(1)));
        assert!(registry.contains(&holder(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_empty_list_rejected() {
        let mut registry = WhitelistRegistry::new();
        assert_eq!(
            registry.add_many(&[]).unwrap_err(),
            LedgerError::InvalidAddressList
        );
        assert_eq!(
            registry.remove_many(&[]).unwrap_err(),
            LedgerError::InvalidAddressList
        );
    }

    #[test]
    fn test_add_is_all_or_nothing() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(1)]).unwrap();

        // holder(1) is already a member, so holder(2) must not get in either
        assert_eq!(
            registry.add_many(&[holder(2), holder(1)]).unwrap_err(),
            LedgerError::AlreadyWhitelisted
        );
        assert!(!registry.contains(&holder(2)));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_add_rejects_duplicate_in_call() {
        let mut registry = WhitelistRegistry::new();
        assert_eq!(
            registry.add_many(&[holder(3), holder(3)]).unwrap_err(),
            LedgerError::AlreadyWhitelisted
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_remove_is_all_or_nothing() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(1), holder(2)]).unwrap();

        assert_eq!(
            registry.remove_many(&[holder(1), holder(9)]).unwrap_err(),
            LedgerError::NotWhitelisted
        );
        assert!(registry.contains(&holder(1)));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_remove_rejects_duplicate_in_call() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(1)]).unwrap();

        assert_eq!(
            registry.remove_many(&[holder(1), holder(1)]).unwrap_err(),
            LedgerError::NotWhitelisted
        );
        assert!(registry.contains(&holder(1)));
    }

    #[test]
    fn test_insertion_order_preserved() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(5), holder(3), holder(8)]).unwrap();
        registry.remove_many(&[holder(3)]).unwrap();

        let members: Vec<_> = registry.iter().cloned().collect();
        assert_eq!(members, vec![holder(5), holder(8)]);
    }

    #[test]
    fn test_serde_keeps_members_in_order() {
        let mut registry = WhitelistRegistry::new();
        registry.add_many(&[holder(5), holder(3), holder(8)]).unwrap();

        let json = serde_json::to_string(&registry).unwrap();
        let decoded: WhitelistRegistry = serde_json::from_str(&json).unwrap();
        assert_eq!(decoded, registry);

        let members: Vec<_> = decoded.iter().cloned().collect();
        assert_eq!(members, vec![holder(5), holder(3), holder(8)]);
    }
}
