//! Airdrop engine.
//!
//! Batch distribution funded by the administrator's own balance. Each
//! recipient is handled as a delegated transfer staged into one shared
//! overlay, so the store is only written after the whole batch has
//! validated; one bad entry rolls the entire batch back.

use log::{debug, trace};

use scrip_common::{error::LedgerError, features::Feature, holder::HolderId};

use crate::{overlay::BalanceOverlay, storage::Storage};

use super::{check_cap, require_admin, Ledger};

impl<S: Storage> Ledger<S> {
    /// Distribute `amounts[i]` units to `recipients[i]` out of the caller's
    /// balance.
    ///
    /// Requires both feature gates up and every recipient whitelisted.
    /// Recipients are processed in order and the first failing entry aborts
    /// the whole batch with nothing written. An empty batch is a successful
    /// no-op once the gates have passed.
    pub async fn airdrop(
        &mut self,
        caller: &HolderId,
        recipients: &[HolderId],
        amounts: &[u64],
    ) -> Result<(), LedgerError> {
        if !self.features.airdrop_enabled {
            return Err(LedgerError::FeatureInactive(Feature::Airdrop));
        }

        if !self.features.whitelist_enabled {
            return Err(LedgerError::FeatureInactive(Feature::Whitelist));
        }

        if recipients.len() != amounts.len() {
            return Err(LedgerError::LengthMismatch);
        }

        let mut overlay = BalanceOverlay::new();
        for (recipient, amount) in recipients.iter().zip(amounts) {
            if !self.whitelist.contains(recipient) {
                return Err(LedgerError::NotWhitelisted);
            }

            // Cap check against the staged balance, so a recipient listed
            // twice sees its earlier credit
            let balance = overlay.balance(&self.storage, recipient).await?;
            check_cap(balance, *amount, self.record.holder_cap())?;

            if *amount == 0 {
                return Err(LedgerError::InvalidAmount);
            }

            // Delegated transfer out of the caller's balance; authorization
            // is re-validated per recipient
            let caps = require_admin(&self.record, &self.caps, caller)?;
            Self::move_units(
                &self.storage,
                &mut overlay,
                caller,
                recipient,
                *amount,
                self.record.holder_cap(),
                caps.transfer(),
            )
            .await?;

            if log::log_enabled!(log::Level::Trace) {
                trace!("airdrop staged {} to {}", amount, recipient);
            }
        }

        let count = recipients.len();
        overlay.commit(&mut self.storage).await?;

        debug!("airdrop distributed to {} recipient(s)", count);
        Ok(())
    }
}
