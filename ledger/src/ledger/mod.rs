//! Ledger service.
//!
//! One service instance manages one asset: it owns the asset record, the
//! capability set, the feature switches and the whitelist registry, and
//! drives every operation against the balance store. Mutations take
//! `&mut self`, so the host serializes calls and no operation ever observes
//! another one half-applied.

mod airdrop;

use log::debug;

use scrip_common::{
    asset::{AssetConfig, AssetRecord},
    error::LedgerError,
    features::{Feature, FeatureState},
    holder::HolderId,
    whitelist::WhitelistRegistry,
};

use crate::{
    capability::{BurnCapability, CapabilitySet, MintCapability, TransferCapability},
    overlay::BalanceOverlay,
    storage::Storage,
};

/// Verify the caller is the administrator and lend out the capability set.
///
/// Every privileged operation funnels through here; a non-admin caller gets
/// `PermissionDenied` and never sees a capability.
fn require_admin<'c>(
    record: &AssetRecord,
    caps: &'c CapabilitySet,
    caller: &HolderId,
) -> Result<&'c CapabilitySet, LedgerError> {
    if caller != record.admin() {
        return Err(LedgerError::PermissionDenied);
    }
    Ok(caps)
}

/// Supply cap policy: the post-operation balance must stay within the
/// per-holder cap. An overflowing sum necessarily exceeds the cap.
fn check_cap(balance: u64, incoming: u64, cap: u64) -> Result<(), LedgerError> {
    match balance.checked_add(incoming) {
        Some(total) if total <= cap => Ok(()),
        _ => Err(LedgerError::CapacityExceeded),
    }
}

/// Single-asset ledger service over a balance store `S`
pub struct Ledger<S: Storage> {
    storage: S,
    record: AssetRecord,
    caps: CapabilitySet,
    features: FeatureState,
    whitelist: WhitelistRegistry,
}

impl<S: Storage> Ledger<S> {
    /// Create the asset and forge its capability set.
    ///
    /// Runs once per asset. The caller becomes the administrator; both
    /// feature gates start disabled and the whitelist starts empty.
    pub fn initialize(storage: S, admin: HolderId, config: AssetConfig) -> Result<Self, LedgerError> {
        let record = AssetRecord::new(admin, config)?;
        debug!(
            "initialized asset {} ({}) with holder cap {}",
            record.name(),
            record.symbol(),
            record.holder_cap()
        );

        Ok(Self {
            storage,
            record,
            caps: CapabilitySet::forge(),
            features: FeatureState::disabled(),
            whitelist: WhitelistRegistry::new(),
        })
    }

    /// Stage a mint: cap check against the staged balance, then credit and
    /// supply increase. Requires the mint capability.
    async fn mint_units(
        storage: &S,
        overlay: &mut BalanceOverlay,
        to: &HolderId,
        amount: u64,
        cap: u64,
        _witness: &MintCapability,
    ) -> Result<(), LedgerError> {
        let balance = overlay.balance(storage, to).await?;
        check_cap(balance, amount, cap)?;
        overlay.credit(storage, to, amount).await?;
        overlay.add_supply(storage, amount).await
    }

    /// Stage a transfer: source funds first, then the recipient cap, both
    /// against the staged balances before any debit. Requires the transfer
    /// capability.
    async fn move_units(
        storage: &S,
        overlay: &mut BalanceOverlay,
        from: &HolderId,
        to: &HolderId,
        amount: u64,
        cap: u64,
        _witness: &TransferCapability,
    ) -> Result<(), LedgerError> {
        let source = overlay.balance(storage, from).await?;
        if source < amount {
            return Err(LedgerError::InsufficientBalance);
        }

        // Pre-debit read: a self-transfer at the cap fails here even though
        // its net effect would be zero
        let target = overlay.balance(storage, to).await?;
        check_cap(target, amount, cap)?;

        overlay.debit(storage, from, amount).await?;
        overlay.credit(storage, to, amount).await
    }

    /// Stage a burn: debit and supply decrease. No floor above zero, the
    /// debit itself rejects underflow. Requires the burn capability.
    async fn burn_units(
        storage: &S,
        overlay: &mut BalanceOverlay,
        from: &HolderId,
        amount: u64,
        _witness: &BurnCapability,
    ) -> Result<(), LedgerError> {
        overlay.debit(storage, from, amount).await?;
        overlay.sub_supply(storage, amount).await
    }

    /// Mint `amount` new units to `to`. Administrator only.
    ///
    /// Minting zero units is a successful no-op, the cap is still checked.
    pub async fn mint(
        &mut self,
        caller: &HolderId,
        to: &HolderId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let caps = require_admin(&self.record, &self.caps, caller)?;

        let mut overlay = BalanceOverlay::new();
        Self::mint_units(
            &self.storage,
            &mut overlay,
            to,
            amount,
            self.record.holder_cap(),
            caps.mint(),
        )
        .await?;
        overlay.commit(&mut self.storage).await?;

        debug!("minted {} to {}", amount, to);
        Ok(())
    }

    /// Move `amount` units from `from` to `to`. Administrator only: this is
    /// an operator-style transfer, the source holder is not consulted.
    pub async fn transfer(
        &mut self,
        caller: &HolderId,
        from: &HolderId,
        to: &HolderId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let caps = require_admin(&self.record, &self.caps, caller)?;

        let mut overlay = BalanceOverlay::new();
        Self::move_units(
            &self.storage,
            &mut overlay,
            from,
            to,
            amount,
            self.record.holder_cap(),
            caps.transfer(),
        )
        .await?;
        overlay.commit(&mut self.storage).await?;

        debug!("transferred {} from {} to {}", amount, from, to);
        Ok(())
    }

    /// Destroy `amount` units held by `from`. Administrator only.
    pub async fn burn(
        &mut self,
        caller: &HolderId,
        from: &HolderId,
        amount: u64,
    ) -> Result<(), LedgerError> {
        let caps = require_admin(&self.record, &self.caps, caller)?;

        let mut overlay = BalanceOverlay::new();
        Self::burn_units(&self.storage, &mut overlay, from, amount, caps.burn()).await?;
        overlay.commit(&mut self.storage).await?;

        debug!("burned {} from {}", amount, from);
        Ok(())
    }

    /// Overwrite both feature gates. Administrator only, unconditional: no
    /// transition rules between states.
    pub fn set_features(
        &mut self,
        caller: &HolderId,
        airdrop_enabled: bool,
        whitelist_enabled: bool,
    ) -> Result<(), LedgerError> {
        require_admin(&self.record, &self.caps, caller)?;
        self.features = FeatureState::new(airdrop_enabled, whitelist_enabled);
        debug!(
            "features set: airdrop={}, whitelist={}",
            airdrop_enabled, whitelist_enabled
        );
        Ok(())
    }

    /// Read both feature gates. Administrator only.
    pub fn get_features(&self, caller: &HolderId) -> Result<FeatureState, LedgerError> {
        require_admin(&self.record, &self.caps, caller)?;
        Ok(self.features)
    }

    /// Check whitelist membership of a holder. Administrator only.
    pub fn is_whitelisted(
        &self,
        caller: &HolderId,
        holder: &HolderId,
    ) -> Result<bool, LedgerError> {
        require_admin(&self.record, &self.caps, caller)?;
        Ok(self.whitelist.contains(holder))
    }

    /// Add or remove a batch of whitelist members, all-or-nothing.
    ///
    /// Administrator only, and gated on the whitelist feature: mutations are
    /// rejected while the gate is down even though the registry content is
    /// retained across gate flips.
    pub fn update_whitelist(
        &mut self,
        caller: &HolderId,
        holders: &[HolderId],
        add: bool,
    ) -> Result<(), LedgerError> {
        require_admin(&self.record, &self.caps, caller)?;

        if !self.features.whitelist_enabled {
            return Err(LedgerError::FeatureInactive(Feature::Whitelist));
        }

        if add {
            self.whitelist.add_many(holders)
        } else {
            self.whitelist.remove_many(holders)
        }
    }

    /// Balance of a holder. Open read; absent holders read as zero.
    pub async fn balance(&self, holder: &HolderId) -> Result<u64, LedgerError> {
        self.storage.get_balance(holder).await
    }

    /// Circulating supply (total minted minus total burned). Open read.
    pub async fn supply(&self) -> Result<u64, LedgerError> {
        self.storage.get_supply().await
    }

    /// The asset record. Open read.
    pub fn metadata(&self) -> &AssetRecord {
        &self.record
    }

    /// Direct store access for embedders and tests
    pub fn storage(&self) -> &S {
        &self.storage
    }
}
