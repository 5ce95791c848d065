//! Capability witnesses guarding supply operations.
//!
//! Mint, transfer and burn power is modeled as witness types that cannot be
//! forged outside this crate: they have a private field, no `Clone` and no
//! constructor besides [`CapabilitySet::forge`], which runs exactly once when
//! the asset record is created. Holding `&self` on the set is the only way to
//! reach a witness, and every balance mutation takes one by reference, so the
//! type system ties supply changes to the authorization guard.

/// Grants the power to create new units
#[derive(Debug)]
pub struct MintCapability {
    _seal: (),
}

/// Grants the power to move units between holders
#[derive(Debug)]
pub struct TransferCapability {
    _seal: (),
}

/// Grants the power to destroy units
#[derive(Debug)]
pub struct BurnCapability {
    _seal: (),
}

/// Full set of capabilities held by the ledger service on behalf of the
/// administrator for the lifetime of the asset
#[derive(Debug)]
pub struct CapabilitySet {
    mint: MintCapability,
    transfer: TransferCapability,
    burn: BurnCapability,
}

impl CapabilitySet {
    /// Forge the capability set. Runs once, at asset creation.
    pub(crate) fn forge() -> Self {
        Self {
            mint: MintCapability { _seal: () },
            transfer: TransferCapability { _seal: () },
            burn: BurnCapability { _seal: () },
        }
    }

    pub fn mint(&self) -> &MintCapability {
        &self.mint
    }

    pub fn transfer(&self) -> &TransferCapability {
        &self.transfer
    }

    pub fn burn(&self) -> &BurnCapability {
        &self.burn
    }
}
