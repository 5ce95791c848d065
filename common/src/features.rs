use serde::{Deserialize, Serialize};
use strum::Display;

/// Feature families that can be switched on or off per asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
#[strum(serialize_all = "lowercase")]
pub enum Feature {
    Airdrop,
    Whitelist,
}

/// Per-asset feature switches.
///
/// Both gates start disabled and are flipped only by the administrator.
/// Airdrops require both of them: the airdrop gate enables the operation
/// itself, the whitelist gate enables the recipient registry it reads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureState {
    pub airdrop_enabled: bool,
    pub whitelist_enabled: bool,
}

impl FeatureState {
    pub const fn new(airdrop_enabled: bool, whitelist_enabled: bool) -> Self {
        Self {
            airdrop_enabled,
            whitelist_enabled,
        }
    }

    /// State of a freshly initialized asset
    pub const fn disabled() -> Self {
        Self::new(false, false)
    }
}
