pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ===== ASSET METADATA LIMITS =====

// Maximum length of the asset name in bytes
pub const MAX_NAME_LENGTH: usize = 64;
// Maximum length of the asset ticker symbol in bytes
pub const MAX_SYMBOL_LENGTH: usize = 12;

// ===== REFERENCE CONFIGURATION =====

// No holder may ever hold more than this many units in the reference
// configuration. Embedders can raise or lower the cap at initialization,
// but it stays immutable for the lifetime of the asset.
pub const DEFAULT_HOLDER_CAP: u64 = 100;

// Display identity of the reference asset
pub const DEFAULT_ASSET_NAME: &str = "Scrip Credit";
pub const DEFAULT_ASSET_SYMBOL: &str = "SCRIP";
