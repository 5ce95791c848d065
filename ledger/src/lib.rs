// Scrip Ledger Library
// Single-asset accounting: capped balances, capability-gated supply
// operations and whitelisted bulk distribution

pub mod capability;
pub mod ledger;
pub mod overlay;
pub mod storage;

pub use ledger::Ledger;
pub use storage::{BalanceProvider, MemoryStorage, Storage, SupplyProvider};
