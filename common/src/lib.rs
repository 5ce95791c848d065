pub mod asset;
pub mod config;
pub mod error;
pub mod features;
pub mod holder;
pub mod whitelist;
