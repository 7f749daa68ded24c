//! Peg-deviation monitoring strategy.
//!
//! Resolves the reference asset's market price in each configured pool
//! from an aggregator API, computes per-pool deviation from the 1.00 peg
//! and an aggregate volume-weighted price, and renders one Telegram
//! message.

pub mod config;
mod message;
mod peg;
mod types;
mod watch;

pub use config::{PegPoolConfig, PegWatchConfig};
pub use message::peg_message;
pub use peg::{apply_composition, balance_composition, resolve_pools, vwap};
pub use types::{BalanceShare, PegPoolReport};
pub use watch::PegWatch;
