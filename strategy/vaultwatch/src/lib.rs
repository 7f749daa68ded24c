//! Vault and pool monitoring strategy.
//!
//! Derives deposit, APY and liquidity metrics from the Morpho lending API
//! and fee/reward metrics from the Curve pool APIs, and renders them as
//! Telegram messages.

pub mod config;
mod message;
mod pool;
mod types;
mod vault;
mod watch;

pub use config::VaultWatchConfig;
pub use message::{pool_message, vault_message};
pub use pool::derive_pool_metrics;
pub use types::{MarketMetrics, PoolMetrics, RewardApy, TokenShare, VaultMetrics, WindowSet};
pub use vault::derive_vault_metrics;
pub use watch::VaultWatch;
