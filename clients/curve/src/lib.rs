mod client;
mod config;
mod types;

pub use client::CurveClient;
pub use config::CurveClientConfig;
pub use types::{ExtraReward, GaugeEntry, PoolCoin, PoolDetail};
