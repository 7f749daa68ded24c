mod client;
mod config;
mod types;

pub use client::MorphoClient;
pub use config::MorphoClientConfig;
pub use types::{
    AssetRef, BigIntPoint, FloatPoint, MarketData, MarketHistory, MarketState, MonitorData,
    RewardEntry, VaultData, VaultHistory,
};
