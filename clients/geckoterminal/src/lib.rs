mod client;
mod config;
mod types;

pub use client::GeckoTerminalClient;
pub use config::GeckoTerminalClientConfig;
pub use types::{PoolAttributes, PoolRelationships, PoolResource, TokenRef, TokenRel, VolumeUsd};
