//! Fetch-and-render orchestration for the vault/pool monitor.

use anyhow::{Context, Result};
use curve::CurveClient;
use morpho::MorphoClient;
use tracing::info;

use crate::config::VaultWatchConfig;
use crate::message::{pool_message, vault_message};
use crate::pool::derive_pool_metrics;
use crate::vault::derive_vault_metrics;

/// Vault/pool monitor: turns one round of API fetches into ready-to-send
/// Telegram messages. Holds no mutable state between rounds.
pub struct VaultWatch {
    morpho: MorphoClient,
    curve: CurveClient,
    config: VaultWatchConfig,
}

impl VaultWatch {
    pub fn new(config: VaultWatchConfig, morpho: MorphoClient, curve: CurveClient) -> Self {
        Self {
            morpho,
            curve,
            config,
        }
    }

    /// Fetches vault and market state and renders the vault message.
    pub async fn vault_report(&self) -> Result<String> {
        let data = self.morpho.fetch_monitor_data().await?;
        let metrics = derive_vault_metrics(&data, &self.config)?;
        info!(
            total_assets = metrics.total_assets,
            total_assets_usd = metrics.total_assets_usd,
            net_apy = metrics.net_apy,
            "vault metrics derived"
        );
        Ok(vault_message(&metrics, &self.config, &utils::utc_stamp()))
    }

    /// Fetches pool detail and the gauge listing concurrently and renders
    /// the pool message.
    pub async fn pool_report(&self) -> Result<String> {
        let (detail, gauges) = tokio::join!(
            self.curve.pool_detail(&self.config.pool_address),
            self.curve.gauges()
        );
        let detail = detail.context("pool detail fetch failed")?;
        let gauges = gauges.context("gauge listing fetch failed")?;
        let metrics = derive_pool_metrics(&detail, &gauges, &self.config.pool_address)?;
        info!(
            tvl_usd = metrics.tvl_usd,
            total_apr = metrics.total_apr,
            "pool metrics derived"
        );
        Ok(pool_message(&metrics, &utils::utc_stamp()))
    }
}
