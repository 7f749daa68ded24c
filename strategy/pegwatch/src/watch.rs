//! Fetch-and-render orchestration for the peg monitor.

use anyhow::{Context, Result};
use curve::CurveClient;
use geckoterminal::GeckoTerminalClient;
use tracing::info;

use crate::config::PegWatchConfig;
use crate::message::peg_message;
use crate::peg::{apply_composition, resolve_pools, vwap};

/// Peg monitor: one aggregator batch lookup, optional composition
/// enrichment, one message. Holds no mutable state between rounds.
pub struct PegWatch {
    geckoterminal: GeckoTerminalClient,
    curve: CurveClient,
    config: PegWatchConfig,
}

impl PegWatch {
    pub fn new(
        config: PegWatchConfig,
        geckoterminal: GeckoTerminalClient,
        curve: CurveClient,
    ) -> Self {
        Self {
            geckoterminal,
            curve,
            config,
        }
    }

    /// Fetches all configured pools, derives peg metrics and renders the
    /// peg message.
    ///
    /// The aggregator is the required source; the pool API only enriches
    /// metapools with a balance breakdown, and its failure downgrades the
    /// report instead of aborting it.
    pub async fn report(&self) -> Result<String> {
        let addresses: Vec<&str> = self.config.pools.iter().map(|p| p.address.as_str()).collect();
        let resources = self.geckoterminal.pools(&addresses).await?;
        let mut reports = resolve_pools(&resources, &self.config)?;

        for pool in self.config.pools.iter().filter(|p| p.is_metapool) {
            let Some(report) = reports.iter_mut().find(|r| r.name == pool.name) else {
                continue;
            };
            apply_composition(report, self.curve.pool_detail(&pool.address).await);
        }

        let vwap = vwap(&reports).context("no pools resolved")?;
        info!(pools = reports.len(), vwap, "peg metrics derived");
        Ok(peg_message(
            &reports,
            vwap,
            &self.config.reference_symbol,
            &utils::utc_stamp(),
        ))
    }
}
