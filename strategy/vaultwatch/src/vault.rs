//! Vault and market metric derivation from Morpho API responses.

use anyhow::{Context, Result};
use morpho::{BigIntPoint, FloatPoint, MarketData, MonitorData};
use utils::{from_fixed_point, window_average, window_delta, SeriesPoint};

use crate::config::VaultWatchConfig;
use crate::types::{MarketMetrics, RewardApy, VaultMetrics, WindowSet};

/// Derives all vault (and, when present, market) metrics from one
/// monitoring response.
///
/// The market section is optional: a response without it still yields
/// complete vault metrics. A missing vault section is an error.
pub fn derive_vault_metrics(data: &MonitorData, config: &VaultWatchConfig) -> Result<VaultMetrics> {
    let vault = data
        .vault
        .as_ref()
        .context("vault missing from Morpho response")?;

    let total_assets = from_fixed_point(&vault.total_assets, config.asset_decimals)
        .context("failed to convert vault totalAssets")?;

    let hist = &vault.historical_state;
    let assets_delta = WindowSet {
        h1: window_delta(
            total_assets,
            &amount_series(&hist.assets_1h, config.asset_decimals)?,
        ),
        h12: window_delta(
            total_assets,
            &amount_series(&hist.assets_12h, config.asset_decimals)?,
        ),
        h24: window_delta(
            total_assets,
            &amount_series(&hist.assets_24h, config.asset_decimals)?,
        ),
    };
    let net_apy_avg = WindowSet {
        h1: window_average(&rate_series(&hist.net_apy_1h)),
        h12: window_average(&rate_series(&hist.net_apy_12h)),
        h24: window_average(&rate_series(&hist.net_apy_24h)),
    };

    let rewards: Vec<RewardApy> = vault
        .rewards
        .iter()
        .map(|r| RewardApy {
            symbol: r.asset.symbol.clone(),
            apr: r.supply_apr,
        })
        .collect();
    let rewards_apy = rewards.iter().map(|r| r.apr).sum();

    let market = match &data.market {
        Some(market) => derive_market_metrics(market, config)?,
        None => None,
    };

    Ok(VaultMetrics {
        name: vault.name.clone(),
        total_assets,
        total_assets_usd: vault.total_assets_usd,
        native_apy: vault.avg_apy,
        rewards,
        rewards_apy,
        net_apy: vault.avg_net_apy,
        assets_delta,
        net_apy_avg,
        market,
    })
}

fn derive_market_metrics(
    market: &MarketData,
    config: &VaultWatchConfig,
) -> Result<Option<MarketMetrics>> {
    let state = match &market.state {
        Some(state) => state,
        None => return Ok(None),
    };
    let liquidity_assets = from_fixed_point(&state.liquidity_assets, config.asset_decimals)
        .context("failed to convert market liquidityAssets")?;

    let borrow_apy_avg = match &market.historical_state {
        Some(hist) => WindowSet {
            h1: window_average(&rate_series(&hist.borrow_apy_1h)),
            h12: window_average(&rate_series(&hist.borrow_apy_12h)),
            h24: window_average(&rate_series(&hist.borrow_apy_24h)),
        },
        None => WindowSet {
            h1: None,
            h12: None,
            h24: None,
        },
    };

    Ok(Some(MarketMetrics {
        utilization: state.utilization,
        liquidity_assets,
        liquidity_usd: state.total_liquidity_usd,
        borrow_apy: state.avg_borrow_apy,
        borrow_apy_avg,
    }))
}

/// Maps fixed-point history points into the internal series representation.
/// An invalid amount string anywhere in the series is a fatal parse error.
fn amount_series(points: &[BigIntPoint], decimals: u32) -> Result<Vec<SeriesPoint>> {
    points
        .iter()
        .map(|p| {
            let value = p
                .y
                .as_deref()
                .map(|y| from_fixed_point(y, decimals))
                .transpose()?;
            Ok(SeriesPoint::new(p.x, value))
        })
        .collect()
}

fn rate_series(points: &[FloatPoint]) -> Vec<SeriesPoint> {
    points.iter().map(|p| SeriesPoint::new(p.x, p.y)).collect()
}
