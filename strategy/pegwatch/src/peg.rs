//! Peg-deviation derivation: reference-price resolution, VWAP aggregation
//! and balance composition.

use anyhow::{bail, Context, Result};
use curve::PoolDetail;
use geckoterminal::PoolResource;
use tracing::warn;
use utils::from_fixed_point;

use crate::config::{PegPoolConfig, PegWatchConfig};
use crate::types::{BalanceShare, PegPoolReport};

/// Resolves every configured pool against the aggregator response.
///
/// A pool absent from the response (or with unusable data) is logged and
/// skipped; the run only fails when nothing at all could be resolved.
pub fn resolve_pools(
    resources: &[PoolResource],
    config: &PegWatchConfig,
) -> Result<Vec<PegPoolReport>> {
    let mut reports = Vec::with_capacity(config.pools.len());
    for pool in &config.pools {
        let resource = resources
            .iter()
            .find(|r| r.attributes.address.eq_ignore_ascii_case(&pool.address));
        let Some(resource) = resource else {
            warn!(pool = %pool.name, "pool absent from aggregator response, skipping");
            continue;
        };
        match resolve_one(resource, pool, &config.reference_address) {
            Ok(report) => reports.push(report),
            Err(e) => warn!(pool = %pool.name, "skipping pool: {:#}", e),
        }
    }
    if reports.is_empty() {
        bail!("none of the configured pools could be resolved");
    }
    Ok(reports)
}

/// The side of the pair whose token address matches the reference asset
/// supplies the price; the other side's price is ignored.
fn resolve_one(
    resource: &PoolResource,
    pool: &PegPoolConfig,
    reference_address: &str,
) -> Result<PegPoolReport> {
    let attrs = &resource.attributes;
    let rels = &resource.relationships;

    let price_str = if rels
        .base_token
        .data
        .address()
        .eq_ignore_ascii_case(reference_address)
    {
        attrs.base_token_price_usd.as_deref()
    } else if rels
        .quote_token
        .data
        .address()
        .eq_ignore_ascii_case(reference_address)
    {
        attrs.quote_token_price_usd.as_deref()
    } else {
        bail!("reference asset is on neither side of the pair");
    };
    let price: f64 = price_str
        .context("reference-asset price missing")?
        .parse()
        .context("unparseable reference-asset price")?;

    Ok(PegPoolReport {
        name: pool.name.clone(),
        price,
        tvl_usd: parse_or_zero(attrs.reserve_in_usd.as_deref())?,
        volume_24h_usd: parse_or_zero(attrs.volume_usd.h24.as_deref())?,
        composition: None,
    })
}

fn parse_or_zero(value: Option<&str>) -> Result<f64> {
    value
        .map(|v| v.parse::<f64>().context("unparseable aggregator number"))
        .transpose()
        .map(|v| v.unwrap_or(0.0))
}

/// Volume-weighted average price across pools. Falls back to the
/// unweighted mean when total volume is zero; `None` for an empty slice.
pub fn vwap(reports: &[PegPoolReport]) -> Option<f64> {
    if reports.is_empty() {
        return None;
    }
    let total_volume: f64 = reports.iter().map(|r| r.volume_24h_usd).sum();
    if total_volume > 0.0 {
        let weighted: f64 = reports.iter().map(|r| r.price * r.volume_24h_usd).sum();
        Some(weighted / total_volume)
    } else {
        let sum: f64 = reports.iter().map(|r| r.price).sum();
        Some(sum / reports.len() as f64)
    }
}

/// Applies the metapool balance breakdown to a resolved report.
///
/// The pool API is a secondary source: a failed fetch or unusable detail
/// is logged and the report keeps its primary metrics with no breakdown
/// attached.
pub fn apply_composition(report: &mut PegPoolReport, detail: Result<PoolDetail>) {
    match detail.and_then(|d| balance_composition(&d)) {
        Ok(shares) => report.composition = Some(shares),
        Err(e) => warn!(pool = %report.name, "composition unavailable: {:#}", e),
    }
}

/// Each token's share of the pool's summed balances.
pub fn balance_composition(detail: &PoolDetail) -> Result<Vec<BalanceShare>> {
    let mut amounts = Vec::with_capacity(detail.coins.len());
    for coin in &detail.coins {
        let amount = from_fixed_point(&coin.pool_balance, coin.decimals)
            .with_context(|| format!("failed to convert balance of {}", coin.symbol))?;
        amounts.push((coin.symbol.clone(), amount));
    }
    let total: f64 = amounts.iter().map(|(_, a)| a).sum();
    Ok(amounts
        .into_iter()
        .map(|(symbol, amount)| BalanceShare {
            symbol,
            share: if total > 0.0 { amount / total } else { 0.0 },
        })
        .collect())
}
