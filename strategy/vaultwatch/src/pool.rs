//! Liquidity-pool metric derivation from Curve API responses.

use std::collections::HashMap;

use anyhow::{Context, Result};
use curve::{GaugeEntry, PoolDetail};
use utils::from_fixed_point;

use crate::types::{PoolMetrics, RewardApy, TokenShare};

const VIRTUAL_PRICE_DECIMALS: u32 = 18;

/// Derives pool metrics from the pool detail and the gauge listing.
///
/// Gauge rewards are additive: total APR is the daily fee APR plus the
/// maximum of the CRV boost range plus every extra reward. A pool with no
/// gauge simply contributes zero reward yield.
pub fn derive_pool_metrics(
    detail: &PoolDetail,
    gauges: &HashMap<String, GaugeEntry>,
    pool_address: &str,
) -> Result<PoolMetrics> {
    let mut composition: Vec<TokenShare> = Vec::with_capacity(detail.coins.len());
    for coin in &detail.coins {
        let amount = from_fixed_point(&coin.pool_balance, coin.decimals)
            .with_context(|| format!("failed to convert balance of {}", coin.symbol))?;
        composition.push(TokenShare {
            symbol: coin.symbol.clone(),
            amount,
            share: 0.0,
        });
    }
    let total_balance: f64 = composition.iter().map(|t| t.amount).sum();
    if total_balance > 0.0 {
        for token in &mut composition {
            token.share = token.amount / total_balance;
        }
    }

    let virtual_price = from_fixed_point(&detail.virtual_price, VIRTUAL_PRICE_DECIMALS)
        .context("failed to convert virtual price")?;

    // Provider APRs arrive scaled 0-100; fractions from here on.
    let daily_fee_apr = detail.daily_fee_apr / 100.0;
    let weekly_fee_apr = detail.weekly_fee_apr / 100.0;

    let gauge = gauges
        .values()
        .find(|g| g.swap.eq_ignore_ascii_case(pool_address));
    let crv_apy_range = gauge.and_then(|g| g.gauge_crv_apy).map(|[min, max]| {
        (
            min.unwrap_or(0.0) / 100.0,
            max.unwrap_or(0.0) / 100.0,
        )
    });
    let extra_rewards: Vec<RewardApy> = gauge
        .map(|g| {
            g.extra_rewards
                .iter()
                .map(|r| RewardApy {
                    symbol: r.symbol.clone(),
                    apr: r.apy / 100.0,
                })
                .collect()
        })
        .unwrap_or_default();

    // Only the boosted maximum enters the total; the range itself is
    // rendered verbatim.
    let crv_max = crv_apy_range.map_or(0.0, |(_, max)| max);
    let extras_sum: f64 = extra_rewards.iter().map(|r| r.apr).sum();
    let total_apr = daily_fee_apr + crv_max + extras_sum;

    Ok(PoolMetrics {
        name: detail.name.clone(),
        tvl_usd: detail.usd_total,
        volume_24h_usd: detail.volume_usd_24h,
        fees_24h_usd: detail.fees_usd_24h,
        daily_fee_apr,
        weekly_fee_apr,
        virtual_price,
        composition,
        crv_apy_range,
        extra_rewards,
        total_apr,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve::{ExtraReward, PoolCoin};

    const POOL: &str = "0xAbC0000000000000000000000000000000000001";

    fn detail() -> PoolDetail {
        PoolDetail {
            name: "USDS/USDC".to_string(),
            usd_total: 12_400_000.0,
            virtual_price: "1002300000000000000".to_string(),
            coins: vec![
                PoolCoin {
                    symbol: "USDS".to_string(),
                    pool_balance: "6000000000000000000000000".to_string(),
                    decimals: 18,
                },
                PoolCoin {
                    symbol: "USDC".to_string(),
                    pool_balance: "6400000000000".to_string(),
                    decimals: 6,
                },
            ],
            volume_usd_24h: 1_234_567.89,
            fees_usd_24h: 1_234.56,
            daily_fee_apr: 1.23,
            weekly_fee_apr: 1.10,
        }
    }

    fn gauges() -> HashMap<String, GaugeEntry> {
        HashMap::from([(
            "usds-usdc".to_string(),
            GaugeEntry {
                // Lowercased on purpose: matching is case-insensitive.
                swap: POOL.to_ascii_lowercase(),
                gauge_crv_apy: Some([Some(0.5), Some(1.25)]),
                extra_rewards: vec![ExtraReward {
                    symbol: "SKY".to_string(),
                    apy: 2.0,
                }],
            },
        )])
    }

    #[test]
    fn composition_shares_sum_to_one() {
        let m = derive_pool_metrics(&detail(), &gauges(), POOL).unwrap();
        assert_eq!(m.composition.len(), 2);
        let total: f64 = m.composition.iter().map(|t| t.share).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert!((m.composition[0].share - 6_000_000.0 / 12_400_000.0).abs() < 1e-12);
    }

    #[test]
    fn gauge_rewards_fold_max_of_range_into_total() {
        let m = derive_pool_metrics(&detail(), &gauges(), POOL).unwrap();
        assert_eq!(m.crv_apy_range, Some((0.005, 0.0125)));
        assert_eq!(m.extra_rewards[0].apr, 0.02);
        // daily fee 1.23% + max CRV 1.25% + SKY 2.00%
        assert!((m.total_apr - 0.0448).abs() < 1e-12);
    }

    #[test]
    fn pool_without_gauge_has_zero_reward_yield() {
        let m = derive_pool_metrics(&detail(), &HashMap::new(), POOL).unwrap();
        assert_eq!(m.crv_apy_range, None);
        assert!(m.extra_rewards.is_empty());
        assert!((m.total_apr - 0.0123).abs() < 1e-12);
    }

    #[test]
    fn virtual_price_is_fixed_point_converted() {
        let m = derive_pool_metrics(&detail(), &gauges(), POOL).unwrap();
        assert_eq!(m.virtual_price, 1.0023);
    }

    #[test]
    fn empty_pool_has_zero_shares() {
        let mut d = detail();
        for coin in &mut d.coins {
            coin.pool_balance = "0".to_string();
        }
        let m = derive_pool_metrics(&d, &HashMap::new(), POOL).unwrap();
        assert!(m.composition.iter().all(|t| t.share == 0.0));
    }
}
