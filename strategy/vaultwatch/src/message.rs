//! Telegram message rendering for vault and pool metrics.
//!
//! Pure functions: given the same metrics and timestamp they produce
//! byte-identical text.

use utils::{format_delta, format_money, format_pct, format_pct_opt};

use crate::config::VaultWatchConfig;
use crate::types::{PoolMetrics, VaultMetrics, WindowSet};

fn window_line<T: Copy, F: Fn(T) -> String>(set: &WindowSet<T>, render: F) -> String {
    format!(
        "1h {} | 12h {} | 24h {}",
        render(set.h1),
        render(set.h12),
        render(set.h24)
    )
}

/// Renders the vault message in Telegram Markdown.
pub fn vault_message(m: &VaultMetrics, config: &VaultWatchConfig, stamp: &str) -> String {
    let sym = &config.asset_symbol;
    let mut parts = vec![
        "*Morpho Vault Monitor*".to_string(),
        String::new(),
        format!("*{}*", m.name),
        String::new(),
        format!(
            "*Total Deposits:* {} {} (${})",
            format_money(m.total_assets),
            sym,
            format_money(m.total_assets_usd)
        ),
        format!("  1h: {}", format_delta(m.assets_delta.h1)),
        format!("  12h: {}", format_delta(m.assets_delta.h12)),
        format!("  24h: {}", format_delta(m.assets_delta.h24)),
        String::new(),
        "*APY Breakdown:*".to_string(),
        format!("  Native APY: {}", format_pct(m.native_apy)),
        rewards_line(m),
        format!("  *Total APY: {}*", format_pct(m.net_apy)),
        format!(
            "  Avg Net APY: {}",
            window_line(&m.net_apy_avg, format_pct_opt)
        ),
    ];

    if let Some(market) = &m.market {
        parts.extend([
            String::new(),
            format!("*{} Market:*", config.market_label),
            format!("  Utilization: {}", format_pct(market.utilization)),
            format!(
                "  Liquidity: {} {} (${})",
                format_money(market.liquidity_assets),
                sym,
                format_money(market.liquidity_usd)
            ),
            format!("  Borrow Rate: {}", format_pct(market.borrow_apy)),
            format!(
                "  Avg Borrow APY: {}",
                window_line(&market.borrow_apy_avg, format_pct_opt)
            ),
        ]);
    }

    parts.extend([String::new(), format!("_{}_", stamp)]);
    parts.join("\n")
}

/// An empty reward category renders as "None", never as "0.00%".
fn rewards_line(m: &VaultMetrics) -> String {
    if m.rewards.is_empty() {
        return "  Rewards APY: None".to_string();
    }
    let items: Vec<String> = m
        .rewards
        .iter()
        .map(|r| format!("{} {}", r.symbol, format_pct(r.apr)))
        .collect();
    format!(
        "  Rewards APY: {} ({})",
        format_pct(m.rewards_apy),
        items.join(", ")
    )
}

/// Renders the pool message in Telegram Markdown.
pub fn pool_message(m: &PoolMetrics, stamp: &str) -> String {
    let mut parts = vec![
        "*Curve Pool Monitor*".to_string(),
        String::new(),
        format!("*{}*", m.name),
        String::new(),
        format!("*TVL:* ${}", format_money(m.tvl_usd)),
        "*Composition:*".to_string(),
    ];
    for token in &m.composition {
        parts.push(format!(
            "  {}: {} ({})",
            token.symbol,
            format_money(token.amount),
            format_pct(token.share)
        ));
    }
    parts.extend([
        String::new(),
        format!("*Volume (24h):* ${}", format_money(m.volume_24h_usd)),
        format!("*Fees (24h):* ${}", format_money(m.fees_24h_usd)),
        format!("*Virtual Price:* {:.4}", m.virtual_price),
        String::new(),
        "*Rewards:*".to_string(),
        format!(
            "  Fee APR: daily {} | weekly {}",
            format_pct(m.daily_fee_apr),
            format_pct(m.weekly_fee_apr)
        ),
    ]);

    if m.crv_apy_range.is_none() && m.extra_rewards.is_empty() {
        parts.push("  Gauge Rewards: None".to_string());
    } else {
        if let Some((min, max)) = m.crv_apy_range {
            parts.push(format!(
                "  CRV APY: {} - {}",
                format_pct(min),
                format_pct(max)
            ));
        }
        for reward in &m.extra_rewards {
            parts.push(format!("  {}: {}", reward.symbol, format_pct(reward.apr)));
        }
    }
    parts.push(format!("  *Total APR: {}*", format_pct(m.total_apr)));

    parts.extend([String::new(), format!("_{}_", stamp)]);
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{MarketMetrics, RewardApy, TokenShare};
    use utils::Delta;

    fn no_windows<T: Copy>(value: T) -> WindowSet<T> {
        WindowSet {
            h1: value,
            h12: value,
            h24: value,
        }
    }

    fn config() -> VaultWatchConfig {
        VaultWatchConfig {
            asset_symbol: "USDS".to_string(),
            asset_decimals: 18,
            market_label: "stUSDS/USDS".to_string(),
            pool_address: "0xpool".to_string(),
        }
    }

    fn vault_metrics() -> VaultMetrics {
        VaultMetrics {
            name: "USDS Risk Capital".to_string(),
            total_assets: 3_987_844.23,
            total_assets_usd: 3_987_911.12,
            native_apy: 0.0412,
            rewards: vec![RewardApy {
                symbol: "SKY".to_string(),
                apr: 0.0133,
            }],
            rewards_apy: 0.0133,
            net_apy: 0.0545,
            assets_delta: WindowSet {
                h1: Some(Delta {
                    absolute: 7_844.23,
                    relative: 0.00197,
                }),
                h12: None,
                h24: None,
            },
            net_apy_avg: no_windows(None),
            market: None,
        }
    }

    #[test]
    fn vault_message_layout() {
        let msg = vault_message(&vault_metrics(), &config(), "2026-08-30 12:00 UTC");
        let expected = "\
*Morpho Vault Monitor*

*USDS Risk Capital*

*Total Deposits:* 3,987,844.23 USDS ($3,987,911.12)
  1h: +7,844.23 (+0.20%)
  12h: N/A
  24h: N/A

*APY Breakdown:*
  Native APY: 4.12%
  Rewards APY: 1.33% (SKY 1.33%)
  *Total APY: 5.45%*
  Avg Net APY: 1h N/A | 12h N/A | 24h N/A

_2026-08-30 12:00 UTC_";
        assert_eq!(msg, expected);
    }

    #[test]
    fn vault_message_includes_market_block_when_present() {
        let mut m = vault_metrics();
        m.market = Some(MarketMetrics {
            utilization: 0.812,
            liquidity_assets: 1_500_000.0,
            liquidity_usd: 1_500_300.0,
            borrow_apy: 0.061,
            borrow_apy_avg: WindowSet {
                h1: Some(0.06),
                h12: None,
                h24: None,
            },
        });
        let msg = vault_message(&m, &config(), "stamp");
        assert!(msg.contains("*stUSDS/USDS Market:*"));
        assert!(msg.contains("  Utilization: 81.20%"));
        assert!(msg.contains("  Liquidity: 1,500,000.00 USDS ($1,500,300.00)"));
        assert!(msg.contains("  Avg Borrow APY: 1h 6.00% | 12h N/A | 24h N/A"));
    }

    #[test]
    fn empty_rewards_render_as_none() {
        let mut m = vault_metrics();
        m.rewards.clear();
        m.rewards_apy = 0.0;
        let msg = vault_message(&m, &config(), "stamp");
        assert!(msg.contains("  Rewards APY: None"));
        assert!(!msg.contains("Rewards APY: 0.00%"));
    }

    fn pool_metrics() -> PoolMetrics {
        PoolMetrics {
            name: "USDS/USDC".to_string(),
            tvl_usd: 12_400_000.0,
            volume_24h_usd: 1_234_567.89,
            fees_24h_usd: 1_234.56,
            daily_fee_apr: 0.0123,
            weekly_fee_apr: 0.011,
            virtual_price: 1.0023,
            composition: vec![
                TokenShare {
                    symbol: "USDS".to_string(),
                    amount: 6_000_000.0,
                    share: 0.483_871,
                },
                TokenShare {
                    symbol: "USDC".to_string(),
                    amount: 6_400_000.0,
                    share: 0.516_129,
                },
            ],
            crv_apy_range: Some((0.005, 0.0125)),
            extra_rewards: vec![RewardApy {
                symbol: "SKY".to_string(),
                apr: 0.02,
            }],
            total_apr: 0.0448,
        }
    }

    #[test]
    fn pool_message_layout() {
        let msg = pool_message(&pool_metrics(), "2026-08-30 12:00 UTC");
        let expected = "\
*Curve Pool Monitor*

*USDS/USDC*

*TVL:* $12,400,000.00
*Composition:*
  USDS: 6,000,000.00 (48.39%)
  USDC: 6,400,000.00 (51.61%)

*Volume (24h):* $1,234,567.89
*Fees (24h):* $1,234.56
*Virtual Price:* 1.0023

*Rewards:*
  Fee APR: daily 1.23% | weekly 1.10%
  CRV APY: 0.50% - 1.25%
  SKY: 2.00%
  *Total APR: 4.48%*

_2026-08-30 12:00 UTC_";
        assert_eq!(msg, expected);
    }

    #[test]
    fn pool_without_gauge_renders_none() {
        let mut m = pool_metrics();
        m.crv_apy_range = None;
        m.extra_rewards.clear();
        m.total_apr = m.daily_fee_apr;
        let msg = pool_message(&m, "stamp");
        assert!(msg.contains("  Gauge Rewards: None"));
        assert!(!msg.contains("CRV APY"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let a = vault_message(&vault_metrics(), &config(), "stamp");
        let b = vault_message(&vault_metrics(), &config(), "stamp");
        assert_eq!(a, b);
        let c = pool_message(&pool_metrics(), "stamp");
        let d = pool_message(&pool_metrics(), "stamp");
        assert_eq!(c, d);
    }
}
