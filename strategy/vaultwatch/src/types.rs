//! Derived metric types for the vault/pool monitor.

use utils::Delta;

/// One value per standard history window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowSet<T> {
    pub h1: T,
    pub h12: T,
    pub h24: T,
}

/// One reward-program contribution, as a fraction (0-1).
#[derive(Debug, Clone, PartialEq)]
pub struct RewardApy {
    pub symbol: String,
    pub apr: f64,
}

/// Fully-derived vault metrics, ready for rendering.
#[derive(Debug, Clone)]
pub struct VaultMetrics {
    pub name: String,
    /// Total deposits in deposit-asset units
    pub total_assets: f64,
    pub total_assets_usd: f64,
    /// Native lending APY, fraction
    pub native_apy: f64,
    /// Itemized reward programs; empty when none are active
    pub rewards: Vec<RewardApy>,
    /// Sum of all reward APRs, fraction
    pub rewards_apy: f64,
    /// Net APY including rewards, fraction
    pub net_apy: f64,
    /// Deposit change per window; `None` = no data
    pub assets_delta: WindowSet<Option<Delta>>,
    /// Smoothed net APY per window; `None` = no data
    pub net_apy_avg: WindowSet<Option<f64>>,
    /// Paired market metrics, when the market was present in the response
    pub market: Option<MarketMetrics>,
}

/// Fully-derived lending-market metrics.
#[derive(Debug, Clone)]
pub struct MarketMetrics {
    /// Borrowed share of supplied liquidity, fraction
    pub utilization: f64,
    /// Available liquidity in deposit-asset units
    pub liquidity_assets: f64,
    pub liquidity_usd: f64,
    /// Borrow APY, fraction
    pub borrow_apy: f64,
    /// Smoothed borrow APY per window; `None` = no data
    pub borrow_apy_avg: WindowSet<Option<f64>>,
}

/// One token's share of a pool's balances.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenShare {
    pub symbol: String,
    /// Balance in token units
    pub amount: f64,
    /// Share of the pool's total balances, fraction
    pub share: f64,
}

/// Fully-derived liquidity-pool metrics.
#[derive(Debug, Clone)]
pub struct PoolMetrics {
    pub name: String,
    pub tvl_usd: f64,
    pub volume_24h_usd: f64,
    pub fees_24h_usd: f64,
    /// Trading-fee APR over the last day, fraction
    pub daily_fee_apr: f64,
    /// Trading-fee APR over the last week, fraction
    pub weekly_fee_apr: f64,
    /// Stable-pool accounting price
    pub virtual_price: f64,
    pub composition: Vec<TokenShare>,
    /// CRV emission APY `(min, max)` boost range, fractions
    pub crv_apy_range: Option<(f64, f64)>,
    /// Itemized non-CRV reward programs
    pub extra_rewards: Vec<RewardApy>,
    /// Daily fee APR + max CRV APY + sum of extra rewards, fraction
    pub total_apr: f64,
}
