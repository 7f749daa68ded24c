use serde::Deserialize;

/// Current state of a single liquidity pool.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolDetail {
    pub name: String,
    /// Total value locked in USD
    pub usd_total: f64,
    /// Stable-pool accounting price as a fixed-point integer string (18 decimals)
    pub virtual_price: String,
    pub coins: Vec<PoolCoin>,
    pub volume_usd_24h: f64,
    pub fees_usd_24h: f64,
    /// Trading-fee APR over the last day, already scaled 0-100
    pub daily_fee_apr: f64,
    /// Trading-fee APR over the last week, already scaled 0-100
    pub weekly_fee_apr: f64,
}

/// One side of a pool's balances.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolCoin {
    pub symbol: String,
    /// Balance as a fixed-point integer string
    pub pool_balance: String,
    pub decimals: u32,
}

/// One gauge from the listing endpoint; matched to a pool via `swap`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GaugeEntry {
    /// Address of the pool this gauge pays rewards to
    pub swap: String,
    /// CRV emission APY as a `[min, max]` boost range, already scaled 0-100
    #[serde(default)]
    pub gauge_crv_apy: Option<[Option<f64>; 2]>,
    /// Non-CRV reward programs on this gauge
    #[serde(default)]
    pub extra_rewards: Vec<ExtraReward>,
}

/// One itemized non-CRV reward program.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraReward {
    pub symbol: String,
    /// Annualized yield, already scaled 0-100
    pub apy: f64,
}
