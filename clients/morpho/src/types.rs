use serde::Deserialize;

/// One sample of a big-integer time series (fixed-point token amounts).
/// `y` is absent when the bucket has no completed value yet.
#[derive(Debug, Clone, Deserialize)]
pub struct BigIntPoint {
    pub x: i64,
    pub y: Option<String>,
}

/// One sample of a float time series (rates and ratios).
#[derive(Debug, Clone, Deserialize)]
pub struct FloatPoint {
    pub x: i64,
    pub y: Option<f64>,
}

/// Combined vault + market payload of the monitoring query.
#[derive(Debug, Clone, Deserialize)]
pub struct MonitorData {
    pub vault: Option<VaultData>,
    pub market: Option<MarketData>,
}

/// Current vault state plus historical windows from the Morpho API.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultData {
    pub name: String,
    /// Total deposited assets as a fixed-point integer string (18 decimals)
    pub total_assets: String,
    pub total_assets_usd: f64,
    /// Native lending APY, as a fraction (0-1)
    pub avg_apy: f64,
    /// Net APY including rewards, as a fraction (0-1)
    pub avg_net_apy: f64,
    #[serde(default)]
    pub rewards: Vec<RewardEntry>,
    pub historical_state: VaultHistory,
}

/// One reward-program contribution to the vault supply APY.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RewardEntry {
    /// Annualized reward rate, as a fraction (0-1)
    pub supply_apr: f64,
    pub asset: AssetRef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AssetRef {
    pub symbol: String,
}

/// Historical vault series, newest-first, for the three standard windows.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VaultHistory {
    #[serde(default)]
    pub assets_1h: Vec<BigIntPoint>,
    #[serde(default)]
    pub assets_12h: Vec<BigIntPoint>,
    #[serde(default)]
    pub assets_24h: Vec<BigIntPoint>,
    #[serde(default)]
    pub net_apy_1h: Vec<FloatPoint>,
    #[serde(default)]
    pub net_apy_12h: Vec<FloatPoint>,
    #[serde(default)]
    pub net_apy_24h: Vec<FloatPoint>,
}

/// Paired lending-market state. Optional in the response; the vault
/// message simply omits the market block when it is missing.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketData {
    pub state: Option<MarketState>,
    pub historical_state: Option<MarketHistory>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketState {
    /// Borrowed share of supplied liquidity, as a fraction (0-1)
    pub utilization: f64,
    /// Available liquidity as a fixed-point integer string (18 decimals)
    pub liquidity_assets: String,
    pub total_liquidity_usd: f64,
    /// Borrow APY, as a fraction (0-1)
    pub avg_borrow_apy: f64,
}

/// Historical borrow-APY series, newest-first.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketHistory {
    #[serde(default)]
    pub borrow_apy_1h: Vec<FloatPoint>,
    #[serde(default)]
    pub borrow_apy_12h: Vec<FloatPoint>,
    #[serde(default)]
    pub borrow_apy_24h: Vec<FloatPoint>,
}
