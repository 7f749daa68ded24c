//! Derived metric types for the peg monitor.

/// One token's share of a pool's balances, as a fraction.
#[derive(Debug, Clone, PartialEq)]
pub struct BalanceShare {
    pub symbol: String,
    pub share: f64,
}

/// Per-pool peg data derived from the aggregator response.
#[derive(Debug, Clone)]
pub struct PegPoolReport {
    pub name: String,
    /// Reference-asset USD price in this pool
    pub price: f64,
    pub tvl_usd: f64,
    pub volume_24h_usd: f64,
    /// Balance breakdown from the secondary pool API; `None` when the
    /// source was unavailable or the pool is not enriched
    pub composition: Option<Vec<BalanceShare>>,
}
