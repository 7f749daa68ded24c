//! Configuration types for the vault/pool monitor.

/// Configuration for VaultWatch (parameters only; clients are passed to
/// `VaultWatch::new`).
#[derive(Debug, Clone)]
pub struct VaultWatchConfig {
    /// Symbol of the vault's deposit asset (e.g. "USDS")
    pub asset_symbol: String,
    /// Decimal places of the deposit asset's fixed-point amounts
    pub asset_decimals: u32,
    /// Display label for the paired lending market (e.g. "stUSDS/USDS")
    pub market_label: String,
    /// Address of the paired Curve liquidity pool
    pub pool_address: String,
}
