//! Configuration types for the peg monitor.

/// One monitored pool. The list is plain data handed to the aggregation
/// routine, so tests can run against synthetic pool sets.
#[derive(Debug, Clone)]
pub struct PegPoolConfig {
    /// Display name used in messages and logs
    pub name: String,
    /// On-chain pool address
    pub address: String,
    /// Metapools get a balance-composition breakdown from the pool API
    pub is_metapool: bool,
}

/// Configuration for PegWatch (parameters only; clients are passed to
/// `PegWatch::new`).
#[derive(Debug, Clone)]
pub struct PegWatchConfig {
    /// Symbol of the asset whose peg is monitored (e.g. "USDS")
    pub reference_symbol: String,
    /// On-chain address of the reference asset
    pub reference_address: String,
    pub pools: Vec<PegPoolConfig>,
}
