use serde::{Deserialize, Serialize};

/// Configuration for MorphoClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MorphoClientConfig {
    /// GraphQL endpoint URL, e.g. "https://blue-api.morpho.org/graphql"
    pub endpoint: String,
    /// Vault contract address (0x-prefixed)
    pub vault_address: String,
    /// Unique key of the paired lending market
    pub market_id: String,
}
