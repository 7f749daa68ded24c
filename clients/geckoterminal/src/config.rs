use serde::{Deserialize, Serialize};

/// Configuration for GeckoTerminalClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeckoTerminalClientConfig {
    /// Base URL for API endpoints, e.g. "https://api.geckoterminal.com"
    pub base_url: String,
}
