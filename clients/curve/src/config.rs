use serde::{Deserialize, Serialize};

/// Configuration for CurveClient
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurveClientConfig {
    /// Base URL for API endpoints, e.g. "https://api.curve.finance"
    pub base_url: String,
}
