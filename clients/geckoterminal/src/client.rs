use anyhow::{Context, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::GeckoTerminalClientConfig;
use crate::types::PoolResource;

/// Client for the GeckoTerminal aggregator API.
pub struct GeckoTerminalClient {
    client: Client,
    base_url: Url,
}

#[derive(Deserialize)]
struct PoolsResponse {
    #[serde(default)]
    data: Vec<PoolResource>,
}

impl GeckoTerminalClient {
    pub fn new(client: Client, config: GeckoTerminalClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid GeckoTerminal base URL: {}", config.base_url))?;
        Ok(Self { client, base_url })
    }

    /// Batch lookup of pools by on-chain address. Pools unknown to the
    /// aggregator are simply absent from the result.
    pub async fn pools(&self, addresses: &[&str]) -> Result<Vec<PoolResource>> {
        let url = self
            .base_url
            .join(&format!(
                "api/v2/networks/eth/pools/multi/{}",
                addresses.join(",")
            ))
            .context("failed to build pool lookup URL")?;
        let resp: PoolsResponse = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .context("GeckoTerminal request failed")?
            .error_for_status()
            .context("GeckoTerminal returned an error status")?
            .json()
            .await
            .context("failed to decode GeckoTerminal response")?;
        Ok(resp.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pools_response_decodes() {
        let raw = r#"{
            "data": [{
                "id": "eth_0xpool",
                "attributes": {
                    "address": "0xPool0000000000000000000000000000000000aa",
                    "name": "USDS / USDC",
                    "base_token_price_usd": "0.9995",
                    "quote_token_price_usd": "1.0001",
                    "reserve_in_usd": "12345678.90",
                    "volume_usd": {"h24": "1000000.0"}
                },
                "relationships": {
                    "base_token": {"data": {"id": "eth_0xbase"}},
                    "quote_token": {"data": {"id": "eth_0xquote"}}
                }
            }]
        }"#;
        let resp: PoolsResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(resp.data.len(), 1);
        let pool = &resp.data[0];
        assert_eq!(pool.relationships.base_token.data.address(), "0xbase");
        assert_eq!(pool.attributes.volume_usd.h24.as_deref(), Some("1000000.0"));
    }

    #[test]
    fn missing_data_field_is_empty() {
        let resp: PoolsResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.data.is_empty());
    }
}
