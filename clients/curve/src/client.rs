use std::collections::HashMap;

use anyhow::{bail, Context, Result};
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::CurveClientConfig;
use crate::types::{GaugeEntry, PoolDetail};

/// Client for the Curve pool and gauge APIs.
pub struct CurveClient {
    client: Client,
    base_url: Url,
}

/// All Curve endpoints wrap their payload in this envelope.
#[derive(Deserialize)]
struct ApiResponse<T> {
    success: bool,
    data: Option<T>,
}

impl CurveClient {
    pub fn new(client: Client, config: CurveClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url)
            .with_context(|| format!("invalid Curve base URL: {}", config.base_url))?;
        Ok(Self { client, base_url })
    }

    /// Fetches current balances, TVL, virtual price, volume and fee APRs
    /// for one pool.
    pub async fn pool_detail(&self, address: &str) -> Result<PoolDetail> {
        let url = self
            .base_url
            .join(&format!("v1/pools/ethereum/{}", address))
            .context("failed to build pool detail URL")?;
        self.get(url, "pool detail").await
    }

    /// Fetches the full gauge listing, keyed by pool name. Callers match
    /// entries to a pool via the `swap` address.
    pub async fn gauges(&self) -> Result<HashMap<String, GaugeEntry>> {
        let url = self
            .base_url
            .join("v1/getAllGauges")
            .context("failed to build gauge listing URL")?;
        self.get(url, "gauge listing").await
    }

    async fn get<T: serde::de::DeserializeOwned>(&self, url: Url, what: &str) -> Result<T> {
        let resp: ApiResponse<T> = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Curve {} request failed", what))?
            .error_for_status()
            .with_context(|| format!("Curve {} returned an error status", what))?
            .json()
            .await
            .with_context(|| format!("failed to decode Curve {} response", what))?;
        if !resp.success {
            bail!("Curve {} reported failure", what);
        }
        resp.data
            .with_context(|| format!("Curve {} response carried no data", what))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_detail_decodes() {
        let raw = r#"{
            "success": true,
            "data": {
                "name": "USDS/USDC",
                "usdTotal": 12345678.9,
                "virtualPrice": "1002300000000000000",
                "coins": [
                    {"symbol": "USDS", "poolBalance": "6000000000000000000000000", "decimals": 18},
                    {"symbol": "USDC", "poolBalance": "6400000000000", "decimals": 6}
                ],
                "volumeUsd24h": 1234567.89,
                "feesUsd24h": 1234.56,
                "dailyFeeApr": 1.23,
                "weeklyFeeApr": 1.1
            }
        }"#;
        let resp: ApiResponse<PoolDetail> = serde_json::from_str(raw).unwrap();
        let detail = resp.data.unwrap();
        assert_eq!(detail.coins.len(), 2);
        assert_eq!(detail.coins[1].decimals, 6);
    }

    #[test]
    fn gauge_listing_decodes_sparse_entries() {
        let raw = r#"{
            "success": true,
            "data": {
                "usds-usdc": {
                    "swap": "0xAbC0000000000000000000000000000000000001",
                    "gaugeCrvApy": [0.5, 1.25],
                    "extraRewards": [{"symbol": "SKY", "apy": 2.0}]
                },
                "other": {"swap": "0x0000000000000000000000000000000000000002"}
            }
        }"#;
        let resp: ApiResponse<HashMap<String, GaugeEntry>> = serde_json::from_str(raw).unwrap();
        let gauges = resp.data.unwrap();
        let g = &gauges["usds-usdc"];
        assert_eq!(g.gauge_crv_apy, Some([Some(0.5), Some(1.25)]));
        assert_eq!(g.extra_rewards.len(), 1);
        assert!(gauges["other"].gauge_crv_apy.is_none());
        assert!(gauges["other"].extra_rewards.is_empty());
    }
}
