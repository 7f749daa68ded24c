use anyhow::{bail, Context, Result};
use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;
use url::Url;

use crate::config::MorphoClientConfig;
use crate::types::MonitorData;

const HOUR: i64 = 3600;

/// Client for the Morpho Blue GraphQL API.
pub struct MorphoClient {
    client: Client,
    endpoint: Url,
    vault_address: String,
    market_id: String,
}

#[derive(Deserialize)]
struct GraphQlResponse {
    data: Option<MonitorData>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize)]
struct GraphQlError {
    message: String,
}

impl MorphoClient {
    pub fn new(client: Client, config: MorphoClientConfig) -> Result<Self> {
        let endpoint = Url::parse(&config.endpoint)
            .with_context(|| format!("invalid Morpho endpoint: {}", config.endpoint))?;
        Ok(Self {
            client,
            endpoint,
            vault_address: config.vault_address,
            market_id: config.market_id,
        })
    }

    /// Fetches current vault and market state plus the three historical
    /// windows in a single combined query.
    pub async fn fetch_monitor_data(&self) -> Result<MonitorData> {
        let query = self.combined_query(Utc::now().timestamp());
        let resp: GraphQlResponse = self
            .client
            .post(self.endpoint.clone())
            .json(&serde_json::json!({ "query": query }))
            .send()
            .await
            .context("Morpho API request failed")?
            .error_for_status()
            .context("Morpho API returned an error status")?
            .json()
            .await
            .context("failed to decode Morpho API response")?;

        if let Some(errors) = resp.errors {
            let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
            bail!("Morpho GraphQL errors: {}", messages.join("; "));
        }
        resp.data.context("Morpho API response carried no data")
    }

    /// Builds the combined vault + market query. Historical series are
    /// requested as hourly buckets starting at `now` minus the window.
    fn combined_query(&self, now: i64) -> String {
        let h1 = now - HOUR;
        let h12 = now - 12 * HOUR;
        let h24 = now - 24 * HOUR;
        format!(
            r#"query GetAllData {{
    vault: vaultV2ByAddress(address: "{vault}", chainId: 1) {{
        name
        totalAssets
        totalAssetsUsd
        avgApy
        avgNetApy
        rewards {{ supplyApr asset {{ symbol }} }}
        historicalState {{
            assets1h: totalAssets(options: {{ startTimestamp: {h1}, interval: HOUR }}) {{ x y }}
            assets12h: totalAssets(options: {{ startTimestamp: {h12}, interval: HOUR }}) {{ x y }}
            assets24h: totalAssets(options: {{ startTimestamp: {h24}, interval: HOUR }}) {{ x y }}
            netApy1h: netApy(options: {{ startTimestamp: {h1}, interval: HOUR }}) {{ x y }}
            netApy12h: netApy(options: {{ startTimestamp: {h12}, interval: HOUR }}) {{ x y }}
            netApy24h: netApy(options: {{ startTimestamp: {h24}, interval: HOUR }}) {{ x y }}
        }}
    }}
    market: marketByUniqueKey(uniqueKey: "{market}", chainId: 1) {{
        state {{ utilization liquidityAssets totalLiquidityUsd avgBorrowApy }}
        historicalState {{
            borrowApy1h: borrowApy(options: {{ startTimestamp: {h1}, interval: HOUR }}) {{ x y }}
            borrowApy12h: borrowApy(options: {{ startTimestamp: {h12}, interval: HOUR }}) {{ x y }}
            borrowApy24h: borrowApy(options: {{ startTimestamp: {h24}, interval: HOUR }}) {{ x y }}
        }}
    }}
}}"#,
            vault = self.vault_address,
            market = self.market_id,
            h1 = h1,
            h12 = h12,
            h24 = h24,
        )
    }
}
