use serde::Deserialize;

/// One pool from the batch lookup endpoint. Numeric attributes arrive as
/// decimal strings.
#[derive(Debug, Clone, Deserialize)]
pub struct PoolResource {
    pub id: String,
    pub attributes: PoolAttributes,
    pub relationships: PoolRelationships,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolAttributes {
    pub address: String,
    pub name: String,
    /// USD price of the pair's base token
    pub base_token_price_usd: Option<String>,
    /// USD price of the pair's quote token
    pub quote_token_price_usd: Option<String>,
    /// Pool reserve (TVL) in USD
    pub reserve_in_usd: Option<String>,
    pub volume_usd: VolumeUsd,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VolumeUsd {
    pub h24: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PoolRelationships {
    pub base_token: TokenRel,
    pub quote_token: TokenRel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TokenRel {
    pub data: TokenRef,
}

/// Token reference; `id` is network-prefixed, e.g. "eth_0xdc03...".
#[derive(Debug, Clone, Deserialize)]
pub struct TokenRef {
    pub id: String,
}

impl TokenRef {
    /// On-chain address part of the id, without the network prefix.
    pub fn address(&self) -> &str {
        self.id.split_once('_').map_or(self.id.as_str(), |(_, a)| a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_ref_strips_network_prefix() {
        let t = TokenRef {
            id: "eth_0xdC035D45d973E3EC169d2276DDab16f1e407384F".to_string(),
        };
        assert_eq!(t.address(), "0xdC035D45d973E3EC169d2276DDab16f1e407384F");

        let bare = TokenRef {
            id: "0xabc".to_string(),
        };
        assert_eq!(bare.address(), "0xabc");
    }
}
