//! Deployment configuration for the collection viewer

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ChainResult;

/// Network the collection is deployed on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    Mainnet,
    #[default]
    Testnet,
    Devnet,
    Localnet,
}

impl Network {
    /// Default full node RPC URL
    pub fn fullnode_url(self) -> &'static str {
        match self {
            Self::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Self::Testnet => "https://fullnode.testnet.sui.io:443",
            Self::Devnet => "https://fullnode.devnet.sui.io:443",
            Self::Localnet => "http://127.0.0.1:9000",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Mainnet => "mainnet",
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Localnet => "localnet",
        }
    }
}

/// Static collection facts used for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CollectionInfo {
    pub max_supply: u64,
    /// Prefix of `<n>.png` image files
    pub image_base_url: String,
    /// Added to the token index (plus one) to find the image number
    pub image_offset: u64,
}

impl Default for CollectionInfo {
    fn default() -> Self {
        Self {
            max_supply: 11_019,
            image_base_url: "https://pub-65ffe756dc414f1c813b2513d0430fb0.r2.dev/".to_string(),
            image_offset: 0,
        }
    }
}

/// Configuration for a [`CollectionViewer`](crate::CollectionViewer)
///
/// Passed in explicitly; nothing here is read from ambient process state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    pub network: Network,
    /// Overrides the network's default full node URL
    pub rpc_url: Option<String>,
    pub package_id: String,
    pub module_name: String,
    /// Shared object holding the collection counters
    pub collection_state: String,
    pub collection: CollectionInfo,
    /// Upper bound on records pulled for bloodline analysis
    pub bulk_query_limit: usize,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            network: Network::Testnet,
            rpc_url: None,
            package_id: "0x4e91a01313fb9d17a85dd23024aba33f7108aa4b3d479bb854c14220ecb32168"
                .to_string(),
            module_name: "gbz_dynamic".to_string(),
            collection_state:
                "0xec70ab528dcc49d202e0f22060299fb35012e0b113ef95f7b604b6fa9811b0b6".to_string(),
            collection: CollectionInfo::default(),
            bulk_query_limit: 50,
        }
    }
}

impl ChainConfig {
    /// Parse TOML; absent keys keep their defaults
    pub fn from_toml_str(s: &str) -> ChainResult<Self> {
        Ok(toml::from_str(s)?)
    }

    /// Read a TOML config file
    pub fn load(path: impl AsRef<Path>) -> ChainResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    /// Set the network
    pub fn with_network(mut self, network: Network) -> Self {
        self.network = network;
        self
    }

    /// Override the RPC URL
    pub fn with_rpc_url(mut self, url: impl Into<String>) -> Self {
        self.rpc_url = Some(url.into());
        self
    }

    /// Set the bulk query limit
    pub fn with_bulk_query_limit(mut self, limit: usize) -> Self {
        self.bulk_query_limit = limit;
        self
    }

    /// Full node URL in effect
    pub fn rpc_endpoint(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.fullnode_url())
    }

    /// Fully qualified Move type of a collectible
    pub fn item_type(&self) -> String {
        format!("{}::{}::GBzNFT", self.package_id, self.module_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_testnet_deployment() {
        let config = ChainConfig::default();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.rpc_endpoint(), "https://fullnode.testnet.sui.io:443");
        assert_eq!(config.collection.max_supply, 11_019);
        assert_eq!(config.bulk_query_limit, 50);
        assert!(config.item_type().ends_with("::gbz_dynamic::GBzNFT"));
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ChainConfig::from_toml_str(
            r#"
            network = "mainnet"
            bulk_query_limit = 200

            [collection]
            image_offset = 5
            "#,
        )
        .unwrap();
        assert_eq!(config.network, Network::Mainnet);
        assert_eq!(config.bulk_query_limit, 200);
        assert_eq!(config.collection.image_offset, 5);
        assert_eq!(config.collection.max_supply, 11_019);
        assert_eq!(config.module_name, "gbz_dynamic");
    }

    #[test]
    fn test_rpc_override() {
        let config = ChainConfig::default()
            .with_network(Network::Localnet)
            .with_rpc_url("http://node:9000");
        assert_eq!(config.rpc_endpoint(), "http://node:9000");
    }

    #[test]
    fn test_bad_toml() {
        assert!(ChainConfig::from_toml_str("network = 3").is_err());
    }
}
