//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the deployer.
//! All types derive Serde traits for deserialization from the config file.
//! URL and account fields may contain `${VAR}` placeholders which are
//! resolved against the environment when a network profile is selected.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root configuration for the deployment harness.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct DeployerConfig {
    /// Network profile used when none is selected explicitly.
    pub default_network: String,

    /// Compiler provenance (recorded alongside deployments, never invoked).
    pub solc: SolcConfig,

    /// Where compiled artifacts live on disk.
    pub artifacts: ArtifactsConfig,

    /// Chain interaction settings (timeouts, confirmations, gas guards).
    pub chain: ChainSettings,

    /// Named network profiles, keyed by network name.
    pub networks: BTreeMap<String, NetworkConfig>,

    /// Block-explorer API keys, keyed by network name.
    pub etherscan: ExplorerConfig,
}

impl DeployerConfig {
    /// Look up a network profile by name.
    pub fn network(&self, name: &str) -> Option<&NetworkConfig> {
        self.networks.get(name)
    }
}

/// Solidity compiler settings the artifacts were produced with.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SolcConfig {
    /// Compiler version (e.g., "0.8.16").
    pub version: String,

    /// Optimizer settings.
    pub optimizer: OptimizerConfig,
}

impl Default for SolcConfig {
    fn default() -> Self {
        Self {
            version: "0.8.16".to_string(),
            optimizer: OptimizerConfig::default(),
        }
    }
}

/// Optimizer settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct OptimizerConfig {
    /// Whether the optimizer was enabled.
    pub enabled: bool,

    /// Optimizer runs setting.
    pub runs: u32,
}

impl Default for OptimizerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            runs: 200,
        }
    }
}

/// Compiled artifact location.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ArtifactsConfig {
    /// Directory scanned for artifact JSON files.
    pub dir: String,
}

impl Default for ArtifactsConfig {
    fn default() -> Self {
        Self {
            dir: "artifacts".to_string(),
        }
    }
}

/// A named network profile.
///
/// `url` and `accounts` entries may reference environment variables with
/// `${VAR}` syntax; they are resolved at selection time, not at load time,
/// so unrelated profiles don't require their variables to be set.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NetworkConfig {
    /// JSON-RPC endpoint URL template.
    pub url: String,

    /// Signing account private keys (templates, typically `["${PRIVATE_KEY}"]`).
    #[serde(default = "default_accounts")]
    pub accounts: Vec<String>,

    /// Expected chain ID; deployment aborts on mismatch when set.
    #[serde(default)]
    pub chain_id: Option<u64>,
}

fn default_accounts() -> Vec<String> {
    vec!["${PRIVATE_KEY}".to_string()]
}

/// Block-explorer API key configuration.
///
/// Keys are loaded and validated only; submitting verification requests is
/// out of scope for this tool.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ExplorerConfig {
    /// API key templates keyed by network name.
    pub api_keys: BTreeMap<String, String>,
}

/// Chain interaction settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ChainSettings {
    /// Per-request RPC timeout in seconds.
    pub rpc_timeout_secs: u64,

    /// Number of block confirmations required before reporting success.
    pub confirmations: u32,

    /// Total time allowed for the confirmation wait in seconds.
    pub confirmation_timeout_secs: u64,

    /// Receipt polling interval in seconds.
    pub poll_interval_secs: u64,

    /// Gas price multiplier (1.0 = as estimated, 1.2 = 20% buffer).
    pub gas_price_multiplier: f64,

    /// Maximum gas price in gwei (protection against fee spikes).
    pub max_gas_price_gwei: u64,
}

impl Default for ChainSettings {
    fn default() -> Self {
        Self {
            rpc_timeout_secs: 10,
            confirmations: 1,
            confirmation_timeout_secs: 300,
            poll_interval_secs: 2,
            gas_price_multiplier: 1.0,
            max_gas_price_gwei: 500,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = DeployerConfig::default();
        assert!(config.networks.is_empty());
        assert_eq!(config.chain.confirmations, 1);
        assert_eq!(config.chain.rpc_timeout_secs, 10);
        assert_eq!(config.artifacts.dir, "artifacts");
        assert_eq!(config.solc.version, "0.8.16");
        assert!(config.solc.optimizer.enabled);
        assert_eq!(config.solc.optimizer.runs, 200);
    }

    #[test]
    fn test_network_accounts_default() {
        let toml = r#"
            url = "https://eth-sepolia.g.alchemy.com/v2/${Sepolia_RPC_KEY}"
        "#;
        let network: NetworkConfig = toml::from_str(toml).unwrap();
        assert_eq!(network.accounts, vec!["${PRIVATE_KEY}".to_string()]);
        assert!(network.chain_id.is_none());
    }

    #[test]
    fn test_full_config_roundtrip() {
        let toml = r#"
            default_network = "sepolia"

            [networks.sepolia]
            url = "https://eth-sepolia.g.alchemy.com/v2/${Sepolia_RPC_KEY}"
            accounts = ["${PRIVATE_KEY}"]
            chain_id = 11155111

            [networks.polygonMumbai]
            url = "https://polygon-mumbai.g.alchemy.com/v2/${Mumbai_RPC_KEY}"

            [etherscan.api_keys]
            sepolia = "${EtherScan_API_KEY}"
            polygonMumbai = "${PolygonScan_API_KEY}"
        "#;
        let config: DeployerConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.default_network, "sepolia");
        assert_eq!(config.networks.len(), 2);
        assert_eq!(config.network("sepolia").unwrap().chain_id, Some(11155111));
        assert!(config.network("polygonMumbai").is_some());
        assert!(config.network("mainnet").is_none());
        assert_eq!(config.etherscan.api_keys.len(), 2);
    }
}
