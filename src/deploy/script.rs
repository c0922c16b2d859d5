//! Shared runner for the one-shot deployment script binaries.
//!
//! Reproduces the original scripts' shape: no flags, configuration and
//! network selection entirely from the environment.
//! `DEPLOYER_CONFIG` points at the config file (default `deployer.toml`);
//! `DEPLOYER_NETWORK` overrides the config's `default_network`.

use std::env;
use std::path::Path;

use crate::artifact::{ArtifactStore, ContractFactory};
use crate::config::loader;
use crate::deploy::deployer::{DeployError, Deployer, Deployment};

/// Environment variable selecting the config file.
pub const CONFIG_ENV_VAR: &str = "DEPLOYER_CONFIG";

/// Environment variable overriding the target network.
pub const NETWORK_ENV_VAR: &str = "DEPLOYER_NETWORK";

/// Load config from the environment and deploy the named contract with no
/// constructor arguments, as the original scripts did.
pub async fn run(contract_name: &str) -> Result<Deployment, DeployError> {
    let config_path =
        env::var(CONFIG_ENV_VAR).unwrap_or_else(|_| "deployer.toml".to_string());
    let config_path = Path::new(&config_path);

    loader::load_dotenv(config_path);
    let config = loader::load_config(config_path)?;

    let network_name = env::var(NETWORK_ENV_VAR)
        .ok()
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| config.default_network.clone());
    if network_name.is_empty() {
        return Err(DeployError::NoNetworkSelected);
    }

    let network = loader::resolve_network(&config, &network_name)?;

    tracing::info!(
        contract = contract_name,
        network = %network.name,
        artifacts = %config.artifacts.dir,
        "Starting deployment"
    );

    let store = ArtifactStore::new(&config.artifacts.dir);
    let factory = ContractFactory::from_artifact(store.resolve(contract_name)?)?;

    let deployer = Deployer::new(network, config.chain.clone());
    deployer.deploy(&factory, &[]).await
}
