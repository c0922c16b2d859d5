//! General deployment CLI.
//!
//! The script binaries (`deploy-bridge`, `deploy-token`) reproduce the
//! original fixed-contract scripts; this binary exposes the same flow for
//! any artifact name plus a quick view of configured networks.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use evm_deployer::artifact::{ArtifactStore, ContractFactory};
use evm_deployer::config::loader;
use evm_deployer::deploy::{DeployError, Deployer, Deployment};
use evm_deployer::observability::logging;

#[derive(Parser)]
#[command(name = "deployer")]
#[command(about = "Deploy compiled EVM contracts to configured networks", long_about = None)]
struct Cli {
    /// Path to the deployer config file.
    #[arg(short, long, default_value = "deployer.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deploy a contract by artifact name
    Deploy {
        /// Contract name to resolve in the artifact directory
        contract: String,

        /// Network profile to target (defaults to default_network)
        #[arg(short, long)]
        network: Option<String>,

        /// ABI-encoded constructor arguments as hex
        #[arg(long, value_name = "HEX")]
        constructor_args: Option<String>,
    },
    /// List configured network profiles
    Networks,
}

#[tokio::main]
async fn main() {
    logging::init("info");

    let cli = Cli::parse();

    if let Err(error) = run(cli).await {
        tracing::error!(%error, "deployer failed");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    loader::load_dotenv(&cli.config);
    let config = loader::load_config(&cli.config)?;

    match cli.command {
        Commands::Deploy { contract, network, constructor_args } => {
            let network_name = network
                .filter(|name| !name.is_empty())
                .unwrap_or_else(|| config.default_network.clone());
            if network_name.is_empty() {
                return Err(DeployError::NoNetworkSelected.into());
            }

            let args = match constructor_args {
                Some(raw) => hex::decode(raw.trim_start_matches("0x"))?,
                None => Vec::new(),
            };

            let resolved = loader::resolve_network(&config, &network_name)?;
            if loader::resolve_explorer_key(&config, &network_name)?.is_some() {
                tracing::debug!(network = %network_name, "Explorer API key configured");
            }

            let store = ArtifactStore::new(&config.artifacts.dir);
            let factory = ContractFactory::from_artifact(store.resolve(&contract)?)?;

            let deployer = Deployer::new(resolved, config.chain.clone());
            let deployment: Deployment = deployer.deploy(&factory, &args).await?;

            println!("The contract has been deployed to {}", deployment.address);
        }
        Commands::Networks => {
            if config.networks.is_empty() {
                println!("No networks configured");
                return Ok(());
            }
            for (name, profile) in &config.networks {
                let default_marker =
                    if *name == config.default_network { " (default)" } else { "" };
                let chain_id = profile
                    .chain_id
                    .map(|id| id.to_string())
                    .unwrap_or_else(|| "-".to_string());
                let explorer = if config.etherscan.api_keys.contains_key(name) {
                    "explorer key"
                } else {
                    "no explorer key"
                };
                println!(
                    "{}{}  chain_id={}  accounts={}  {}  {}",
                    name,
                    default_marker,
                    chain_id,
                    profile.accounts.len(),
                    explorer,
                    profile.url,
                );
            }
        }
    }

    Ok(())
}
