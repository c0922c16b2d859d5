//! Deploys the Bridge contract to the selected network.
//!
//! No flags: config comes from `deployer.toml` (or `DEPLOYER_CONFIG`) and
//! the network from `DEPLOYER_NETWORK` or the config's default. Prints the
//! deployed address on success; exits 1 on any error.

use evm_deployer::deploy::script;
use evm_deployer::observability::logging;

#[tokio::main]
async fn main() {
    logging::init("info");

    match script::run("Bridge").await {
        Ok(deployment) => {
            println!("The contract has been deployed to {}", deployment.address);
        }
        Err(error) => {
            tracing::error!(%error, "Bridge deployment failed");
            std::process::exit(1);
        }
    }
}
