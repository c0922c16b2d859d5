//! Deploys the TokenAsset contract to the selected network.
//!
//! Same environment-driven shape as `deploy-bridge`.

use evm_deployer::deploy::script;
use evm_deployer::observability::logging;

#[tokio::main]
async fn main() {
    logging::init("info");

    match script::run("TokenAsset").await {
        Ok(deployment) => {
            println!(
                "The Token contract has been deployed to address {}",
                deployment.address
            );
        }
        Err(error) => {
            tracing::error!(%error, "TokenAsset deployment failed");
            std::process::exit(1);
        }
    }
}
