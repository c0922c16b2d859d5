//! Deployment submission and confirmation monitoring.
//!
//! # Responsibilities
//! - Pre-flight checks (chain id, signer balance, gas price guard)
//! - Submit the contract-creation transaction through a wallet-equipped
//!   provider
//! - Poll for the receipt until the required confirmation depth
//! - Produce a [`Deployment`] summary or a fatal error; there is no retry

use alloy::network::TransactionBuilder;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use std::time::Duration;
use tokio::time::{interval, timeout};

use crate::artifact::{ArtifactError, ContractFactory};
use crate::chain::{ChainError, RpcClient, Wallet};
use crate::config::{ChainSettings, ConfigError, ResolvedNetwork};

/// Errors that end a deployment run.
#[derive(Debug, thiserror::Error)]
pub enum DeployError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    #[error(transparent)]
    Chain(#[from] ChainError),

    /// No network was selected and the config names no default.
    #[error("No network selected: set DEPLOYER_NETWORK or default_network")]
    NoNetworkSelected,

    /// The signer holds no funds on the target chain.
    #[error("Insufficient funds: {0} has zero balance on the target network")]
    InsufficientFunds(Address),

    /// The node rejected the creation transaction.
    #[error("Failed to submit deployment transaction: {0}")]
    Submit(String),

    /// The creation transaction was mined but reverted.
    #[error("Deployment transaction {0} reverted")]
    Reverted(TxHash),

    /// The receipt for a creation transaction carried no contract address.
    #[error("Transaction {0} confirmed but reported no contract address")]
    NoContractAddress(TxHash),

    /// The transaction did not reach the confirmation depth in time.
    #[error("Transaction {tx_hash} not confirmed within {timeout_secs} seconds")]
    ConfirmationTimeout { tx_hash: TxHash, timeout_secs: u64 },
}

/// Summary of a completed deployment.
#[derive(Debug, Clone)]
pub struct Deployment {
    /// Contract name that was deployed.
    pub contract: String,
    /// Address the contract now lives at.
    pub address: Address,
    /// Creation transaction hash.
    pub tx_hash: TxHash,
    /// Block the transaction was mined in.
    pub block_number: u64,
    /// Gas consumed by the creation.
    pub gas_used: u64,
    /// Signer that paid for the deployment.
    pub deployer: Address,
    /// Network name the deployment targeted.
    pub network: String,
}

/// One-shot contract deployer bound to a resolved network profile.
pub struct Deployer {
    client: RpcClient,
    network: ResolvedNetwork,
    settings: ChainSettings,
}

impl Deployer {
    /// Create a deployer for the given network and chain settings.
    pub fn new(network: ResolvedNetwork, settings: ChainSettings) -> Self {
        let client = RpcClient::new(&network, settings.rpc_timeout_secs);
        Self { client, network, settings }
    }

    /// Deploy a contract and wait for the configured confirmation depth.
    pub async fn deploy(
        &self,
        factory: &ContractFactory,
        constructor_args: &[u8],
    ) -> Result<Deployment, DeployError> {
        self.client.verify_chain_id().await?;

        let wallet = Wallet::for_network(&self.network)?;
        let deployer_address = wallet.address();

        let balance = self.client.get_balance(deployer_address).await?;
        ensure_funded(deployer_address, balance)?;

        // Fetched once: the price the guard approves is the price submitted.
        let gas_price = self.client.get_gas_price().await?;
        check_gas_price(gas_price, self.settings.max_gas_price_gwei)?;
        let adjusted_gas_price =
            (gas_price as f64 * self.settings.gas_price_multiplier) as u128;

        let mut request = factory
            .deploy_request(constructor_args)
            .with_gas_price(adjusted_gas_price);
        if let Some(chain_id) = self.network.chain_id {
            request = request.with_chain_id(chain_id);
        }

        // Separate provider for sending: equipped with the wallet so the
        // fill stack handles nonce, gas limit, and signing.
        let sender = ProviderBuilder::new()
            .wallet(wallet.into_ethereum_wallet())
            .connect_http(self.network.url.clone());

        let pending = sender
            .send_transaction(request)
            .await
            .map_err(|e| DeployError::Submit(e.to_string()))?;
        let tx_hash = *pending.tx_hash();

        tracing::info!(
            contract = %factory.name(),
            tx_hash = %tx_hash,
            deployer = %deployer_address,
            network = %self.network.name,
            "Deployment transaction submitted"
        );

        let receipt = self.wait_for_confirmation(tx_hash).await?;
        let address = receipt
            .contract_address
            .ok_or(DeployError::NoContractAddress(tx_hash))?;
        let block_number = receipt.block_number.unwrap_or_default();

        tracing::info!(
            contract = %factory.name(),
            address = %address,
            block = block_number,
            gas_used = receipt.gas_used,
            "Contract deployed"
        );

        Ok(Deployment {
            contract: factory.name().to_string(),
            address,
            tx_hash,
            block_number,
            gas_used: receipt.gas_used,
            deployer: deployer_address,
            network: self.network.name.clone(),
        })
    }

    /// Poll for the receipt until it has the required confirmation depth.
    async fn wait_for_confirmation(
        &self,
        tx_hash: TxHash,
    ) -> Result<TransactionReceipt, DeployError> {
        let required = self.settings.confirmations as u64;
        let total_timeout = Duration::from_secs(self.settings.confirmation_timeout_secs);
        let poll_interval = Duration::from_secs(self.settings.poll_interval_secs);

        let result = timeout(total_timeout, async {
            let mut ticker = interval(poll_interval);

            loop {
                ticker.tick().await;

                let receipt = match self.client.get_transaction_receipt(tx_hash).await? {
                    Some(r) => r,
                    None => {
                        tracing::debug!(tx_hash = %tx_hash, "Transaction pending");
                        continue;
                    }
                };

                if !receipt.status() {
                    return Err(DeployError::Reverted(tx_hash));
                }

                let current_block = self.client.get_block_number().await?;
                let tx_block = receipt.block_number.unwrap_or(current_block);
                // Depth 1 == mined in the latest block.
                let confirmations = current_block.saturating_sub(tx_block) + 1;

                if confirmations >= required {
                    return Ok(receipt);
                }

                tracing::debug!(
                    tx_hash = %tx_hash,
                    confirmations,
                    required,
                    "Waiting for confirmations"
                );
            }
        })
        .await;

        match result {
            Ok(outcome) => outcome,
            Err(_) => Err(DeployError::ConfirmationTimeout {
                tx_hash,
                timeout_secs: self.settings.confirmation_timeout_secs,
            }),
        }
    }

    /// The client used for chain queries.
    pub fn client(&self) -> &RpcClient {
        &self.client
    }
}

/// The signer must hold funds before anything is signed.
fn ensure_funded(address: Address, balance: U256) -> Result<(), DeployError> {
    if balance.is_zero() {
        return Err(DeployError::InsufficientFunds(address));
    }
    Ok(())
}

/// Gas guard: the cap is configured in whole gwei, so the comparison
/// truncates the quoted price to gwei first.
fn check_gas_price(gas_price_wei: u128, max_gwei: u64) -> Result<(), ChainError> {
    let gas_price_gwei = gas_price_wei / 1_000_000_000;
    if gas_price_gwei > max_gwei as u128 {
        return Err(ChainError::GasPriceTooHigh {
            current_gwei: gas_price_gwei as u64,
            max_gwei,
        });
    }
    Ok(())
}
