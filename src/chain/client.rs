//! Chain RPC client with timeout and error handling.
//!
//! # Responsibilities
//! - Connect to the selected network's JSON-RPC endpoint
//! - Query chain state (chain id, block number, balances, receipts)
//! - Handle timeouts and network errors gracefully
//! - Verify the endpoint serves the chain the profile pins

use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::{Provider, ProviderBuilder};
use alloy::rpc::types::TransactionReceipt;
use std::future::IntoFuture;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;

use crate::chain::types::{ChainError, ChainId, ChainResult};
use crate::config::ResolvedNetwork;

/// RPC client wrapper for a single network profile.
#[derive(Clone)]
pub struct RpcClient {
    provider: Arc<dyn Provider + Send + Sync>,
    network: String,
    rpc_url: url::Url,
    expected_chain_id: Option<u64>,
    timeout_duration: Duration,
}

impl RpcClient {
    /// Create a client for a resolved network profile.
    ///
    /// Connecting is lazy; the first query surfaces reachability errors.
    pub fn new(network: &ResolvedNetwork, rpc_timeout_secs: u64) -> Self {
        let provider = ProviderBuilder::new().connect_http(network.url.clone());

        Self {
            provider: Arc::new(provider),
            network: network.name.clone(),
            rpc_url: network.url.clone(),
            expected_chain_id: network.chain_id,
            timeout_duration: Duration::from_secs(rpc_timeout_secs),
        }
    }

    // IntoFuture rather than Future: some provider calls (get_balance)
    // return awaitable builders.
    async fn request<F, Fut, T, E>(&self, what: &str, call: F) -> ChainResult<T>
    where
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = Result<T, E>>,
        E: std::fmt::Display,
    {
        match timeout(self.timeout_duration, call().into_future()).await {
            Ok(Ok(value)) => Ok(value),
            Ok(Err(e)) => Err(ChainError::Rpc(format!("{} failed: {}", what, e))),
            Err(_) => {
                tracing::warn!(network = %self.network, what, "RPC timeout");
                Err(ChainError::Timeout(self.timeout_duration.as_secs()))
            }
        }
    }

    /// Verify the connected chain ID matches the profile, when pinned.
    pub async fn verify_chain_id(&self) -> ChainResult<ChainId> {
        let chain_id = self.get_chain_id().await?;
        if let Some(expected) = self.expected_chain_id {
            if chain_id.0 != expected {
                return Err(ChainError::ChainMismatch { expected, actual: chain_id.0 });
            }
        }
        tracing::info!(
            network = %self.network,
            chain_id = chain_id.0,
            "Connected to network"
        );
        Ok(chain_id)
    }

    /// Get the chain ID from the RPC.
    pub async fn get_chain_id(&self) -> ChainResult<ChainId> {
        self.request("eth_chainId", || self.provider.get_chain_id())
            .await
            .map(ChainId)
    }

    /// Get the latest block number.
    pub async fn get_block_number(&self) -> ChainResult<u64> {
        self.request("eth_blockNumber", || self.provider.get_block_number()).await
    }

    /// Get the balance of an address.
    pub async fn get_balance(&self, address: Address) -> ChainResult<U256> {
        self.request("eth_getBalance", || self.provider.get_balance(address)).await
    }

    /// Get current gas price in wei.
    pub async fn get_gas_price(&self) -> ChainResult<u128> {
        self.request("eth_gasPrice", || self.provider.get_gas_price()).await
    }

    /// Get a transaction receipt by hash, `None` while pending.
    pub async fn get_transaction_receipt(
        &self,
        tx_hash: TxHash,
    ) -> ChainResult<Option<TransactionReceipt>> {
        self.request("eth_getTransactionReceipt", || {
            self.provider.get_transaction_receipt(tx_hash)
        })
        .await
    }

    /// Network name this client was built for.
    pub fn network(&self) -> &str {
        &self.network
    }

    /// RPC endpoint URL.
    pub fn rpc_url(&self) -> &url::Url {
        &self.rpc_url
    }
}

impl std::fmt::Debug for RpcClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RpcClient")
            .field("network", &self.network)
            .field("rpc_url", &self.rpc_url.as_str())
            .field("expected_chain_id", &self.expected_chain_id)
            .field("timeout", &self.timeout_duration)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn local_network() -> ResolvedNetwork {
        ResolvedNetwork {
            name: "localhost".to_string(),
            url: "http://localhost:8545".parse().unwrap(),
            accounts: Vec::new(),
            chain_id: Some(31337),
        }
    }

    #[test]
    fn test_client_creation_is_lazy() {
        // No node is running; construction must still succeed.
        let client = RpcClient::new(&local_network(), 5);
        assert_eq!(client.network(), "localhost");
        assert_eq!(client.rpc_url().as_str(), "http://localhost:8545/");
    }

    #[tokio::test]
    async fn test_unreachable_rpc_is_an_error() {
        // Port 9 (discard) is not an RPC endpoint.
        let network = ResolvedNetwork {
            name: "dead".to_string(),
            url: "http://127.0.0.1:9".parse().unwrap(),
            accounts: Vec::new(),
            chain_id: None,
        };
        let client = RpcClient::new(&network, 2);
        assert!(client.get_chain_id().await.is_err());
    }
}
