//! Wallet management for the deployment signer.
//!
//! # Security
//! - Private keys come from network profile accounts or the `PRIVATE_KEY`
//!   environment variable, nowhere else
//! - Keys are never logged or serialized

use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::signers::local::PrivateKeySigner;

use crate::chain::types::{ChainError, ChainResult};
use crate::config::ResolvedNetwork;

/// Environment variable holding the signing key, matching the original
/// project layout.
pub const PRIVATE_KEY_ENV_VAR: &str = "PRIVATE_KEY";

/// Deployment wallet wrapping a single private-key signer.
pub struct Wallet {
    signer: PrivateKeySigner,
}

impl Wallet {
    /// Create a wallet from a hex-encoded private key string.
    ///
    /// Accepts the key with or without a `0x` prefix. The key itself never
    /// appears in logs; only the derived address does.
    pub fn from_private_key(private_key_hex: &str) -> ChainResult<Self> {
        let key_hex = private_key_hex.strip_prefix("0x").unwrap_or(private_key_hex);

        if key_hex.trim().is_empty() {
            return Err(ChainError::Wallet("Private key is empty".to_string()));
        }

        let signer: PrivateKeySigner = key_hex
            .parse()
            .map_err(|e| ChainError::Wallet(format!("Invalid private key format: {}", e)))?;

        tracing::info!(address = %signer.address(), "Wallet initialized");

        Ok(Self { signer })
    }

    /// Build the wallet for a resolved network profile.
    ///
    /// Uses the first account of the profile; falls back to the
    /// `PRIVATE_KEY` environment variable when the profile lists none.
    pub fn for_network(network: &ResolvedNetwork) -> ChainResult<Self> {
        match network.accounts.first() {
            Some(key) if !key.trim().is_empty() => Self::from_private_key(key),
            _ => Self::from_env(),
        }
    }

    /// Load the wallet from the `PRIVATE_KEY` environment variable.
    pub fn from_env() -> ChainResult<Self> {
        let private_key = std::env::var(PRIVATE_KEY_ENV_VAR).map_err(|_| {
            ChainError::Wallet(format!(
                "Environment variable {} not set",
                PRIVATE_KEY_ENV_VAR
            ))
        })?;

        Self::from_private_key(&private_key)
    }

    /// The signing address, which pays for the deployment.
    pub fn address(&self) -> Address {
        self.signer.address()
    }

    /// Consume into the alloy wallet used to equip a sending provider.
    pub fn into_ethereum_wallet(self) -> EthereumWallet {
        EthereumWallet::from(self.signer)
    }
}

impl std::fmt::Debug for Wallet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Wallet").field("address", &self.signer.address()).finish()
    }
}
