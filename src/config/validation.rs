//! Configuration validation.
//!
//! Semantic checks on the loaded config (serde handles syntactic ones).
//! Validation is a pure function over [`DeployerConfig`] and returns all
//! errors found, not just the first. Runs before the config is accepted;
//! environment templates are treated as opaque and checked only for shape.

use std::fmt;

use crate::config::schema::DeployerConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// `default_network` names a profile that doesn't exist.
    UnknownDefaultNetwork(String),
    /// A network profile has an empty RPC URL.
    EmptyUrl(String),
    /// A network profile has no signing accounts.
    NoAccounts(String),
    /// An explorer API key references a network with no profile.
    OrphanExplorerKey(String),
    /// A chain setting is outside its valid range.
    BadChainSetting { field: &'static str, reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::UnknownDefaultNetwork(name) => {
                write!(f, "default_network '{}' has no profile", name)
            }
            ValidationError::EmptyUrl(network) => {
                write!(f, "network '{}' has an empty RPC URL", network)
            }
            ValidationError::NoAccounts(network) => {
                write!(f, "network '{}' has no signing accounts", network)
            }
            ValidationError::OrphanExplorerKey(network) => {
                write!(f, "etherscan key for '{}' has no matching network", network)
            }
            ValidationError::BadChainSetting { field, reason } => {
                write!(f, "chain.{}: {}", field, reason)
            }
        }
    }
}

/// Validate the loaded configuration, collecting every error.
pub fn validate_config(config: &DeployerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if !config.default_network.is_empty() && config.network(&config.default_network).is_none() {
        errors.push(ValidationError::UnknownDefaultNetwork(
            config.default_network.clone(),
        ));
    }

    for (name, profile) in &config.networks {
        if profile.url.trim().is_empty() {
            errors.push(ValidationError::EmptyUrl(name.clone()));
        }
        if profile.accounts.is_empty() {
            errors.push(ValidationError::NoAccounts(name.clone()));
        }
    }

    for network in config.etherscan.api_keys.keys() {
        if config.network(network).is_none() {
            errors.push(ValidationError::OrphanExplorerKey(network.clone()));
        }
    }

    let chain = &config.chain;
    if chain.rpc_timeout_secs == 0 {
        errors.push(ValidationError::BadChainSetting {
            field: "rpc_timeout_secs",
            reason: "must be greater than zero".to_string(),
        });
    }
    if chain.confirmations == 0 {
        errors.push(ValidationError::BadChainSetting {
            field: "confirmations",
            reason: "must be at least 1".to_string(),
        });
    }
    if chain.poll_interval_secs == 0 {
        errors.push(ValidationError::BadChainSetting {
            field: "poll_interval_secs",
            reason: "must be greater than zero".to_string(),
        });
    }
    if chain.gas_price_multiplier < 1.0 {
        errors.push(ValidationError::BadChainSetting {
            field: "gas_price_multiplier",
            reason: format!("{} would underprice transactions", chain.gas_price_multiplier),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
