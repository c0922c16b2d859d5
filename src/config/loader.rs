//! Configuration loading from disk and environment resolution.
//!
//! Templates stay unresolved until a network profile is selected, so a
//! deployment to sepolia does not require the Mumbai RPC key to be set.

use regex::{Captures, Regex};
use std::env;
use std::fs;
use std::path::Path;
use std::sync::LazyLock;

use crate::config::schema::{DeployerConfig, NetworkConfig};
use crate::config::validation::{validate_config, ValidationError};

static ENV_VAR_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").expect("env template pattern is valid"));

/// Error type for configuration loading and resolution.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Validation(Vec<ValidationError>),
    /// A `${VAR}` template referenced an unset environment variable.
    MissingEnvVar(String),
    /// The selected network name has no profile in the config.
    UnknownNetwork(String),
    /// A resolved RPC URL failed to parse.
    InvalidUrl { network: String, reason: String },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
            ConfigError::MissingEnvVar(var) => {
                write!(f, "Environment variable {} not set", var)
            }
            ConfigError::UnknownNetwork(name) => {
                write!(f, "Unknown network '{}'", name)
            }
            ConfigError::InvalidUrl { network, reason } => {
                write!(f, "Invalid RPC URL for network '{}': {}", network, reason)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// A network profile with all environment templates resolved.
///
/// Holds live signing keys; must never be logged or serialized.
#[derive(Clone)]
pub struct ResolvedNetwork {
    /// Network name this profile was resolved from.
    pub name: String,
    /// Parsed RPC endpoint.
    pub url: url::Url,
    /// Signing account private keys, in priority order.
    pub accounts: Vec<String>,
    /// Expected chain ID, if pinned in the profile.
    pub chain_id: Option<u64>,
}

impl std::fmt::Debug for ResolvedNetwork {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedNetwork")
            .field("name", &self.name)
            .field("url", &self.url.as_str())
            .field("accounts", &self.accounts.len())
            .field("chain_id", &self.chain_id)
            .finish()
    }
}

/// Load `.env` from the config file's directory, falling back to the
/// process environment.
pub fn load_dotenv(config_path: &Path) {
    let candidate = config_path
        .parent()
        .map(|dir| dir.join(".env"))
        .unwrap_or_else(|| Path::new(".env").to_path_buf());
    if dotenvy::from_path(&candidate).is_err() {
        dotenvy::dotenv().ok();
    }
}

/// Load and validate configuration from a TOML file.
///
/// Environment templates inside the file are left untouched here; use
/// [`resolve_network`] to materialize a profile.
pub fn load_config(path: &Path) -> Result<DeployerConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: DeployerConfig = toml::from_str(&content).map_err(ConfigError::Parse)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Substitute every `${VAR}` occurrence in `template` from the environment.
pub fn interpolate(template: &str) -> Result<String, ConfigError> {
    let mut missing: Option<String> = None;
    let result = ENV_VAR_PATTERN.replace_all(template, |caps: &Captures| {
        let var = &caps[1];
        match env::var(var) {
            Ok(val) => val,
            Err(_) => {
                if missing.is_none() {
                    missing = Some(var.to_string());
                }
                String::new()
            }
        }
    });

    match missing {
        Some(var) => Err(ConfigError::MissingEnvVar(var)),
        None => Ok(result.into_owned()),
    }
}

/// Resolve the named profile: select it, fill in environment templates,
/// and parse the RPC URL.
pub fn resolve_network(
    config: &DeployerConfig,
    name: &str,
) -> Result<ResolvedNetwork, ConfigError> {
    let profile: &NetworkConfig = config
        .network(name)
        .ok_or_else(|| ConfigError::UnknownNetwork(name.to_string()))?;

    let url_str = interpolate(&profile.url)?;
    let url: url::Url = url_str.parse().map_err(|e: url::ParseError| {
        ConfigError::InvalidUrl { network: name.to_string(), reason: e.to_string() }
    })?;

    let accounts = profile
        .accounts
        .iter()
        .map(|template| interpolate(template))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ResolvedNetwork {
        name: name.to_string(),
        url,
        accounts,
        chain_id: profile.chain_id,
    })
}

/// Resolve the explorer API key for a network, if one is configured.
pub fn resolve_explorer_key(
    config: &DeployerConfig,
    network: &str,
) -> Result<Option<String>, ConfigError> {
    match config.etherscan.api_keys.get(network) {
        Some(template) => interpolate(template).map(Some),
        None => Ok(None),
    }
}
