//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! deployer.toml + .env
//!     → loader.rs (parse & deserialize, templates untouched)
//!     → validation.rs (semantic checks)
//!     → DeployerConfig (validated, immutable)
//!
//! On network selection:
//!     loader::resolve_network
//!     → ${VAR} templates filled from the environment
//!     → ResolvedNetwork (parsed URL + live signing keys)
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; a one-shot process never reloads
//! - All fields have defaults to allow minimal configs
//! - Env resolution is lazy and per-profile, so deploying to one network
//!   never requires another network's credentials

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{ConfigError, ResolvedNetwork};
pub use schema::ChainSettings;
pub use schema::DeployerConfig;
pub use schema::NetworkConfig;
