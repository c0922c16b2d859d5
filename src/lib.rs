//! EVM contract deployment harness.
//!
//! A one-shot tool that resolves a named, pre-compiled contract artifact,
//! submits its creation transaction to a configured network, waits for
//! confirmation, and reports the deployed address.
//!
//! # Architecture Overview
//!
//! ```text
//!  deployer.toml + .env            artifacts/ (external compiler output)
//!        │                                  │
//!        ▼                                  ▼
//!  ┌───────────┐   select profile    ┌─────────────┐
//!  │  config   │────────────────────▶│  artifact    │
//!  │ loader +  │   ResolvedNetwork   │ store +      │
//!  │ validation│                     │ factory      │
//!  └─────┬─────┘                     └──────┬──────┘
//!        │                                  │ creation request
//!        ▼                                  ▼
//!  ┌───────────┐    queries          ┌─────────────┐
//!  │  chain    │◀────────────────────│   deploy     │
//!  │ client +  │    submit + poll    │  deployer    │
//!  │ wallet    │────────────────────▶│             │
//!  └───────────┘                     └──────┬──────┘
//!                                           │
//!                                           ▼
//!                              deployed address on stdout
//! ```
//!
//! Entry points: the `deployer` CLI plus the two no-flag script binaries
//! (`deploy-bridge`, `deploy-token`). All errors are fatal and surface as
//! exit code 1.

pub mod artifact;
pub mod chain;
pub mod config;
pub mod deploy;
pub mod observability;

pub use config::DeployerConfig;
pub use deploy::{DeployError, Deployer, Deployment};
