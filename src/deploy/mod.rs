//! Deployment subsystem.
//!
//! # Data Flow
//! ```text
//! config (profile + chain settings) + artifact factory
//!     → deployer.rs (pre-flight, submit, confirm)
//!     → Deployment summary (address, tx hash, gas)
//!
//! script.rs wraps the whole flow for the no-flag script binaries.
//! ```
//!
//! # Failure Semantics
//! Every error is fatal to the run: the entry points log it and exit with
//! a non-zero status. There is no retry or partial-failure recovery; a
//! single transaction either confirms or the run aborts.

pub mod deployer;
pub mod script;

pub use deployer::{DeployError, Deployer, Deployment};
