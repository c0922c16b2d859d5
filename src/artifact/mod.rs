//! Compiled contract artifact subsystem.
//!
//! # Data Flow
//! ```text
//! artifact dir (external compiler output, Hardhat JSON)
//!     → store.rs (locate by contract name, parse)
//!     → factory.rs (init code assembly, creation request)
//!     → deploy::deployer (submission)
//! ```

pub mod factory;
pub mod store;

pub use factory::ContractFactory;
pub use store::{Artifact, ArtifactError, ArtifactStore};
