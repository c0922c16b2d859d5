//! Chain integration subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedNetwork (RPC URL, accounts, pinned chain id)
//!     → wallet.rs (key loading, address derivation)
//!     → client.rs (RPC queries with timeouts, chain-id verification)
//!     → deploy::deployer (creation transaction, confirmation wait)
//! ```
//!
//! # Security Constraints
//! - Private keys only from profile accounts or environment
//! - Never log private keys or sensitive data
//! - All RPC calls have configurable timeouts

pub mod client;
pub mod types;
pub mod wallet;

pub use client::RpcClient;
pub use types::{ChainError, ChainId, ChainResult};
pub use wallet::Wallet;
