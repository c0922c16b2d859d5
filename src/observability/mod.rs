//! Observability subsystem.
//!
//! # Design Decisions
//! - Structured logging via tracing; fields over formatted strings
//! - Logs go to stderr so stdout stays reserved for the deployed address
//! - A one-shot process has no metrics endpoint to scrape

pub mod logging;
