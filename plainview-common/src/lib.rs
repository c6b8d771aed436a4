//! Shared utilities for the plainview workspace.
//!
//! Currently this is only the [`observability`] module, which centralises
//! `tracing` setup so every binary and integration test emits into the same
//! rolling file sink. The crate is kept dependency-light so anything in the
//! workspace can pull it in.

pub mod observability;
