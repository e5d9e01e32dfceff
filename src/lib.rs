//! cdp-agentkit-rs: CDP wallet & LLM adapter for agent frameworks
//!
//! This library provides a single configuration object that validates
//! environment-sourced credentials, owns a CDP wallet (created or restored
//! from exported data), selects a language-model backend, and dispatches
//! registered actions on behalf of an agent-orchestration framework.

#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions, clippy::too_many_lines)]

pub mod actions;
pub mod adapter;
pub mod config;
pub mod error;
pub mod sdk;
pub mod services;
pub mod wallet;

// Re-exports for convenience
pub use adapter::CdpAgentkitWrapper;
pub use error::{AgentkitError, Result};
