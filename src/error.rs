//! Error types for cdp-agentkit-rs

use thiserror::Error;

/// Result type alias using [`AgentkitError`]
pub type Result<T> = std::result::Result<T, AgentkitError>;

/// Main error type for the adapter
#[derive(Debug, Error)]
pub enum AgentkitError {
    /// No wallet SDK implementation is available to the process
    #[error("CDP SDK is not available: {0}")]
    SdkUnavailable(String),

    /// A required credential was found in neither overrides nor environment
    #[error("missing credential: set `{0}` or pass it explicitly")]
    MissingCredential(&'static str),

    /// Configuration validation error
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Error surfaced by the wallet SDK
    #[error("wallet SDK error: {0}")]
    Sdk(String),

    /// API error from a model provider
    #[error("API error from {provider}: {message}")]
    Api { provider: String, message: String },

    /// HTTP request error
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
