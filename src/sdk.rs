//! Wallet SDK seam and global registration
//!
//! The concrete CDP SDK is an external collaborator. An implementation is
//! installed once per process; constructing the adapter before installation
//! fails with [`AgentkitError::SdkUnavailable`]. Global SDK configuration is
//! likewise a one-time step, separated from per-wallet construction so that
//! building several adapters never reconfigures the SDK.

use std::sync::Arc;

use once_cell::sync::OnceCell;
use parking_lot::RwLock;
use tracing::info;

use crate::{
    error::{AgentkitError, Result},
    wallet::{WalletData, WalletHandle},
};

/// Source identifier reported to the SDK at configure time
pub const DEFAULT_SOURCE: &str = "cdp-agentkit-rs";

/// Credentials and provenance passed to the SDK's global configuration
#[derive(Debug, Clone)]
pub struct SdkCredentials {
    pub api_key_name: String,
    pub private_key: String,
    /// Fixed source identifier for this package
    pub source: String,
    /// This package's version string
    pub source_version: String,
}

impl SdkCredentials {
    #[must_use]
    pub fn new(api_key_name: impl Into<String>, private_key: impl Into<String>) -> Self {
        Self {
            api_key_name: api_key_name.into(),
            private_key: private_key.into(),
            source: DEFAULT_SOURCE.to_string(),
            source_version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }
}

/// Interface to the external wallet SDK
pub trait WalletSdk: Send + Sync {
    /// Configure the SDK globally with resolved credentials.
    ///
    /// # Errors
    ///
    /// Propagates whatever the SDK reports; the adapter does not translate it.
    fn configure(&self, credentials: &SdkCredentials) -> Result<()>;

    /// Create a new wallet scoped to the given network.
    ///
    /// # Errors
    ///
    /// Propagates SDK failures unchanged.
    fn create_wallet(&self, network_id: &str) -> Result<Box<dyn WalletHandle>>;

    /// Restore a wallet from previously exported data.
    ///
    /// # Errors
    ///
    /// Propagates SDK failures unchanged, including rejection of malformed
    /// wallet data.
    fn import_wallet(&self, data: &WalletData) -> Result<Box<dyn WalletHandle>>;
}

static SDK: RwLock<Option<Arc<dyn WalletSdk>>> = RwLock::new(None);
static CONFIGURED: OnceCell<()> = OnceCell::new();

/// Register the concrete SDK implementation for this process.
pub fn install(sdk: Arc<dyn WalletSdk>) {
    *SDK.write() = Some(sdk);
}

/// Currently installed SDK, if any.
#[must_use]
pub fn installed() -> Option<Arc<dyn WalletSdk>> {
    SDK.read().clone()
}

/// Initialization error raised when no SDK implementation is installed.
#[must_use]
pub fn unavailable() -> AgentkitError {
    AgentkitError::SdkUnavailable(
        "no WalletSdk implementation installed; register one with \
         `cdp_agentkit_rs::sdk::install` before constructing the wrapper"
            .to_string(),
    )
}

/// Configure the SDK at most once per process.
///
/// The first successful call wins; later calls are no-ops even with
/// different credentials.
///
/// # Errors
///
/// Propagates the SDK's configuration failure; a failed attempt leaves the
/// guard unset so a later call can retry.
pub fn ensure_configured(sdk: &Arc<dyn WalletSdk>, credentials: &SdkCredentials) -> Result<()> {
    CONFIGURED.get_or_try_init(|| {
        info!(
            source = %credentials.source,
            api_key_name = %credentials.api_key_name,
            "configuring wallet SDK"
        );
        sdk.configure(credentials)
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct CountingSdk {
        configure_calls: AtomicUsize,
    }

    impl WalletSdk for CountingSdk {
        fn configure(&self, _credentials: &SdkCredentials) -> Result<()> {
            self.configure_calls.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }

        fn create_wallet(&self, _network_id: &str) -> Result<Box<dyn WalletHandle>> {
            Err(AgentkitError::Sdk("not under test".to_string()))
        }

        fn import_wallet(&self, _data: &WalletData) -> Result<Box<dyn WalletHandle>> {
            Err(AgentkitError::Sdk("not under test".to_string()))
        }
    }

    #[test]
    fn test_credentials_carry_source_and_version() {
        let credentials = SdkCredentials::new("key-name", "private-key");

        assert_eq!(credentials.source, DEFAULT_SOURCE);
        assert_eq!(credentials.source_version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_ensure_configured_runs_at_most_once() {
        // The guard is process-wide: another test may already have tripped
        // it, so assert the delta rather than an absolute count.
        let sdk = Arc::new(CountingSdk::default());
        let dyn_sdk: Arc<dyn WalletSdk> = sdk.clone();
        let credentials = SdkCredentials::new("key-name", "private-key");

        ensure_configured(&dyn_sdk, &credentials).unwrap();
        let after_first = sdk.configure_calls.load(Ordering::SeqCst);

        ensure_configured(&dyn_sdk, &credentials).unwrap();
        let after_second = sdk.configure_calls.load(Ordering::SeqCst);

        assert!(after_first <= 1);
        assert_eq!(after_first, after_second);
    }
}
