//! Action system for the agent framework
//!
//! Dispatch is explicit rather than reflective: an action declares whether it
//! is wallet-bound or plain when it is registered, and the adapter picks the
//! call shape from that declaration.

pub mod wallet_details;

use std::{collections::HashMap, sync::Arc};

use serde_json::{Map, Value};

use crate::{error::Result, wallet::WalletHandle};

pub use self::wallet_details::GetWalletDetails;

/// Named arguments passed to an action
pub type ActionArgs = Map<String, Value>;

/// An action that runs against the adapter's wallet
pub trait WalletAction: Send + Sync {
    /// Action name used for registration and lookup
    fn name(&self) -> &str;

    /// Run the action with the owned wallet prepended to the named arguments.
    ///
    /// # Errors
    ///
    /// Action-specific; propagated to the caller unchanged.
    fn run(&self, wallet: &dyn WalletHandle, args: &ActionArgs) -> Result<String>;
}

/// An action that needs no wallet access
pub trait PlainAction: Send + Sync {
    /// Action name used for registration and lookup
    fn name(&self) -> &str;

    /// Run the action with only the named arguments.
    ///
    /// # Errors
    ///
    /// Action-specific; propagated to the caller unchanged.
    fn run(&self, args: &ActionArgs) -> Result<String>;
}

/// A registered action together with its declared call shape
#[derive(Clone)]
pub enum AgentAction {
    Wallet(Arc<dyn WalletAction>),
    Plain(Arc<dyn PlainAction>),
}

impl AgentAction {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Wallet(action) => action.name(),
            Self::Plain(action) => action.name(),
        }
    }
}

/// Registry mapping action names to their declared call shapes
#[derive(Default)]
pub struct ActionRegistry {
    actions: HashMap<String, AgentAction>,
}

impl ActionRegistry {
    /// Create a new empty action registry
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
        }
    }

    /// Register an action under its declared name, replacing any previous one
    pub fn register(&mut self, action: AgentAction) {
        self.actions.insert(action.name().to_string(), action);
    }

    /// Get an action by name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AgentAction> {
        self.actions.get(name)
    }

    /// List all registered action names
    #[must_use]
    pub fn list(&self) -> Vec<String> {
        self.actions.keys().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct Echo;

    impl PlainAction for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        fn run(&self, args: &ActionArgs) -> Result<String> {
            Ok(args
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string())
        }
    }

    #[test]
    fn test_registry_register_and_get() {
        let mut registry = ActionRegistry::new();
        registry.register(AgentAction::Plain(Arc::new(Echo)));
        registry.register(AgentAction::Wallet(Arc::new(GetWalletDetails)));

        assert!(registry.get("echo").is_some());
        assert!(registry.get("get_wallet_details").is_some());
        assert!(registry.get("missing").is_none());

        let mut names = registry.list();
        names.sort();
        assert_eq!(names, vec!["echo", "get_wallet_details"]);
    }

    #[test]
    fn test_action_name_matches_both_shapes() {
        let plain = AgentAction::Plain(Arc::new(Echo));
        let wallet = AgentAction::Wallet(Arc::new(GetWalletDetails));

        assert_eq!(plain.name(), "echo");
        assert_eq!(wallet.name(), "get_wallet_details");
    }
}
