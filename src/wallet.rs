//! Wallet handle and serialized wallet data
//!
//! The wallet itself lives in the external SDK; this module only defines the
//! seam the adapter holds it through and the opaque blob it round-trips for
//! persistence.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::Result;

/// Opaque handle to a blockchain wallet managed by the external SDK
///
/// The handle is owned exclusively by the adapter that created or restored
/// it and is dropped with it.
pub trait WalletHandle: Send + Sync {
    /// Exportable representation of the wallet's secret material and metadata
    fn export_data(&self) -> Result<WalletData>;

    /// Identifier of the wallet's default address
    fn default_address_id(&self) -> String;
}

/// Opaque exportable/importable wallet representation
///
/// The adapter never interprets the keys; they belong to the SDK. Unknown
/// fields survive a round-trip untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WalletData(pub Map<String, Value>);

impl WalletData {
    /// Parse wallet data from its serialized JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AgentkitError::Json`] when the string is not a JSON
    /// object.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serialize wallet data back to its JSON form.
    ///
    /// # Errors
    ///
    /// Returns [`crate::AgentkitError::Json`] on serialization failure.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_wallet_data_round_trip_preserves_unknown_fields() {
        let json = r#"{"wallet_id":"w-1","seed":"deadbeef","future_field":42}"#;
        let data = WalletData::from_json(json).unwrap();

        assert_eq!(data.0.get("wallet_id"), Some(&Value::from("w-1")));
        assert_eq!(data.0.get("future_field"), Some(&Value::from(42)));

        let reparsed = WalletData::from_json(&data.to_json().unwrap()).unwrap();
        assert_eq!(reparsed, data);
    }

    #[test]
    fn test_wallet_data_rejects_non_object() {
        assert!(WalletData::from_json("[1,2,3]").is_err());
        assert!(WalletData::from_json("not json").is_err());
    }
}
