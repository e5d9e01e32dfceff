//! Built-in wallet-bound action reporting wallet details

use super::{ActionArgs, WalletAction};
use crate::{error::Result, wallet::WalletHandle};

/// Description exposed to agent frameworks when listing this action
pub const GET_WALLET_DETAILS_PROMPT: &str =
    "This tool will get details about the MPC Wallet, including its default address.";

/// Reports the wallet's default address
pub struct GetWalletDetails;

impl WalletAction for GetWalletDetails {
    fn name(&self) -> &str {
        "get_wallet_details"
    }

    fn run(&self, wallet: &dyn WalletHandle, _args: &ActionArgs) -> Result<String> {
        Ok(format!(
            "Wallet default address: {}",
            wallet.default_address_id()
        ))
    }
}
