use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{
    client::LcdClient,
    extension::{ExtensionModule, Namespace},
    utils::{assert_defined, encode_path_segment},
};

use super::{module_query, Coin, WrappedResponse};

pub type AuthAccountsResponse = WrappedResponse<AccountEnvelope>;

/// An account wrapped in its amino type/value container.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct AccountEnvelope {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: BaseAccount,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct BaseAccount {
    /// Bech32 account address
    pub address: String,
    pub coins: Vec<Coin>,
    /// Bech32 encoded pubkey, if the account has signed before
    pub public_key: Value,
    pub account_number: String,
    pub sequence: String,
}

/// Namespace `auth`: `account` (params: `address`).
pub fn setup_auth_extension(base: &LcdClient) -> ExtensionModule {
    let account = module_query(base, "auth.account", |args| {
        let address = assert_defined(args.param("address"), "auth.account requires an address")?;
        Ok(format!("/auth/accounts/{}", encode_path_segment(address)))
    });

    ExtensionModule::new().with_namespace("auth", Namespace::new().with_method("account", account))
}
