use crate::{
    client::LcdClient,
    extension::{ExtensionModule, Namespace},
    utils::{assert_defined, encode_path_segment},
};

use super::{module_query, Coin, WrappedResponse};

pub type BankBalancesResponse = WrappedResponse<Vec<Coin>>;

/// Namespace `bank`: `balances` (params: `address`).
pub fn setup_bank_extension(base: &LcdClient) -> ExtensionModule {
    let balances = module_query(base, "bank.balances", |args| {
        let address = assert_defined(args.param("address"), "bank.balances requires an address")?;
        Ok(format!("/bank/balances/{}", encode_path_segment(address)))
    });

    ExtensionModule::new().with_namespace("bank", Namespace::new().with_method("balances", balances))
}
