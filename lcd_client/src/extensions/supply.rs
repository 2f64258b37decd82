use crate::{
    client::LcdClient,
    extension::{ExtensionModule, Namespace},
    utils::{assert_defined, encode_path_segment},
};

use super::{module_query, Coin, WrappedResponse};

pub type TotalSupplyAllResponse = WrappedResponse<Vec<Coin>>;
/// The amount is a stringified integer.
pub type TotalSupplyResponse = WrappedResponse<String>;

/// Namespace `supply`: `total_all`, `total` (params: `denom`).
pub fn setup_supply_extension(base: &LcdClient) -> ExtensionModule {
    let total_all = module_query(base, "supply.total_all", |_| Ok("/supply/total".to_string()));
    let total = module_query(base, "supply.total", |args| {
        let denom = assert_defined(args.param("denom"), "supply.total requires a denom")?;
        Ok(format!("/supply/total/{}", encode_path_segment(denom)))
    });

    ExtensionModule::new().with_namespace(
        "supply",
        Namespace::new()
            .with_method("total_all", total_all)
            .with_method("total", total),
    )
}
