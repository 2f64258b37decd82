//! Extensions for common Cosmos SDK modules. Each `setup_*` function is an extension factory
//! to be passed to [`LcdClient::with_extensions`] or [`ClientBuilder::extension`](crate::extension::ClientBuilder::extension).
use serde::{Deserialize, Serialize};

use crate::{
    client::{endpoints::require_key, LcdClient, NO_QUERY},
    error::LcdClientError,
    extension::{Args, Method},
};

pub mod auth;
pub mod bank;
pub mod supply;

pub use auth::setup_auth_extension;
pub use bank::setup_bank_extension;
pub use supply::setup_supply_extension;

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

/// Most module queries answer with `{ "height": ..., "result": ... }`.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct WrappedResponse<T> {
    pub height: String,
    pub result: T,
}

/// A GET query against `client` whose path is computed from the call's arguments.
pub(crate) fn module_query<P>(client: &LcdClient, endpoint: &'static str, path: P) -> Method
where
    P: Fn(&Args) -> Result<String, LcdClientError> + Send + Sync + 'static,
{
    let client = client.clone();

    Method::new(move |args| {
        let client = client.clone();
        let path = path(&args);
        async move {
            let data = client.get(&path?, NO_QUERY).await?;
            require_key(endpoint, "result", &data)?;

            Ok(data)
        }
    })
}
