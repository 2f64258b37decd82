//! The fixed LCD endpoints. Every response is checked for the top-level field the endpoint
//! contract promises and then returned as sent.
use serde::Serialize;
use serde_json::Value;

use crate::{
    config::BroadcastMode,
    error::LcdClientError,
    types::{
        BlockResponse, BroadcastTxsResponse, EncodeTxResponse, NodeInfoResponse,
        SearchTxsResponse, TxsResponse,
    },
    utils::{encode_path_segment, is_truthy},
};

use super::{LcdClient, NO_QUERY};

#[derive(Serialize)]
struct BroadcastTxsRequest<'a, T: ?Sized> {
    tx: &'a T,
    mode: BroadcastMode,
}

impl LcdClient {
    // The /blocks endpoints
    pub async fn blocks_latest(&self) -> Result<BlockResponse, LcdClientError> {
        let data = self.get("/blocks/latest", NO_QUERY).await?;

        checked("blocks_latest", "block", data).map(BlockResponse)
    }

    pub async fn blocks(&self, height: u64) -> Result<BlockResponse, LcdClientError> {
        let data = self.get(&format!("/blocks/{}", height), NO_QUERY).await?;

        checked("blocks", "block", data).map(BlockResponse)
    }

    // The /node_info endpoint
    pub async fn node_info(&self) -> Result<NodeInfoResponse, LcdClientError> {
        let data = self.get("/node_info", NO_QUERY).await?;

        checked("node_info", "node_info", data).map(NodeInfoResponse)
    }

    // The /txs endpoints
    pub async fn tx_by_id(&self, id: &str) -> Result<TxsResponse, LcdClientError> {
        let data = self.get(&format!("/txs/{}", encode_path_segment(id)), NO_QUERY).await?;

        checked("tx_by_id", "tx", data).map(TxsResponse)
    }

    /// Searches transactions. `query` is a raw query string such as
    /// `message.action=send&limit=10`.
    pub async fn txs_query(&self, query: &str) -> Result<SearchTxsResponse, LcdClientError> {
        let data = self.get(&format!("/txs?{}", query), NO_QUERY).await?;

        checked("txs_query", "txs", data).map(SearchTxsResponse)
    }

    /// Returns the amino encoding of the transaction, performed by the server.
    pub async fn encode_tx<T>(&self, tx: &T) -> Result<EncodeTxResponse, LcdClientError>
    where
        T: Serialize + ?Sized,
    {
        let data = self.post("/txs/encode", tx).await?;

        checked("encode_tx", "tx", data).map(EncodeTxResponse)
    }

    /// Broadcasts a signed transaction to the transaction pool.
    ///
    /// Depending on the client's broadcast mode, this might or might not wait for CheckTx or
    /// DeliverTx to be executed before returning. `tx` is a signed StdTx (not wrapped in a
    /// type/value container).
    pub async fn broadcast_tx<T>(&self, tx: &T) -> Result<BroadcastTxsResponse, LcdClientError>
    where
        T: Serialize + ?Sized,
    {
        let request = BroadcastTxsRequest {
            tx,
            mode: self.broadcast_mode,
        };
        let data = self.post("/txs", &request).await?;

        checked("broadcast_tx", "txhash", data).map(BroadcastTxsResponse)
    }
}

/// Fails with `MalformedResponse` unless `data` carries a truthy value under `key`.
pub(crate) fn require_key(endpoint: &str, key: &str, data: &Value) -> Result<(), LcdClientError> {
    match data.get(key) {
        Some(value) if is_truthy(value) => Ok(()),
        _ => Err(LcdClientError::MalformedResponse {
            endpoint: endpoint.to_string(),
        }),
    }
}

fn checked(endpoint: &str, key: &str, data: Value) -> Result<Value, LcdClientError> {
    require_key(endpoint, key, &data)?;

    Ok(data)
}
