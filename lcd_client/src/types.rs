//! Response payloads of the core LCD endpoints.
//!
//! Each response keeps the body exactly as the LCD sent it (`.0`) and serializes back to it.
//! The accessors give a typed view of the commonly used fields; they return `None` when a node
//! leaves a field out or sends it with another type. Numbers arrive as JSON strings from most
//! nodes and as JSON numbers from some, both are accepted.
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

use crate::{error::LcdClientError, utils::normalize_lcd_api_array};

/// Accepts a list or `null`, the latter becoming an empty list.
fn lcd_array<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<Vec<T>>::deserialize(deserializer).map(normalize_lcd_api_array)
}

fn str_at<'a>(value: &'a Value, pointer: &str) -> Option<&'a str> {
    value.pointer(pointer).and_then(Value::as_str)
}

fn u64_at(value: &Value, pointer: &str) -> Option<u64> {
    match value.pointer(pointer)? {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}

fn array_at<'a>(value: &'a Value, pointer: &str) -> &'a [Value] {
    value
        .pointer(pointer)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or_default()
}

fn logs_at(value: &Value, endpoint: &str) -> Result<Vec<Log>, LcdClientError> {
    match value.get("logs") {
        None | Some(Value::Null) => Ok(Vec::new()),
        Some(logs) => serde_json::from_value(logs.clone()).map_err(|source| {
            LcdClientError::Decode {
                endpoint: endpoint.to_string(),
                source,
            }
        }),
    }
}

// The /blocks endpoints

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BlockResponse(pub Value);

impl BlockResponse {
    pub fn block_hash(&self) -> Option<&str> {
        str_at(&self.0, "/block_id/hash")
    }

    pub fn chain_id(&self) -> Option<&str> {
        str_at(&self.0, "/block/header/chain_id")
    }

    pub fn height(&self) -> Option<u64> {
        u64_at(&self.0, "/block/header/height")
    }

    pub fn time(&self) -> Option<&str> {
        str_at(&self.0, "/block/header/time")
    }

    /// Base64 encoded transactions. Empty when the block has none, including `"txs": null`.
    pub fn txs(&self) -> Vec<&str> {
        array_at(&self.0, "/block/data/txs")
            .iter()
            .filter_map(Value::as_str)
            .collect()
    }

    pub fn last_commit(&self) -> Option<&Value> {
        self.0.pointer("/block/last_commit")
    }
}

// The /node_info endpoint

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NodeInfoResponse(pub Value);

impl NodeInfoResponse {
    /// The chain ID
    pub fn network(&self) -> Option<&str> {
        str_at(&self.0, "/node_info/network")
    }

    pub fn moniker(&self) -> Option<&str> {
        str_at(&self.0, "/node_info/moniker")
    }

    /// Tendermint version of the node
    pub fn node_version(&self) -> Option<&str> {
        str_at(&self.0, "/node_info/version")
    }

    pub fn tx_index(&self) -> Option<&str> {
        str_at(&self.0, "/node_info/other/tx_index")
    }

    pub fn server_name(&self) -> Option<&str> {
        str_at(&self.0, "/application_version/server_name")
    }

    pub fn application_version(&self) -> Option<&str> {
        str_at(&self.0, "/application_version/version")
    }
}

// The /txs endpoints

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Attribute {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, deserialize_with = "lcd_array")]
    pub attributes: Vec<Attribute>,
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct Log {
    #[serde(default)]
    pub msg_index: u32,
    #[serde(default)]
    pub log: String,
    #[serde(default, deserialize_with = "lcd_array")]
    pub events: Vec<Event>,
}

/// A transaction as returned by `/txs/{hash}` and inside search results.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TxsResponse(pub Value);

impl TxsResponse {
    pub fn txhash(&self) -> Option<&str> {
        str_at(&self.0, "/txhash")
    }

    pub fn height(&self) -> Option<u64> {
        u64_at(&self.0, "/height")
    }

    /// Missing for success
    pub fn code(&self) -> Option<u64> {
        u64_at(&self.0, "/code")
    }

    pub fn raw_log(&self) -> Option<&str> {
        str_at(&self.0, "/raw_log")
    }

    pub fn logs(&self) -> Result<Vec<Log>, LcdClientError> {
        logs_at(&self.0, "tx_by_id")
    }

    /// The transaction itself, as opaque JSON
    pub fn tx(&self) -> Option<&Value> {
        self.0.get("tx")
    }

    pub fn timestamp(&self) -> Option<&str> {
        str_at(&self.0, "/timestamp")
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct SearchTxsResponse(pub Value);

impl SearchTxsResponse {
    pub fn total_count(&self) -> Option<u64> {
        u64_at(&self.0, "/total_count")
    }

    pub fn count(&self) -> Option<u64> {
        u64_at(&self.0, "/count")
    }

    pub fn page_number(&self) -> Option<u64> {
        u64_at(&self.0, "/page_number")
    }

    pub fn page_total(&self) -> Option<u64> {
        u64_at(&self.0, "/page_total")
    }

    pub fn txs(&self) -> Vec<TxsResponse> {
        array_at(&self.0, "/txs")
            .iter()
            .cloned()
            .map(TxsResponse)
            .collect()
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct EncodeTxResponse(pub Value);

impl EncodeTxResponse {
    /// Base64-encoded amino-binary encoded representation
    pub fn tx(&self) -> Option<&str> {
        str_at(&self.0, "/tx")
    }
}

#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct BroadcastTxsResponse(pub Value);

impl BroadcastTxsResponse {
    pub fn txhash(&self) -> Option<&str> {
        str_at(&self.0, "/txhash")
    }

    /// Zero until the transaction is included in a block
    pub fn height(&self) -> Option<u64> {
        u64_at(&self.0, "/height")
    }

    pub fn code(&self) -> Option<u64> {
        u64_at(&self.0, "/code")
    }

    pub fn codespace(&self) -> Option<&str> {
        str_at(&self.0, "/codespace")
    }

    pub fn raw_log(&self) -> Option<&str> {
        str_at(&self.0, "/raw_log")
    }

    pub fn logs(&self) -> Result<Vec<Log>, LcdClientError> {
        logs_at(&self.0, "broadcast_tx")
    }

    /// A missing or zero code means the transaction was accepted.
    pub fn is_success(&self) -> bool {
        self.code().unwrap_or(0) == 0
    }
}
