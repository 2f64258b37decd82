#![allow(dead_code)]

use lcd_client::{BroadcastMode, ConnectionOptions, LcdClient};
use serde_json::{json, Value};
use wiremock::{
    matchers::{method, path},
    Mock, MockServer, ResponseTemplate,
};

/// Chain ID reported by the mock LCD
pub const CHAIN_ID: &str = "testing";

pub const ADDRESS: &str = "cosmos1pkptre7fdkl6gfrzlesjjvhxhlc3r4gmmk8rs6";

pub fn options(server: &MockServer) -> ConnectionOptions {
    ConnectionOptions::new(&server.uri())
}

pub fn client(server: &MockServer, broadcast_mode: BroadcastMode) -> LcdClient {
    LcdClient::new(options(server).with_broadcast_mode(broadcast_mode))
        .expect("failed to create client")
}

/// Serves `body` with status 200 for GET requests to `route`.
pub async fn serve_get(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn serve_get_response(server: &MockServer, route: &str, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(response)
        .mount(server)
        .await;
}

pub fn block_body(height: u64) -> Value {
    json!({
        "block_id": { "hash": "D2E6A0F3", "parts": { "total": "1", "hash": "8A1C" } },
        "block": {
            "header": {
                "version": { "block": "10", "app": "0" },
                "chain_id": CHAIN_ID,
                "height": height.to_string(),
                "time": "2020-09-18T12:00:00.000000000Z",
                "proposer_address": "63D2D3E5"
            },
            "data": { "txs": ["CpIBCo8B"] },
            "evidence": { "evidence": null },
            "last_commit": { "height": (height - 1).to_string() }
        }
    })
}

pub fn tx_body(hash: &str) -> Value {
    json!({
        "height": "5",
        "txhash": hash,
        "raw_log": "[]",
        "logs": [{ "msg_index": 0, "log": "", "events": [] }],
        "gas_wanted": "200000",
        "gas_used": "48612",
        "tx": {
            "type": "cosmos-sdk/StdTx",
            "value": { "msg": [], "fee": { "amount": [], "gas": "200000" }, "signatures": [], "memo": "" }
        },
        "timestamp": "2020-09-18T12:00:05Z"
    })
}

pub fn std_tx() -> Value {
    json!({
        "msg": [{
            "type": "cosmos-sdk/MsgSend",
            "value": {
                "from_address": ADDRESS,
                "to_address": "cosmos1t70qnpr0az8tf7py83m4ue5y89w58lkjmx0yq2",
                "amount": [{ "denom": "ucosm", "amount": "1234" }]
            }
        }],
        "fee": { "amount": [{ "denom": "ucosm", "amount": "5000" }], "gas": "890000" },
        "signatures": [{ "pub_key": { "type": "tendermint/PubKeySecp256k1", "value": "A08EGB7r" }, "signature": "NZ7A" }],
        "memo": ""
    })
}
