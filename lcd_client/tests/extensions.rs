mod utils;

use assay::assay;
use lcd_client::{
    extensions::{
        auth::AuthAccountsResponse, bank::BankBalancesResponse, setup_auth_extension,
        setup_bank_extension, setup_supply_extension, supply::TotalSupplyResponse, Coin,
    },
    Args, ClientBuilder, ExtensionModule, LcdClient, LcdClientError,
};
use serde_json::json;
use utils::*;
use wiremock::{
    matchers::{body_json, method, path, query_param},
    Mock, MockServer, ResponseTemplate,
};

#[assay]
async fn builtin_extensions() {
    let server = MockServer::start().await;
    serve_get(
        &server,
        &format!("/auth/accounts/{}", ADDRESS),
        json!({
            "height": "12",
            "result": {
                "type": "cosmos-sdk/Account",
                "value": {
                    "address": ADDRESS,
                    "coins": [{ "denom": "ucosm", "amount": "1000000" }],
                    "public_key": "",
                    "account_number": "3",
                    "sequence": "7"
                }
            }
        }),
    )
    .await;
    serve_get(
        &server,
        &format!("/bank/balances/{}", ADDRESS),
        json!({ "height": "12", "result": [{ "denom": "ucosm", "amount": "1000000" }] }),
    )
    .await;
    serve_get(
        &server,
        "/supply/total/ucosm",
        json!({ "height": "12", "result": "2100000000" }),
    )
    .await;

    let client = LcdClient::with_extensions(
        options(&server),
        &[&setup_auth_extension, &setup_bank_extension, &setup_supply_extension],
    )
    .expect("failed to compose client");

    assert_eq!(
        client.namespace_keys().collect::<Vec<_>>(),
        vec!["auth", "bank", "supply"]
    );

    let account: AuthAccountsResponse = client
        .call_as("auth", "account", Args::new().with_param("address", ADDRESS))
        .await
        .expect("failed to query account");
    assert_eq!(account.result.value.account_number, "3");
    assert_eq!(account.result.value.sequence, "7");

    let balances: BankBalancesResponse = client
        .call_as("bank", "balances", Args::new().with_param("address", ADDRESS))
        .await
        .expect("failed to query balances");
    assert_eq!(
        balances.result,
        vec![Coin {
            denom: "ucosm".to_string(),
            amount: "1000000".to_string()
        }]
    );

    let supply: TotalSupplyResponse = client
        .call_as("supply", "total", Args::new().with_param("denom", "ucosm"))
        .await
        .expect("failed to query supply");
    assert_eq!(supply.result, "2100000000");
}

#[assay]
async fn builtin_extensions_check_arguments_and_shape() {
    let server = MockServer::start().await;
    serve_get(&server, "/supply/total", json!({ "height": "12" })).await;

    let client = ClientBuilder::new(options(&server))
        .extension(setup_supply_extension)
        .build()
        .expect("failed to compose client");

    assert!(matches!(
        client.call("supply", "total", Args::new()).await,
        Err(LcdClientError::Assertion(_))
    ));
    match client.call("supply", "total_all", Args::new()).await {
        Err(LcdClientError::MalformedResponse { endpoint }) => {
            assert_eq!(endpoint, "supply.total_all")
        }
        other => panic!("unexpected result: {:?}", other),
    }
}

#[assay]
async fn builtin_extensions_encode_path_params() {
    let server = MockServer::start().await;
    serve_get(
        &server,
        "/supply/total/ibc%2F27394FB0",
        json!({ "height": "12", "result": "77" }),
    )
    .await;

    let client = ClientBuilder::new(options(&server))
        .extension(setup_supply_extension)
        .build()
        .expect("failed to compose client");

    let supply: TotalSupplyResponse = client
        .call_as("supply", "total", Args::new().with_param("denom", "ibc/27394FB0"))
        .await
        .expect("failed to query supply");
    assert_eq!(supply.result, "77");
}

#[assay]
async fn declared_extensions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/staking/validators"))
        .and(query_param("status", "bonded"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "height": "12",
            "result": [{ "operator_address": "cosmosvaloper1xyz" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/wasm/contract/cosmos1contract/query"))
        .and(body_json(json!({ "balance": { "address": ADDRESS } })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "result": { "balance": "9" } })))
        .mount(&server)
        .await;

    let staking = |_: &LcdClient| {
        ExtensionModule::declared(json!({
            "staking": {
                "validators": { "path": "/staking/validators", "expect": "result" }
            },
            "wasm": {
                "query": { "path": "/wasm/contract/{contract}/query", "method": "POST" }
            }
        }))
    };
    let client = ClientBuilder::new(options(&server))
        .extension(setup_bank_extension)
        .extension(staking)
        .build()
        .expect("failed to compose client");

    let validators = client
        .call(
            "staking",
            "validators",
            Args::new().with_query("status", "bonded"),
        )
        .await
        .expect("failed to query validators");
    assert_eq!(validators["result"][0]["operator_address"], "cosmosvaloper1xyz");

    let balance = client
        .call(
            "wasm",
            "query",
            Args::new()
                .with_param("contract", "cosmos1contract")
                .with_body(json!({ "balance": { "address": ADDRESS } })),
        )
        .await
        .expect("failed to query contract");
    assert_eq!(balance, json!({ "result": { "balance": "9" } }));

    assert!(matches!(
        client
            .call("wasm", "query", Args::new().with_param("contract", "cosmos1contract"))
            .await,
        Err(LcdClientError::InvalidArgument(_))
    ));
}

#[assay]
async fn declared_extension_server_errors() {
    let server = MockServer::start().await;
    serve_get_response(
        &server,
        "/gov/proposals/99",
        ResponseTemplate::new(404).set_body_json(json!({ "error": "unknown proposal 99" })),
    )
    .await;

    let gov = |_: &LcdClient| {
        ExtensionModule::declared(json!({
            "gov": { "proposal": { "path": "/gov/proposals/{id}", "expect": "result" } }
        }))
    };
    let client = ClientBuilder::new(options(&server))
        .extension(gov)
        .build()
        .expect("failed to compose client");

    let err = client
        .call("gov", "proposal", Args::new().with_param("id", 99))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "unknown proposal 99 (HTTP 404)");
}

#[assay]
fn invalid_declared_module_aborts_composition() {
    let broken = |_: &LcdClient| {
        ExtensionModule::declared(json!({
            "staking": { "validators": { "path": "/staking/validators" } },
            "mint": 3
        }))
    };

    let err = ClientBuilder::new(lcd_client::ConnectionOptions::new("http://localhost:1317"))
        .extension(setup_bank_extension)
        .extension(broken)
        .build()
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        "Module must be a non-null object. Found type number for module \"mint\"."
    );
}
