#![warn(unused_qualifications)]

use reqwest::header::{self, HeaderMap, HeaderValue};
use url::Url;

use crate::{
    config::{BroadcastMode, ConnectionOptions},
    error::LcdClientError,
};

pub mod endpoints;
pub mod transport;

pub use transport::NO_QUERY;

type HttpClient = reqwest::Client;

/// A client to the LCD's (light client daemon) API.
///
/// The LCD connects to Tendermint, encodes/decodes Amino data and provides a JSON interface
/// over HTTP. It cannot verify light client proofs, so using this client means trusting the
/// API provider as well as the network connection between client and API.
///
/// Cloning is cheap: clones share the underlying HTTP connection pool.
#[derive(Clone, Debug)]
pub struct LcdClient {
    http: HttpClient,
    api_url: Url,
    broadcast_mode: BroadcastMode,
}

impl LcdClient {
    pub fn new(options: ConnectionOptions) -> Result<LcdClient, LcdClientError> {
        let api_url = options.base_url()?;
        let http = new_http_client()?;

        Ok(LcdClient {
            http,
            api_url,
            broadcast_mode: options.broadcast_mode,
        })
    }

    pub fn api_url(&self) -> &Url {
        &self.api_url
    }

    pub fn broadcast_mode(&self) -> BroadcastMode {
        self.broadcast_mode
    }

    /// All paths are relative to the API URL, including any path prefix it carries.
    fn endpoint_url(&self, path: &str) -> String {
        format!("{}{}", self.api_url.as_str().trim_end_matches('/'), path)
    }
}

fn new_http_client() -> Result<HttpClient, LcdClientError> {
    let mut headers = HeaderMap::new();
    headers.insert(header::ACCEPT, HeaderValue::from_static("application/json"));

    HttpClient::builder()
        .default_headers(headers)
        .build()
        .map_err(|e| e.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assay::assay;

    #[assay]
    fn builds_endpoint_urls() {
        let client = LcdClient::new(ConnectionOptions::new("http://localhost:1317")).unwrap();
        assert_eq!(
            client.endpoint_url("/blocks/latest"),
            "http://localhost:1317/blocks/latest"
        );

        let client = LcdClient::new(ConnectionOptions::new("https://api.example.com/lcd/")).unwrap();
        assert_eq!(
            client.endpoint_url("/txs?tx.height=3"),
            "https://api.example.com/lcd/txs?tx.height=3"
        );
    }

    #[assay]
    fn keeps_broadcast_mode() {
        let options =
            ConnectionOptions::new("http://localhost:1317").with_broadcast_mode(BroadcastMode::Sync);
        let client = LcdClient::new(options).unwrap();

        assert_eq!(client.broadcast_mode(), BroadcastMode::Sync);
        assert_eq!(client.api_url().as_str(), "http://localhost:1317/");
    }

    #[assay]
    fn rejects_invalid_api_url() {
        let result = LcdClient::new(ConnectionOptions::new("localhost:1317"));

        assert!(matches!(result, Err(LcdClientError::InvalidConfig(_))));
    }
}
