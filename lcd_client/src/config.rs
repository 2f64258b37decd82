use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::LcdClientError;

/// Defines at which point of the transaction processing `broadcast_tx` returns.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BroadcastMode {
    /// Wait for the transaction to be included in a block.
    #[default]
    Block,
    /// Wait for CheckTx.
    Sync,
    /// Return right away.
    Async,
}

impl BroadcastMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            BroadcastMode::Block => "block",
            BroadcastMode::Sync => "sync",
            BroadcastMode::Async => "async",
        }
    }
}

impl fmt::Display for BroadcastMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BroadcastMode {
    type Err = LcdClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "block" => Ok(BroadcastMode::Block),
            "sync" => Ok(BroadcastMode::Sync),
            "async" => Ok(BroadcastMode::Async),
            other => Err(LcdClientError::InvalidConfig(format!(
                "unknown broadcast mode '{}'",
                other
            ))),
        }
    }
}

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct ConnectionOptions {
    /// Base URL of the LCD API (sometimes called REST server or REST API)
    pub api_url: String,
    #[serde(default)]
    pub broadcast_mode: BroadcastMode,
}

impl ConnectionOptions {
    pub fn new(api_url: &str) -> Self {
        ConnectionOptions {
            api_url: api_url.to_string(),
            broadcast_mode: BroadcastMode::default(),
        }
    }

    pub fn with_broadcast_mode(mut self, broadcast_mode: BroadcastMode) -> Self {
        self.broadcast_mode = broadcast_mode;
        self
    }

    /// Parses and checks the API URL. Only absolute http(s) URLs are accepted.
    pub(crate) fn base_url(&self) -> Result<Url, LcdClientError> {
        let url = Url::parse(&self.api_url)?;

        match url.scheme() {
            "http" | "https" => Ok(url),
            scheme => Err(LcdClientError::InvalidConfig(format!(
                "unsupported scheme '{}' in api url {}",
                scheme, self.api_url
            ))),
        }
    }
}
