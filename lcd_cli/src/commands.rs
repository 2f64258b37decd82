//! LcdCli Subcommands

mod blocks;
mod call;
mod node_info;
mod txs;

use self::{
    blocks::BlocksCmd,
    call::CallCmd,
    node_info::NodeInfoCmd,
    txs::{BroadcastCmd, EncodeCmd, TxCmd, TxsCmd},
};
use crate::{
    config::{LcdCliConfig, CONFIG_FILE},
    error::Error,
    prelude::*,
};
use abscissa_core::{Command, Configurable, FrameworkError, Runnable};
use clap::Parser;
use lcd_client::{BroadcastMode, LcdClient};
use serde::Serialize;
use serde_json::Value;
use std::{fs, future::Future, path::Path, path::PathBuf, process};

/// LcdCli Subcommands
/// Subcommands need to be listed in an enum.
#[derive(Command, Debug, Parser, Runnable)]
pub enum LcdCliCmd {
    /// Query a block, the latest one unless a height is given
    Blocks(BlocksCmd),
    /// Query node and application version information
    NodeInfo(NodeInfoCmd),
    /// Get a transaction by hash
    Tx(TxCmd),
    /// Search transactions, e.g. `message.sender=cosmos1...&limit=10`
    Txs(TxsCmd),
    /// Amino-encode a transaction read from a JSON file
    Encode(EncodeCmd),
    /// Broadcast a signed transaction read from a JSON file
    Broadcast(BroadcastCmd),
    /// Call a method of an extension module
    Call(CallCmd),
}

/// Entry point for the application. It needs to be a struct to allow using subcommands!
#[derive(Command, Debug, Parser)]
#[clap(author, about, version)]
pub struct EntryPoint {
    #[clap(subcommand)]
    cmd: LcdCliCmd,

    /// Enable verbose logging
    #[clap(short, long)]
    pub verbose: bool,

    /// Use the specified config file
    #[clap(short, long)]
    pub config: Option<String>,

    /// LCD API URL, overrides the config file
    #[clap(long)]
    pub api_url: Option<String>,

    /// Broadcast mode (block, sync or async), overrides the config file
    #[clap(long)]
    pub mode: Option<BroadcastMode>,
}

impl Runnable for EntryPoint {
    fn run(&self) {
        self.cmd.run()
    }
}

/// This trait allows you to define how application configuration is loaded.
impl Configurable<LcdCliConfig> for EntryPoint {
    /// Location of the configuration file. An explicitly given file must
    /// exist; the default one is only used when present.
    fn config_path(&self) -> Option<PathBuf> {
        match &self.config {
            Some(path) => Some(PathBuf::from(path)),
            None => {
                let path = PathBuf::from(CONFIG_FILE);
                if path.exists() {
                    Some(path)
                } else {
                    None
                }
            }
        }
    }

    /// Apply command-line overrides to the loaded config.
    fn process_config(&self, mut config: LcdCliConfig) -> Result<LcdCliConfig, FrameworkError> {
        if let Some(api_url) = &self.api_url {
            config.connection.api_url = api_url.clone();
        }
        if let Some(mode) = self.mode {
            config.connection.broadcast_mode = mode;
        }

        Ok(config)
    }
}

/// Builds a client from the loaded configuration.
fn connect() -> Result<LcdClient, Error> {
    let config = APP.config();

    Ok(LcdClient::new(config.connection.clone())?)
}

fn read_json(path: &Path) -> Result<Value, Error> {
    let content = fs::read_to_string(path)?;

    Ok(serde_json::from_str(&content)?)
}

/// Runs `query` on the application's runtime and prints its result as JSON.
/// Exits with status 1 on failure.
fn run_and_print<F, T>(query: F)
where
    F: Future<Output = Result<T, Error>>,
    T: Serialize,
{
    let result = abscissa_tokio::run(&APP, query).unwrap_or_else(|e| {
        status_err!("executor exited with error: {}", e);
        process::exit(1);
    });

    match result {
        Ok(data) => {
            let data = serde_json::to_string_pretty(&data).unwrap_or_else(|err| {
                status_err!("Can't convert response to JSON: {}", err);
                process::exit(1);
            });
            println!("{}", data)
        }
        Err(err) => {
            status_err!("{}", err);
            process::exit(1);
        }
    }
}
