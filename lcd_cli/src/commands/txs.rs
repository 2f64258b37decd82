use super::{connect, read_json, run_and_print};
use crate::{error::Error, prelude::*};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use std::path::PathBuf;

#[derive(Command, Debug, Parser)]
pub struct TxCmd {
    /// Transaction hash
    hash: String,
}

impl Runnable for TxCmd {
    fn run(&self) {
        run_and_print(async {
            let client = connect()?;

            Ok::<_, Error>(client.tx_by_id(&self.hash).await?)
        })
    }
}

#[derive(Command, Debug, Parser)]
pub struct TxsCmd {
    /// Raw query string
    query: String,
}

impl Runnable for TxsCmd {
    fn run(&self) {
        run_and_print(async {
            let client = connect()?;

            Ok::<_, Error>(client.txs_query(&self.query).await?)
        })
    }
}

#[derive(Command, Debug, Parser)]
pub struct EncodeCmd {
    /// JSON file holding the transaction
    file: PathBuf,
}

impl Runnable for EncodeCmd {
    fn run(&self) {
        run_and_print(async {
            let tx = read_json(&self.file)?;
            let client = connect()?;

            Ok::<_, Error>(client.encode_tx(&tx).await?)
        })
    }
}

#[derive(Command, Debug, Parser)]
pub struct BroadcastCmd {
    /// JSON file holding the signed transaction
    file: PathBuf,
}

impl Runnable for BroadcastCmd {
    fn run(&self) {
        run_and_print(async {
            let tx = read_json(&self.file)?;
            let client = connect()?;
            let response = client.broadcast_tx(&tx).await?;
            if !response.is_success() {
                status_warn!(
                    "transaction {} failed with code {}",
                    response.txhash().unwrap_or_default(),
                    response.code().unwrap_or_default()
                );
            }

            Ok::<_, Error>(response)
        })
    }
}
