use super::{read_json, run_and_print};
use crate::{error::Error, prelude::*};
use abscissa_core::{Command, Runnable};
use clap::Parser;
use lcd_client::{
    extensions::{setup_auth_extension, setup_bank_extension, setup_supply_extension},
    Args, ClientBuilder, ExtendedClient, ExtensionModule, LcdClient,
};
use std::path::PathBuf;

#[derive(Command, Debug, Parser)]
pub struct CallCmd {
    /// Extension module, e.g. `bank`
    namespace: String,

    /// Method of the module, e.g. `balances`
    method: String,

    /// Path parameters as name=value pairs, e.g. `address=cosmos1...`
    params: Vec<String>,

    /// Query parameters as name=value pairs
    #[clap(short, long)]
    query: Vec<String>,

    /// JSON file holding the request body
    #[clap(short, long)]
    body: Option<PathBuf>,
}

impl CallCmd {
    fn args(&self) -> Result<Args, Error> {
        let mut args = Args::new();
        for param in &self.params {
            let (name, value) = parse_pair(param)?;
            args = args.with_param(name, value);
        }
        for query in &self.query {
            let (name, value) = parse_pair(query)?;
            args = args.with_query(name, value);
        }
        if let Some(path) = &self.body {
            args = args.with_body(read_json(path)?);
        }

        Ok(args)
    }
}

impl Runnable for CallCmd {
    fn run(&self) {
        run_and_print(async {
            let args = self.args()?;
            let client = compose()?;
            debug!(
                "calling {}.{} on {}",
                self.namespace,
                self.method,
                client.api_url()
            );

            Ok::<_, Error>(client.call(&self.namespace, &self.method, args).await?)
        })
    }
}

/// Attaches the built-in extensions and the ones declared in the config file.
fn compose() -> Result<ExtendedClient, Error> {
    let config = APP.config();
    let declared = config.extensions.clone();

    let client = ClientBuilder::new(config.connection.clone())
        .extension(setup_auth_extension)
        .extension(setup_bank_extension)
        .extension(setup_supply_extension)
        .extension(move |_: &LcdClient| ExtensionModule::declared(declared.clone()))
        .build()?;

    Ok(client)
}

fn parse_pair(pair: &str) -> Result<(&str, &str), Error> {
    match pair.split_once('=') {
        Some((name, value)) if !name.is_empty() => Ok((name, value)),
        _ => Err(Error::Argument(format!(
            "expected name=value, got '{}'",
            pair
        ))),
    }
}
