use super::{connect, run_and_print};
use crate::error::Error;
use abscissa_core::{Command, Runnable};
use clap::Parser;

#[derive(Command, Debug, Parser)]
pub struct NodeInfoCmd {}

impl Runnable for NodeInfoCmd {
    fn run(&self) {
        run_and_print(async {
            let client = connect()?;

            Ok::<_, Error>(client.node_info().await?)
        })
    }
}
