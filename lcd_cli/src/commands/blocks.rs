use super::{connect, run_and_print};
use crate::error::Error;
use abscissa_core::{Command, Runnable};
use clap::Parser;

#[derive(Command, Debug, Parser)]
pub struct BlocksCmd {
    /// Block height
    #[clap(long)]
    height: Option<u64>,
}

impl Runnable for BlocksCmd {
    fn run(&self) {
        let height = self.height;

        run_and_print(async move {
            let client = connect()?;
            let block = match height {
                Some(height) => client.blocks(height).await?,
                None => client.blocks_latest().await?,
            };

            Ok::<_, Error>(block)
        })
    }
}
