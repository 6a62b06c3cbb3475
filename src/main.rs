//! wordpart - word-part movement for mixed-script text
//! Main entry point

use anyhow::Result;
use clap::Parser;
use wordpart::cli::{init_logging, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    log::debug!("arguments: {cli:?}");

    if let Some(output) = cli.execute()? {
        println!("{output}");
    }
    Ok(())
}
