//! sessionbuilder CLI: crawl interview folders and write the sessions spreadsheet.

use anyhow::Result;
use clap::Parser;
use sessionbuilder::engine::arg_parser::Cli;
use sessionbuilder::engine::handle_run;
use std::time::Instant;

fn main() -> Result<()> {
    let start_time = Instant::now();
    let cli = Cli::parse();
    handle_run(&cli)?;
    log::debug!("Total time: {:?}", start_time.elapsed());
    Ok(())
}
