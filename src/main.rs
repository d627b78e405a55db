//! # tablewash command-line entry point
//!
//! ```bash
//! tablewash init-config                       # write tablewash.json
//! tablewash profile -i data/raw/cumulative.csv
//! tablewash clean --config tablewash.json
//! ```
//!
//! Logging goes to stderr and to a rolling file; set `RUST_LOG=debug` for
//! per-stage detail.

#![warn(clippy::all, rust_2018_idioms)]
#![expect(clippy::print_stdout)] // command output is the binary's job

mod cli;

use anyhow::Result;
use clap::Parser as _;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    tablewash::logging::init()?;

    let result = cli::run_command(cli.command);

    if let Err(err) = &result {
        tracing::error!("{err:#}");
        if let Ok(path) = tablewash::logging::get_current_log_path() {
            tracing::info!("Details in {}", path.display());
        }
    }
    result
}
