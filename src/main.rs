//! Watchman CLI - run commands when a file is written
//!
//! Usage: watchman --file <FILE> --command <COMMAND> [--split-and | --split-then]
//!                 [--ms-gap <MS>] [--start] [--sync] [--json] [-v...]

mod cli;
mod commands;
mod ui;

use anyhow::Result;
use clap::Parser;

use crate::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    watchman::logging::init(cli.verbose);

    commands::watch::cmd_watch(&cli)
}
