mod browse_cmd;
mod cli;
mod dates_cmd;
mod fetch_cmd;
mod latest_cmd;
mod logging;
mod sink;

use std::process;

use anyhow::Result;
use clap::Parser;

use crate::cli::{Cli, Command};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Latest(args) => latest_cmd::run(args),
        Command::Dates(args) => dates_cmd::run(args),
        Command::Fetch(args) => fetch_cmd::run(args),
        Command::Browse(args) => browse_cmd::run(args),
    }
}
