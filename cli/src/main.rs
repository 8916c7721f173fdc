mod cli;
mod error;
mod progress;
mod ui;
mod update;

use clap::Parser;
use cli::Cli;
use colored::Colorize;
use std::process;

fn main() {
    let cli = Cli::parse();

    if let Err(err) = update::execute(cli.verbose, cli.dry_run) {
        eprintln!("{} {}", "Error:".bold().red(), err.user_message());
        process::exit(1);
    }
}
