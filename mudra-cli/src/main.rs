// mudra-cli/src/main.rs
//
// Entry point for the Mudra command-line interface. Parses arguments,
// initializes logging, and dispatches to the command implementations.

use clap::Parser;
use owo_colors::OwoColorize;
use std::process;

mod cli;
mod commands;
mod logging;

use cli::{Cli, Commands};

fn main() {
    let cli = Cli::parse();

    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    let result = match cli.command {
        Commands::Prepare(args) => commands::prepare::run_prepare(args),
        Commands::Split(args) => commands::split::run_split(args),
        Commands::Inspect(args) => commands::inspect::run_inspect(args),
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        process::exit(1);
    }
}
