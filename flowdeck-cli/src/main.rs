//! Flowdeck command-line interface.
//!
//! A thin presentation layer over the board engine: each subcommand loads
//! the snapshot, applies one operation, persists the result, and prints the
//! engine's JSON outcome to stdout.

mod commands;

use clap::Parser;
use commands::Cli;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    if let Err(err) = commands::run(cli) {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}
