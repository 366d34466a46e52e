//! arrkit CLI - array utilities over dynamically typed sequences.

mod cli;
mod commands;
mod common;

use clap::Parser;
use cli::{Cli, Command};

fn main() {
    // Initialize logging subscriber
    use tracing_subscriber::{EnvFilter, fmt};

    // Use RUST_LOG environment variable to control log level
    // Default to WARN if not set
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    fmt()
        .compact()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Command::Eval(args) => commands::eval::run(args),
        Command::List => {
            commands::list::run();
            Ok(())
        }
    };

    if let Err(e) = result {
        common::error::render_and_exit(e, cli.no_color);
    }
}
