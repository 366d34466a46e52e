//! Error handling utilities for the CLI.

use nu_ansi_term::Color;

/// Errors reported by CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("argument {position}: invalid JSON: {source}")]
    Json {
        position: usize,
        source: serde_json::Error,
    },

    #[error("argument {position}: {message}")]
    Argument { position: usize, message: String },

    #[error(transparent)]
    Array(#[from] arrkit_core::Error),
}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Render an error to stderr and exit with code 1.
pub fn render_and_exit(error: CliError, no_color: bool) -> ! {
    eprintln!("{}: {}", prefix(no_color), error);
    std::process::exit(1);
}

fn prefix(no_color: bool) -> String {
    if no_color {
        "error".to_string()
    } else {
        Color::Red.bold().paint("error").to_string()
    }
}
