//! Command-line interface definitions.
//!
//! This module contains only clap struct definitions - no business logic.
//! All command implementations are in the `commands` module.

use arrkit_core::{ArrayOptionsOverride, EmptyPolicy, IndexPolicy};
use clap::{Args, Parser, Subcommand, ValueEnum};

/// arrkit - array utilities over dynamically typed sequences
#[derive(Parser, Debug)]
#[command(name = "arrkit", version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Call an Array function with JSON arguments
    Eval(EvalArgs),

    /// List the Array functions
    List,
}

/// Arguments for the `eval` command.
#[derive(Args, Debug)]
pub struct EvalArgs {
    /// Function name, e.g. `RemoveInPlace`
    pub function: String,

    /// Arguments as JSON; `{"$date": <millis>}` is a date
    #[arg(allow_negative_numbers = true)]
    pub args: Vec<String>,

    /// Compare elements without cross-kind coercion
    #[arg(long)]
    pub strict: bool,

    /// What Truncate and Curtail do with an empty sequence
    #[arg(long, value_name = "POLICY")]
    pub empty: Option<EmptyMode>,

    /// What InsertAt does with an out-of-range index
    #[arg(long, value_name = "POLICY")]
    pub index: Option<IndexMode>,
}

impl EvalArgs {
    /// The option overrides selected on the command line.
    pub fn overrides(&self) -> ArrayOptionsOverride {
        ArrayOptionsOverride {
            empty: self.empty.map(Into::into),
            index: self.index.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum EmptyMode {
    /// Report an error
    Reject,
    /// Leave the sequence empty
    Ignore,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IndexMode {
    /// Report an error
    Reject,
    /// Clamp into the valid range
    Clamp,
}

impl From<EmptyMode> for EmptyPolicy {
    fn from(mode: EmptyMode) -> Self {
        match mode {
            EmptyMode::Reject => EmptyPolicy::Reject,
            EmptyMode::Ignore => EmptyPolicy::Ignore,
        }
    }
}

impl From<IndexMode> for IndexPolicy {
    fn from(mode: IndexMode) -> Self {
        match mode {
            IndexMode::Reject => IndexPolicy::Reject,
            IndexMode::Clamp => IndexPolicy::Clamp,
        }
    }
}
