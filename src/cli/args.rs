//! CLI argument definitions.

use crate::constants::APP_NAME;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Show the forecasting pipeline configuration.
///
/// Without a subcommand, prints the configuration summary.
#[derive(Debug, Parser)]
#[command(name = APP_NAME)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Option<Command>,

    /// TOML file overriding parameter defaults.
    #[arg(long, global = true, value_name = "FILE")]
    pub params: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Only log warnings and errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the configuration summary (the default).
    Show,
    /// Print every configuration group as JSON.
    Snapshot,
    /// Resolve a file name inside the input or output directory.
    Path {
        /// Directory to resolve against.
        #[arg(value_enum)]
        dir: PathKind,
        /// File name to join.
        filename: String,
    },
}

/// Which configured directory a path is built in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PathKind {
    /// The input directory.
    Input,
    /// The output directory.
    Output,
}
