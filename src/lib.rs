//! forecast-config - configuration provider for a DLM TVP-SV forecasting pipeline.
//!
//! Resolves project paths, holds the model, calibration, visualization and
//! data-processing parameters, and prints a human-readable summary of them.
//! Pipeline stages borrow a [`config::Settings`] and only read from it.

pub mod cli;
pub mod config;
pub mod constants;
pub mod error;

use clap::Parser;
use cli::{Cli, Command, PathKind};
use config::{Parameters, load_parameters_file};
use tracing::{debug, info};

pub use error::{Error, Result};

/// Main entry point for the forecast-config binary.
#[allow(clippy::print_stdout)]
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    let params = match &cli.params {
        Some(path) => load_parameters_file(path)?,
        None => Parameters::default(),
    };

    init_logging(cli.verbose, cli.quiet, params.logging.verbose);

    if let Some(path) = &cli.params {
        info!("Using parameters from {}", path.display());
    }

    let settings = config::init_with(|| params)?;
    debug!("Project root: {}", settings.paths().project_root.display());

    match cli.command.unwrap_or(Command::Show) {
        Command::Show => settings.print_config(),
        Command::Snapshot => {
            let snapshot = settings.snapshot()?;
            let json = serde_json::to_string_pretty(&snapshot)
                .map_err(|e| Error::SnapshotSerialize { source: e })?;
            println!("{json}");
        }
        Command::Path { dir, filename } => {
            let path = match dir {
                PathKind::Input => settings.create_input_file_path(&filename)?,
                PathKind::Output => settings.create_output_file_path(&filename)?,
            };
            println!("{}", path.display());
        }
    }

    Ok(())
}

fn init_logging(verbose: u8, quiet: bool, config_verbose: bool) {
    use tracing_subscriber::{EnvFilter, fmt};

    let filter_str = log_filter(verbose, quiet, config_verbose);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter_str));

    // Logs go to stderr; stdout carries only the requested output.
    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Default log filter for the command-line flags and `logging.verbose`.
///
/// `-q` wins, then `-v`/`-vv`. Without flags, `logging.verbose` selects
/// `info` and its absence `warn`.
const fn log_filter(verbose: u8, quiet: bool, config_verbose: bool) -> &'static str {
    if quiet {
        return "warn";
    }
    match verbose {
        0 if config_verbose => "info",
        0 => "warn",
        1 => "debug",
        _ => "trace",
    }
}
