//! forecast-config CLI entry point.

#![allow(clippy::print_stderr)]

fn main() {
    if let Err(e) = forecast_config::run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
