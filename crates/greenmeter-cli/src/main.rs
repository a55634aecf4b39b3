//! Green Meter - carbon emission estimator for logistics operations
//!
//! A CLI tool that turns yearly activity data into tons CO2e and compares a
//! baseline against an optimized scenario.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
