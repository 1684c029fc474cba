//! # Assignment checker CLI

use assign_cli::{execute, Cli, EXIT_FAILURE};
use clap::Parser;
use std::process;

fn main() {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(cli.log_filter())
        .parse_default_env()
        .init();

    let code = match execute(&cli) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            EXIT_FAILURE
        }
    };
    process::exit(code);
}
