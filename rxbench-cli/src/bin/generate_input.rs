//! generate-input: write the deterministic benchmark corpus

use clap::Parser;
use rxbench_cli::commands::{self, generate::GenerateArgs};
use rxbench_cli::error::EXIT_FAILURE;
use std::process::ExitCode;

const USAGE: &str = "Usage: generate-input [OPTIONS]";

fn main() -> ExitCode {
    let args = match GenerateArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return commands::parse_failure(err, USAGE),
    };

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
