//! rxbench: time every registry pattern over a corpus file

use clap::Parser;
use rxbench_cli::commands::{self, bench};
use rxbench_cli::error::EXIT_FAILURE;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = match bench::BenchArgs::try_parse() {
        Ok(args) => args,
        Err(err) => return commands::parse_failure(err, bench::USAGE),
    };

    match args.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::from(EXIT_FAILURE)
        }
    }
}
