//! CLI command implementations

use crate::error::{CliError, EXIT_FAILURE};
use clap::error::ErrorKind;
use std::process::ExitCode;

pub mod bench;
pub mod generate;

/// Turn a clap parse failure into the process exit status.
///
/// Help and version requests succeed. Anything else prints clap's message on
/// stderr and the short usage line on stdout, then exits with 1.
pub fn parse_failure(err: clap::Error, usage: &str) -> ExitCode {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            let _ = err.print();
            ExitCode::SUCCESS
        }
        _ => {
            let _ = err.print();
            println!("{}", CliError::Usage(usage.to_string()));
            ExitCode::from(EXIT_FAILURE)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bench::BenchArgs;
    use clap::Parser;

    #[test]
    fn test_parse_failure_kinds() {
        let help = BenchArgs::try_parse_from(["rxbench", "--help"]).unwrap_err();
        assert_eq!(help.kind(), ErrorKind::DisplayHelp);
        assert_eq!(parse_failure(help, bench::USAGE), ExitCode::SUCCESS);

        let missing = BenchArgs::try_parse_from(["rxbench"]).unwrap_err();
        assert_eq!(missing.kind(), ErrorKind::MissingRequiredArgument);
        assert_eq!(
            parse_failure(missing, bench::USAGE),
            ExitCode::from(EXIT_FAILURE)
        );
    }
}
