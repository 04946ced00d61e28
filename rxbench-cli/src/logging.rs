//! Logging setup shared by both binaries
//!
//! Logs go to stderr through `env_logger`; stdout carries only the report.

/// Log filter for a `-v` count
pub fn level_for(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Initialize logging based on verbosity level. `RUST_LOG` still overrides.
/// Does nothing when `quiet` is set or a logger is already installed.
pub fn init(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level_for(verbose)),
    )
    .format_timestamp_millis()
    .try_init();
}
