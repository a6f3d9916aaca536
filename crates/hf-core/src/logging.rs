//! Logging bootstrap.
//!
//! stdout is reserved for the report payload; all log output goes to stderr.
//! `HOSTFETCH_LOG` (or `RUST_LOG`) overrides the verbosity flags.

use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;

/// Initialize the logging subsystem. Call once at startup.
pub fn init(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    };

    let filter = EnvFilter::try_from_env("HOSTFETCH_LOG")
        .or_else(|_| EnvFilter::try_from_default_env())
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    let use_ansi = std::io::stderr().is_terminal();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_ansi(use_ansi)
        .without_time()
        .init();
}
