//!
//! The diagnostic logging setup.
//!

use std::io::IsTerminal;

use tracing_subscriber::EnvFilter;

///
/// Installs the standard error subscriber.
///
/// `RUST_LOG` takes precedence over the verbosity flag.
///
pub fn initialize(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .try_init();
}
