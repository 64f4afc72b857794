//! Logging setup.
//!
//! Logs go to stderr so stdout stays machine-readable. `RUST_LOG` wins over
//! the verbosity flags when set.

use tracing_subscriber::EnvFilter;

/// Default filter directive for the given verbosity flags
pub fn default_directive(quiet: bool, verbose: bool) -> &'static str {
    match (quiet, verbose) {
        (_, true) => "debug",
        (true, false) => "error",
        (false, false) => "warn",
    }
}

/// Install the global tracing subscriber
pub fn init(quiet: bool, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(quiet, verbose)));

    // try_init: a subscriber may already be installed (tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
