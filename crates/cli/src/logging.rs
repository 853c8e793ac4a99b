//! Logging setup for the binary.
//!
//! Events go to stderr so stdout stays parseable in `--output json` mode.

use tracing_subscriber::EnvFilter;

/// Environment variable holding a `tracing` filter directive.
pub(crate) const LOG_ENV: &str = "TOKENLIST_LOG";

pub(crate) fn init(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(default));

    // A subscriber may already be set when embedded in a test harness
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
