//! Logging setup for the command-line tool.
//!
//! Logs go to stderr so stdout only carries results.

use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Initialize tracing. `RUST_LOG` takes precedence; otherwise `warn`, or
/// `debug` for the crate when `verbose` is set.
pub fn init(verbose: bool) {
    let default_filter = if verbose { "warn,nfind=debug" } else { "warn" };
    init_with_filter(default_filter);
}

/// Initialize tracing with a custom default filter
pub fn init_with_filter(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    // A second init (e.g. from tests) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .try_init();
}
