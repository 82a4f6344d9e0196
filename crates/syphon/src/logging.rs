//! Tracing setup for the CLI.

use tracing_subscriber::EnvFilter;

/// Environment variable holding the log filter, e.g. `SYPHON_LOG=syphon_core=trace`.
pub const LOG_ENV: &str = "SYPHON_LOG";

/// Install a stderr subscriber. `verbose` forces `debug`; otherwise `SYPHON_LOG`
/// is used, falling back to `warn`.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    // A subscriber may already be installed when embedded in tests
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
