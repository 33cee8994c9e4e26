//! Logging setup shared by the binaries.
//!
//! The library itself only emits `tracing` events. Progress messages are `info`, skipped
//! networks and missing files are `warn`.

use tracing_subscriber::EnvFilter;

/// Environment variable with the log filter directives (e.g. `DREAM4_LOG=debug`).
pub const LOG_ENV: &str = "DREAM4_LOG";

/// Install a human-readable `tracing` subscriber which logs to stderr, so that stdout
/// only contains the final summary.
///
/// Respects the `DREAM4_LOG` environment variable for filtering, defaults to `info`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
