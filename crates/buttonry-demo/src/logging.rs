//! Logging setup using tracing.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "BUTTONRY_LOG";

const DEFAULT_FILTER: &str = "warn";

/// Installs a stderr subscriber filtered by `BUTTONRY_LOG`.
///
/// # Examples
/// ```bash
/// BUTTONRY_LOG=debug buttonry-demo theme set dark-theme
/// BUTTONRY_LOG=buttonry=trace buttonry-demo render
/// ```
pub fn init() {
    let env_filter =
        EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // A subscriber may already be installed when embedded; keep it.
    let _ = tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(true)
                .without_time(),
        )
        .try_init();
}
