//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "FASTPI_LOG";

static INIT: Once = Once::new();

/// Initialize logging to stderr.
///
/// Reads the `FASTPI_LOG` environment variable for the filter, e.g.
/// `FASTPI_LOG=fastPi=debug`. Falls back to warnings only if it is unset or
/// invalid. Calling this more than once is a no-op.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));

        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_target(true)
                    .with_thread_names(true),
            )
            .with(filter)
            .init();
    });
}
