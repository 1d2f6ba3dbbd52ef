//! Tracing initialization.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Initialize the curator tracing/logging system.
///
/// Reads the `CURATOR_LOG` environment variable for per-crate log levels,
/// e.g. `CURATOR_LOG=curator_scheduler=debug,curator_training=info`.
/// Falls back to `default_level` for all curator crates when unset or invalid.
///
/// Idempotent: only the first call installs a subscriber.
pub fn init_tracing(default_level: &str) {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_env("CURATOR_LOG")
            .unwrap_or_else(|_| EnvFilter::new(default_filter(default_level)));

        let _ = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(filter)
            .try_init();
    });
}

fn default_filter(level: &str) -> String {
    [
        "curator_core",
        "curator_clustering",
        "curator_scheduler",
        "curator_training",
        "curator_session",
    ]
    .iter()
    .map(|c| format!("{c}={level}"))
    .collect::<Vec<_>>()
    .join(",")
}
