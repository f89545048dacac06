//! Logger setup shared by every Roomly binary.

use tracing_subscriber::{EnvFilter, fmt};

/// Install the global `tracing` subscriber.
///
/// `RUST_LOG` takes precedence. Without it, the binary's own crate logs at
/// `default_level` and everything else at `warn`.
pub fn setup_logger(bin_name: &str, default_level: &str) {
    let crate_name = bin_name.replace('-', "_");
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "warn,{crate_name}={default_level},roomly_server={default_level},tower_http={default_level}"
        ))
    });

    // try_init: tests and embedding binaries may have installed a subscriber already
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
